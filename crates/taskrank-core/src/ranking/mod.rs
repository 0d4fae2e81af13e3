//! Task relevance filtering and urgency ranking.
//!
//! This module provides:
//! - A relevance filter deciding whether a task falls inside a window
//! - Urgency metrics for deadline pressure and work-completion pressure
//! - The ranker combining both into a filtered, ordered task list
//!
//! Data flows one way: raw task list -> relevance filter -> per-task
//! metrics -> ordered output. No component holds state between calls.

mod metric;
mod relevance;
mod sort;

pub use metric::{
    deadline_metric, priority_breakdown, priority_metric, time_tracking_metric, PriorityBreakdown,
};
pub use relevance::{get_relevant_tasks, is_relevant};
pub use sort::rank;
