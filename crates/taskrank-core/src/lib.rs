//! # TaskRank Core Library
//!
//! This library provides pure task-ranking logic: deciding which tasks fall
//! inside an observation window and ordering them by urgency so a consumer
//! can present the most time-critical work first. It consumes
//! already-materialized task records and returns a filtered, ordered list;
//! fetching tasks from a remote tracker and presenting results belong to
//! the callers.
//!
//! ## Key Components
//!
//! - [`rank`]: The sole entry point -- filter then stable-sort by priority
//! - [`is_relevant`] / [`get_relevant_tasks`]: The relevance filter
//! - [`deadline_metric`] / [`time_tracking_metric`] / [`priority_metric`]:
//!   The urgency signals and their combination
//! - [`wire`]: Construction boundary for remote task records
//!
//! The ambient clock is never read internally; "now" is always supplied by
//! the caller as part of the [`Window`]. Every function is a deterministic
//! function of its `(task, window)` inputs, so the library is safe to
//! invoke concurrently from multiple callers.

pub mod catalog;
pub mod error;
pub mod ranking;
pub mod task;
pub mod window;
pub mod wire;

pub use catalog::{find_by_title, Board, Project, Titled};
pub use error::{CoreError, LookupError, Result, ValidationError};
pub use ranking::{
    deadline_metric, get_relevant_tasks, is_relevant, priority_breakdown, priority_metric, rank,
    time_tracking_metric, PriorityBreakdown,
};
pub use task::{Deadline, Task, TimeTracking};
pub use window::Window;
