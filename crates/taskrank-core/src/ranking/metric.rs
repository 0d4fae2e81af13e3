//! Urgency metrics: deadline pressure, work-completion pressure, and their
//! combination into a single priority score.
//!
//! The deadline formula divides by the squared seconds to the due instant,
//! so urgency rises steeply as the deadline approaches. Squaring also
//! discards the sign of the distance: a deadline already behind the window
//! start scores with the same positive magnitude as one equally far ahead.
//! The relevance filter excludes lapsed deadlines before ranking, so
//! [`rank`](crate::rank) output never depends on this, but direct callers
//! of these functions see the literal formula.

use serde::{Deserialize, Serialize};

use crate::task::Task;
use crate::window::Window;

/// Per-task score breakdown.
///
/// Carries both raw signals next to the combined score so a caller can show
/// where a task's position came from. [`priority_metric`] is its scalar
/// projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    /// Deadline-pressure signal
    pub deadline: f64,
    /// Work-completion-pressure signal
    pub time_tracking: f64,
    /// Combined priority score
    pub priority: f64,
}

/// Compute the deadline-pressure signal for `task`.
///
/// Returns `0.0` for tasks without a deadline. Otherwise the score is
/// `delta_start / delta_deadline^2`, where `delta_deadline` is the seconds
/// from the window start to the due instant and `delta_start` scales
/// urgency down for tasks whose allowed start leaves little overlap with
/// the window: seconds from the deadline's start date to the window end,
/// divided by the window span and capped at `1.0` (`1.0` when the deadline
/// has no start date).
///
/// A due instant exactly at the window start would divide by zero; that
/// case is defined as maximal urgency and returns `f64::INFINITY`.
///
/// Assumes the window spans a positive duration; `rank` validates this
/// before any scoring.
pub fn deadline_metric(task: &Task, window: &Window) -> f64 {
    let Some(deadline) = &task.deadline else {
        return 0.0;
    };

    let delta_deadline = seconds_between(window.start_date, deadline.deadline);
    if delta_deadline == 0.0 {
        return f64::INFINITY;
    }

    let delta_start = match deadline.start_date {
        Some(start_date) => {
            let ratio = seconds_between(start_date, window.end_date) / window.span_seconds();
            ratio.min(1.0)
        }
        None => 1.0,
    };

    delta_start / (delta_deadline * delta_deadline)
}

/// Compute the work-completion-pressure signal for `task`.
///
/// Returns `0.0` for tasks without time tracking. Otherwise the fraction of
/// planned work remaining, `(plan - work) / plan`, unclamped: an over-budget
/// task scores negative and ranks as less urgent by this signal. A zero
/// plan is defined as `0.0` remaining rather than an undefined division.
pub fn time_tracking_metric(task: &Task) -> f64 {
    let Some(tracking) = &task.time_tracking else {
        return 0.0;
    };
    if tracking.plan == 0.0 {
        return 0.0;
    }
    (tracking.plan - tracking.work) / tracking.plan
}

/// Combine both signals into one priority score.
///
/// A task lacking one signal is ranked purely by the other; with both
/// present the score is their product, so either signal near zero
/// suppresses overall urgency.
pub fn priority_metric(task: &Task, window: &Window) -> f64 {
    priority_breakdown(task, window).priority
}

/// Compute both signals and the combined score for `task`.
pub fn priority_breakdown(task: &Task, window: &Window) -> PriorityBreakdown {
    let deadline = deadline_metric(task, window);
    let time_tracking = time_tracking_metric(task);
    let priority = if deadline == 0.0 {
        time_tracking
    } else if time_tracking == 0.0 {
        deadline
    } else {
        deadline * time_tracking
    };

    PriorityBreakdown {
        deadline,
        time_tracking,
        priority,
    }
}

fn seconds_between(from: chrono::DateTime<chrono::Utc>, to: chrono::DateTime<chrono::Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / 1000.0
}
