//! Relevance filter deciding which tasks may be worked during a window.
//!
//! The predicate encodes "can this task still be touched during the
//! window", not "is this task due inside the window": a task whose deadline
//! lies beyond the window is still included as long as the deadline has not
//! lapsed relative to the window start and its allowed start, if any, has
//! not slipped past the window end.

use crate::task::Task;
use crate::window::Window;

/// Check whether `task` may be worked during `window`.
///
/// Archived and completed tasks are never relevant. A deadline must lie
/// strictly after the window start, and a deadline start date, when
/// present, strictly before the window end. A task without a deadline is
/// always relevant, subject to the flags.
pub fn is_relevant(task: &Task, window: &Window) -> bool {
    let mut result = !task.archived && !task.completed;
    if let Some(deadline) = &task.deadline {
        result = result && deadline.deadline > window.start_date;
        if let Some(start_date) = deadline.start_date {
            result = result && start_date < window.end_date;
        }
    }
    result
}

/// Filter `tasks` down to those relevant to `window`, preserving order.
pub fn get_relevant_tasks(tasks: &[Task], window: &Window) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| is_relevant(task, window))
        .cloned()
        .collect()
}
