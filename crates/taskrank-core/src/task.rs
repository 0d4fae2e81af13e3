//! Task value types consumed by the ranking core.
//!
//! Instances are built once per ranking request by the data-access layer
//! (see the [`wire`](crate::wire) module for the remote representation)
//! and are never mutated or persisted by the core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Deadline attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    /// Due instant.
    pub deadline: DateTime<Utc>,
    /// Earliest instant the task is intended to be worked, if any.
    /// Expected to precede `deadline`; the core does not enforce this.
    pub start_date: Option<DateTime<Utc>>,
}

impl Deadline {
    /// Create a deadline with no start date.
    pub fn new(deadline: DateTime<Utc>) -> Self {
        Self {
            deadline,
            start_date: None,
        }
    }

    /// Set the earliest start instant.
    pub fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }
}

/// Planned versus logged hours for a task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeTracking {
    /// Planned hours; expected to be positive.
    pub plan: f64,
    /// Logged hours; may exceed `plan` for over-budget tasks.
    pub work: f64,
}

impl TimeTracking {
    pub fn new(plan: f64, work: f64) -> Self {
        Self { plan, work }
    }
}

/// A work item as supplied by the data-access layer.
///
/// `id`, `title` and `description` are opaque to the ranking core; only the
/// exclusion flags, the deadline and the time tracking block participate in
/// filtering and scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title
    pub title: String,
    /// Task description (empty when the source provides none)
    #[serde(default)]
    pub description: String,
    /// Whether the task is archived
    #[serde(default)]
    pub archived: bool,
    /// Whether the task is completed
    #[serde(default)]
    pub completed: bool,
    /// Optional deadline
    pub deadline: Option<Deadline>,
    /// Optional time tracking block
    pub time_tracking: Option<TimeTracking>,
}

impl Task {
    /// Create a task with an empty description and cleared flags.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            archived: false,
            completed: false,
            deadline: None,
            time_tracking: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark as archived
    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Mark as completed
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Set the deadline
    pub fn with_deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the time tracking block
    pub fn with_time_tracking(mut self, time_tracking: TimeTracking) -> Self {
        self.time_tracking = Some(time_tracking);
        self
    }
}
