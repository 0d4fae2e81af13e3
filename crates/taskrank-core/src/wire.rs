//! Construction boundary for tasks fetched from a remote tracker.
//!
//! The remote representation uses camelCase keys and millisecond epoch
//! timestamps. All defaulting happens here, before records reach the
//! scoring functions: absent `archived`/`completed` become `false`, an
//! absent description becomes empty, and `deadline`/`timeTracking` stay
//! wholly absent unless explicitly provided. The core never parses this
//! representation itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::task::{Deadline, Task, TimeTracking};

/// Task as represented by the remote tracker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub completed: bool,
    pub deadline: Option<DeadlineRecord>,
    pub time_tracking: Option<TimeTrackingRecord>,
}

/// Deadline block of a remote task; instants are milliseconds since epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineRecord {
    pub deadline: i64,
    pub start_date: Option<i64>,
}

/// Time tracking block of a remote task; hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeTrackingRecord {
    pub plan: f64,
    pub work: f64,
}

impl TryFrom<TaskRecord> for Task {
    type Error = ValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let deadline = match record.deadline {
            Some(block) => {
                let due = instant_from_millis(block.deadline, "deadline.deadline")?;
                let start_date = match block.start_date {
                    Some(millis) => Some(instant_from_millis(millis, "deadline.startDate")?),
                    None => None,
                };
                Some(Deadline {
                    deadline: due,
                    start_date,
                })
            }
            None => None,
        };

        Ok(Task {
            id: record.id,
            title: record.title,
            description: record.description,
            archived: record.archived,
            completed: record.completed,
            deadline,
            time_tracking: record
                .time_tracking
                .map(|block| TimeTracking::new(block.plan, block.work)),
        })
    }
}

/// Parse a JSON array of remote task records into core tasks.
///
/// # Errors
/// Returns [`CoreError::Json`] on malformed JSON and
/// [`CoreError::Validation`] when a timestamp is out of range.
pub fn tasks_from_json(json: &str) -> Result<Vec<Task>, CoreError> {
    let records: Vec<TaskRecord> = serde_json::from_str(json)?;
    records
        .into_iter()
        .map(|record| Task::try_from(record).map_err(CoreError::from))
        .collect()
}

fn instant_from_millis(millis: i64, field: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| ValidationError::InvalidValue {
        field: field.to_string(),
        message: format!("timestamp {millis} ms is out of range"),
    })
}
