//! Observation window over which tasks are filtered and scored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The `(start_date, end_date)` instant pair defining the observation
/// horizon for filtering and scoring.
///
/// Scoring requires `end_date` to lie strictly after `start_date`;
/// [`rank`](crate::rank) checks this via [`validate`](Self::validate)
/// before touching any metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Window {
    pub fn new(start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Check that the window spans a positive duration.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidTimeRange`] if `end_date <= start_date`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end_date <= self.start_date {
            return Err(ValidationError::InvalidTimeRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Window span in seconds.
    pub fn span_seconds(&self) -> f64 {
        (self.end_date - self.start_date).num_milliseconds() as f64 / 1000.0
    }
}
