//! Core error types for taskrank-core.
//!
//! Nothing in this library can transiently fail, so there are no retries
//! and no logging; every error is returned to the caller to handle,
//! display, or discard.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Core error type for taskrank-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Title lookup errors
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Invalid observation window
    #[error("Invalid time range: end_date ({end}) must be greater than start_date ({start})")]
    InvalidTimeRange {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Errors raised when resolving catalog entries by title.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    /// No entry carries the requested title
    #[error("No entry titled '{title}' was found")]
    NotFound { title: String },

    /// More than one entry carries the requested title
    #[error("{count} entries share the title '{title}'")]
    AmbiguousTitle { title: String, count: usize },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
