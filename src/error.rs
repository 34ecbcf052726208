//! Error types for loading trip data and parsing user selections.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning a city's CSV file into trip records.
#[derive(Debug, Error)]
pub enum TripError {
    /// A row could not be enriched. `row` is the 1-based data row (header excluded).
    #[error("malformed record at row {row}: {reason}")]
    MalformedRecord { row: usize, reason: String },

    #[error("failed to read trip data from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Raised when a city, month or day string matches no known value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("unknown city '{0}' (expected Chicago, New York City or Washington)")]
    UnknownCity(String),

    #[error("unknown month '{0}'")]
    UnknownMonth(String),

    #[error("unknown day of week '{0}'")]
    UnknownDay(String),
}
