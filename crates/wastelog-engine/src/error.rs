use chrono::NaiveDate;
use std::fmt;

/// Result type for wastelog-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the analytics layer
#[derive(Debug)]
pub enum Error {
    /// End date lies before the start date
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange { start, end } => {
                write!(f, "end date {} is before start date {}", end, start)
            }
        }
    }
}

impl std::error::Error for Error {}
