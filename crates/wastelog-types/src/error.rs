use std::fmt;

/// Result type for wastelog-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Field value rejected at construction (empty item/reason, bad grams)
    Validation(String),

    /// Date string matched none of the accepted formats
    DateFormat(String),

    /// Stored record is malformed or missing a required field
    Decode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "Validation error: {}", msg),
            Error::DateFormat(input) => write!(f, "Unsupported date format: {}", input),
            Error::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
