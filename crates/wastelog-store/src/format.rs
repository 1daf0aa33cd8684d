use std::fmt;
use std::str::FromStr;

/// The two on-disk encodings a [`crate::LogStore`] can speak.
///
/// Chosen once at store construction and never mixed per instance. Switching
/// the format for an existing path does not transform its content; callers
/// must not reinterpret a file written in the other format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageFormat {
    /// One JSON object per line, blank lines ignored on read.
    Jsonl,
    /// Comma-separated rows under a fixed `ID,DATE,ITEM,GRAMS,REASON` header.
    Csv,
}

impl StorageFormat {
    /// Default file extension for the format.
    pub fn extension(&self) -> &'static str {
        match self {
            StorageFormat::Jsonl => "jsonl",
            StorageFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageFormat::Jsonl => write!(f, "jsonl"),
            StorageFormat::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for StorageFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jsonl" => Ok(StorageFormat::Jsonl),
            "csv" => Ok(StorageFormat::Csv),
            other => Err(format!("format must be 'jsonl' or 'csv', got '{}'", other)),
        }
    }
}
