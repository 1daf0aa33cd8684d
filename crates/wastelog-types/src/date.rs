use crate::{Error, Result};
use chrono::{Local, NaiveDate};

/// Accepted input formats, tried in this order. The first match wins.
const FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%Y/%m/%d"];

/// Parse a date string in one of the accepted formats.
///
/// Supported: `YYYY-MM-DD`, `DD.MM.YYYY`, `YYYY/MM/DD`. Input is trimmed
/// first; an unparseable string returns `Error::DateFormat` carrying the
/// original input.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    for format in FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Ok(date);
        }
    }
    Err(Error::DateFormat(input.to_string()))
}

/// Current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a non-negative integer gram amount from text.
///
/// Fractional or non-numeric input is rejected before any record is
/// constructed, as is anything negative.
pub fn parse_grams(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value < 0 => Err(Error::Validation(format!(
            "grams must be >= 0, got {}",
            value
        ))),
        Ok(value) => u32::try_from(value)
            .map_err(|_| Error::Validation(format!("grams out of range: {}", value))),
        Err(_) => Err(Error::Validation(format!(
            "grams must be an integer, got '{}'",
            trimmed
        ))),
    }
}
