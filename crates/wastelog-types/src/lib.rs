pub mod date;
pub mod error;
pub mod record;

pub use date::{parse_date, parse_grams, today};
pub use error::{Error, Result};
pub use record::{RawRecord, WasteRecord};
