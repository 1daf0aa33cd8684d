use crate::date::{parse_date, today};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One immutable food-waste event.
///
/// A record is never edited in place once stored; bulk changes go through
/// the store's atomic rewrite. Ids are assigned at creation and unique by
/// convention only (the store does not deduplicate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WasteRecord {
    /// Opaque identifier, a v4 UUID for new records. Imported legacy
    /// records may carry arbitrary non-empty ids.
    pub id: String,

    /// Calendar date the waste occurred (no time component).
    pub date: NaiveDate,

    /// Food item name, trimmed, never empty.
    pub item: String,

    /// Wasted amount in grams. Non-negativity is carried by the type;
    /// text boundaries reject negative or fractional input up front.
    pub grams: u32,

    /// Free-form reason. New records require a non-empty reason; legacy
    /// rows decoded from disk may be empty.
    pub reason: String,
}

impl WasteRecord {
    /// Build a new record with a fresh id.
    ///
    /// Trims `item` and `reason` and rejects either being empty. A missing
    /// date string defaults to today's local date; otherwise the string is
    /// parsed with the accepted format list.
    pub fn new(item: &str, grams: u32, reason: &str, date: Option<&str>) -> Result<Self> {
        Self::with_id(&Uuid::new_v4().to_string(), item, grams, reason, date)
    }

    /// Build a record with a caller-supplied id (CSV import keeps ids from
    /// the source file). Validation is identical to [`WasteRecord::new`].
    pub fn with_id(
        id: &str,
        item: &str,
        grams: u32,
        reason: &str,
        date: Option<&str>,
    ) -> Result<Self> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::Validation("id must not be empty".to_string()));
        }
        let item = item.trim();
        if item.is_empty() {
            return Err(Error::Validation("item must not be empty".to_string()));
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(Error::Validation("reason must not be empty".to_string()));
        }
        let date = match date {
            Some(s) => parse_date(s)?,
            None => today(),
        };
        Ok(Self {
            id: id.to_string(),
            date,
            item: item.to_string(),
            grams,
            reason: reason.to_string(),
        })
    }
}

/// On-disk schema shared by both storage formats.
///
/// Field names match the stored column/key names exactly; `DATE` is always
/// the normalized `YYYY-MM-DD` form (chrono's serde representation for
/// `NaiveDate`). Decoding back into [`WasteRecord`] goes through `TryFrom`,
/// which is deliberately more permissive than the constructor: an empty
/// reason is accepted so legacy rows keep round-tripping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct RawRecord {
    pub id: String,
    pub date: NaiveDate,
    pub item: String,
    pub grams: u32,
    pub reason: String,
}

impl From<&WasteRecord> for RawRecord {
    fn from(record: &WasteRecord) -> Self {
        Self {
            id: record.id.clone(),
            date: record.date,
            item: record.item.clone(),
            grams: record.grams,
            reason: record.reason.clone(),
        }
    }
}

impl TryFrom<RawRecord> for WasteRecord {
    type Error = Error;

    fn try_from(raw: RawRecord) -> Result<Self> {
        if raw.id.trim().is_empty() {
            return Err(Error::Decode("missing or empty ID".to_string()));
        }
        if raw.item.trim().is_empty() {
            return Err(Error::Decode("missing or empty ITEM".to_string()));
        }
        Ok(Self {
            id: raw.id,
            date: raw.date,
            item: raw.item,
            grams: raw.grams,
            reason: raw.reason,
        })
    }
}
