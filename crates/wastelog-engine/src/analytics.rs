use crate::{Error, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use wastelog_types::WasteRecord;

/// Summed waste for one item, as returned by [`top_items`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTotal {
    pub item: String,
    pub grams: u64,
}

/// Total wasted grams across all records. Zero for an empty slice.
pub fn total_waste(records: &[WasteRecord]) -> u64 {
    records.iter().map(|r| r.grams as u64).sum()
}

/// Top `n` items by summed grams, descending.
///
/// Grouping is by exact (case-sensitive) item string. Ties keep the order
/// in which the items were first encountered in the input: groups are built
/// in first-seen order and the descending sort is stable.
pub fn top_items(records: &[WasteRecord], n: usize) -> Vec<ItemTotal> {
    let mut totals: Vec<ItemTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in records {
        match index.get(record.item.as_str()) {
            Some(&i) => totals[i].grams += record.grams as u64,
            None => {
                index.insert(record.item.as_str(), totals.len());
                totals.push(ItemTotal {
                    item: record.item.clone(),
                    grams: record.grams as u64,
                });
            }
        }
    }
    totals.sort_by(|a, b| b.grams.cmp(&a.grams));
    totals.truncate(n);
    totals
}

/// Total wasted grams for records dated within `[start, end]` inclusive.
///
/// `end < start` is an error; a range matching nothing yields zero.
pub fn waste_in_period(records: &[WasteRecord], start: NaiveDate, end: NaiveDate) -> Result<u64> {
    if end < start {
        return Err(Error::InvalidRange { start, end });
    }
    Ok(records
        .iter()
        .filter(|r| start <= r.date && r.date <= end)
        .map(|r| r.grams as u64)
        .sum())
}

/// The most frequent reason, or `None` for an empty slice.
///
/// Ties resolve to the reason first encountered in the input, so output is
/// reproducible across runs.
pub fn most_common_reason(records: &[WasteRecord]) -> Option<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in records {
        match index.get(record.reason.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(record.reason.as_str(), counts.len());
                counts.push((record.reason.as_str(), 1));
            }
        }
    }
    let mut best: Option<(&str, usize)> = None;
    for (reason, count) in counts {
        // Strict comparison keeps the earliest reason on ties
        if best.map(|(_, c)| count > c).unwrap_or(true) {
            best = Some((reason, count));
        }
    }
    best.map(|(reason, _)| reason.to_string())
}
