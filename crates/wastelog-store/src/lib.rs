// NOTE: Storage Design Rationale
//
// Why two flat-file formats behind one store (not a database)?
// - The full record set is small enough to re-read on every query
// - JSONL appends are a single write with no read-modify cycle
// - CSV keeps the same data openable in a spreadsheet
// - Trade-off: no indexed lookups, but none are needed for aggregate queries
//
// Why atomic rewrite (temp file + rename) for bulk changes?
// - A crash mid-write must never clobber the existing log
// - The rename either fully replaces the target or leaves it untouched
// - Single-writer assumption: no cross-process locking is attempted

pub mod codec;
pub mod error;
pub mod format;
pub mod import;
pub mod store;

pub use codec::{DecodeIssue, DecodedBatch, CSV_HEADER};
pub use error::{Error, Result};
pub use format::StorageFormat;
pub use import::{import_csv, ImportOptions, ImportSummary, RowError};
pub use store::{LogStore, ReadReport};
