use crate::{Error, LogStore, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use wastelog_types::{parse_grams, WasteRecord};

const REQUIRED_COLUMNS: [&str; 4] = ["DATE", "ITEM", "GRAMS", "REASON"];

/// Options for a bulk CSV import.
#[derive(Debug, Default)]
pub struct ImportOptions {
    /// Canonical column name (e.g. `GRAMS`) to actual header in the source
    /// file (e.g. `Menge`). When absent, headers are matched by their
    /// canonical names, case-insensitively.
    pub mapping: Option<HashMap<String, String>>,

    /// Field delimiter. When absent, sniffed from the header line
    /// (`;` and tab are recognized, `,` is the default).
    pub delimiter: Option<u8>,

    /// Validate and count rows without writing anything.
    pub dry_run: bool,
}

/// One source row that could not be imported.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Outcome of an import run.
#[derive(Debug)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: usize,
    pub errors: Vec<RowError>,
    pub target: PathBuf,
}

/// Import waste entries from an external CSV file into a store.
///
/// Required columns (after mapping): `DATE`, `ITEM`, `GRAMS`, `REASON`;
/// an `ID` column is kept when present and non-empty. Each data row is
/// validated independently; failures are collected as [`RowError`]s and
/// never abort the remaining rows. IO failures on the target store are
/// fatal, leaving prior durable state unchanged.
pub fn import_csv(
    csv_path: impl AsRef<Path>,
    store: &LogStore,
    options: &ImportOptions,
) -> Result<ImportSummary> {
    let csv_path = csv_path.as_ref();
    if !csv_path.exists() {
        return Err(Error::Import(format!(
            "CSV not found: {}",
            csv_path.display()
        )));
    }
    let content = fs::read_to_string(csv_path)?;

    let delimiter = options
        .delimiter
        .unwrap_or_else(|| sniff_delimiter(&content));
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let columns = resolve_columns(&headers, options.mapping.as_ref())?;

    let mut summary = ImportSummary {
        added: 0,
        skipped: 0,
        errors: Vec::new(),
        target: store.path().to_path_buf(),
    };

    for row in reader.records() {
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                let line = err.position().map(|p| p.line() as usize).unwrap_or(0);
                summary.skipped += 1;
                summary.errors.push(RowError {
                    line,
                    message: err.to_string(),
                });
                continue;
            }
        };
        let line = row.position().map(|p| p.line() as usize).unwrap_or(0);
        match build_record(&row, &columns) {
            Ok(record) => {
                if !options.dry_run {
                    store.append(&record)?;
                }
                summary.added += 1;
            }
            Err(message) => {
                summary.skipped += 1;
                summary.errors.push(RowError { line, message });
            }
        }
    }

    Ok(summary)
}

/// Column indices for one import run. `id` stays optional.
struct Columns {
    date: usize,
    item: usize,
    grams: usize,
    reason: usize,
    id: Option<usize>,
}

fn resolve_columns(
    headers: &csv::StringRecord,
    mapping: Option<&HashMap<String, String>>,
) -> Result<Columns> {
    let find = |wanted: &str| -> Option<usize> {
        let target = match mapping {
            Some(map) => map
                .iter()
                .find(|(k, _)| k.trim().eq_ignore_ascii_case(wanted))
                .map(|(_, v)| v.trim().to_string())
                .unwrap_or_else(|| wanted.to_string()),
            None => wanted.to_string(),
        };
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(&target))
    };

    match (find("DATE"), find("ITEM"), find("GRAMS"), find("REASON")) {
        (Some(date), Some(item), Some(grams), Some(reason)) => Ok(Columns {
            date,
            item,
            grams,
            reason,
            id: find("ID"),
        }),
        _ => {
            let missing: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .filter(|c| find(c).is_none())
                .copied()
                .collect();
            let found: Vec<&str> = headers.iter().collect();
            Err(Error::Import(format!(
                "missing required columns: {} (found: {})",
                missing.join(", "),
                found.join(", ")
            )))
        }
    }
}

fn build_record(row: &csv::StringRecord, columns: &Columns) -> std::result::Result<WasteRecord, String> {
    let field = |index: usize| row.get(index).unwrap_or("");
    let grams = parse_grams(field(columns.grams)).map_err(|e| e.to_string())?;
    let date = field(columns.date);
    let item = field(columns.item);
    let reason = field(columns.reason);

    let id = columns
        .id
        .map(|index| field(index).trim())
        .filter(|id| !id.is_empty());

    let record = match id {
        Some(id) => WasteRecord::with_id(id, item, grams, reason, Some(date)),
        None => WasteRecord::new(item, grams, reason, Some(date)),
    };
    record.map_err(|e| e.to_string())
}

/// Best-effort delimiter detection from the header line.
fn sniff_delimiter(content: &str) -> u8 {
    let header = content.lines().next().unwrap_or("");
    if header.contains(';') && !header.contains(',') {
        b';'
    } else if header.contains('\t') && !header.contains(',') {
        b'\t'
    } else {
        b','
    }
}
