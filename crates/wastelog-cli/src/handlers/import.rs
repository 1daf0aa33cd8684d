use crate::types::OutputFormat;
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;
use wastelog_store::{import_csv, ImportOptions, LogStore};

pub fn handle(
    store: &LogStore,
    path: &Path,
    map: &[String],
    delimiter: Option<char>,
    dry_run: bool,
    output: OutputFormat,
) -> Result<()> {
    let options = ImportOptions {
        mapping: parse_mapping(map)?,
        delimiter: delimiter.map(to_byte).transpose()?,
        dry_run,
    };

    let summary = import_csv(path, store, &options)?;

    for error in &summary.errors {
        eprintln!("Warning: line {}: {}", error.line, error.message);
    }

    match output {
        OutputFormat::Plain => {
            let verb = if dry_run { "Would import" } else { "Imported" };
            println!(
                "{} {} entries into {} ({} skipped)",
                verb,
                summary.added,
                summary.target.display(),
                summary.skipped
            );
        }
        OutputFormat::Json => {
            let errors: Vec<_> = summary
                .errors
                .iter()
                .map(|e| serde_json::json!({ "line": e.line, "message": e.message }))
                .collect();
            println!(
                "{}",
                serde_json::json!({
                    "added": summary.added,
                    "skipped": summary.skipped,
                    "errors": errors,
                    "target": summary.target.display().to_string(),
                    "dry_run": dry_run,
                })
            );
        }
    }
    Ok(())
}

/// Parse repeated `COLUMN=HEADER` pairs into an import mapping.
fn parse_mapping(pairs: &[String]) -> Result<Option<HashMap<String, String>>> {
    if pairs.is_empty() {
        return Ok(None);
    }
    let mut mapping = HashMap::new();
    for pair in pairs {
        let Some((column, header)) = pair.split_once('=') else {
            anyhow::bail!("invalid --map value '{}', expected COLUMN=HEADER", pair);
        };
        mapping.insert(column.trim().to_string(), header.trim().to_string());
    }
    Ok(Some(mapping))
}

fn to_byte(delimiter: char) -> Result<u8> {
    u8::try_from(delimiter)
        .map_err(|_| anyhow::anyhow!("delimiter must be a single ASCII character"))
}
