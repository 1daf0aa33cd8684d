pub mod add;
pub mod common_reason;
pub mod import;
pub mod list;
pub mod period;
pub mod top;
pub mod total;

use anyhow::Result;
use wastelog_store::LogStore;
use wastelog_types::WasteRecord;

/// Read every record, reporting undecodable lines as warnings on stderr.
/// Skipped lines never fail the command.
pub(crate) fn load_records(store: &LogStore) -> Result<Vec<WasteRecord>> {
    let report = store.read_all()?;
    for issue in &report.skipped {
        eprintln!(
            "Warning: skipped undecodable line {} in {}: {}",
            issue.line,
            store.path().display(),
            issue.message
        );
    }
    Ok(report.records)
}
