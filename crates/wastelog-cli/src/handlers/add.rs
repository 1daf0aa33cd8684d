use crate::types::OutputFormat;
use anyhow::Result;
use wastelog_store::LogStore;
use wastelog_types::{parse_grams, RawRecord, WasteRecord};

pub fn handle(
    store: &LogStore,
    item: &str,
    grams: &str,
    reason: &str,
    date: Option<&str>,
    output: OutputFormat,
) -> Result<()> {
    let grams = parse_grams(grams)?;
    let record = WasteRecord::new(item, grams, reason, date)?;
    store.append(&record)?;

    match output {
        OutputFormat::Plain => {
            println!(
                "Added {}: {} {} {} g ({})",
                record.id, record.date, record.item, record.grams, record.reason
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(&RawRecord::from(&record))?);
        }
    }
    Ok(())
}
