use crate::types::OutputFormat;
use anyhow::Result;
use wastelog_store::LogStore;
use wastelog_types::RawRecord;

pub fn handle(store: &LogStore, limit: usize, output: OutputFormat) -> Result<()> {
    let records = super::load_records(store)?;
    let shown = if limit > 0 && limit < records.len() {
        &records[..limit]
    } else {
        &records[..]
    };

    match output {
        OutputFormat::Plain => {
            if shown.is_empty() {
                println!("No entries");
                return Ok(());
            }
            for record in shown {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    record.id, record.date, record.item, record.grams, record.reason
                );
            }
        }
        OutputFormat::Json => {
            let raw: Vec<RawRecord> = shown.iter().map(RawRecord::from).collect();
            println!("{}", serde_json::to_string(&raw)?);
        }
    }
    Ok(())
}
