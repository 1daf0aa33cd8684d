use crate::types::OutputFormat;
use anyhow::Result;
use wastelog_engine::top_items;
use wastelog_store::LogStore;

pub fn handle(store: &LogStore, limit: usize, output: OutputFormat) -> Result<()> {
    let records = super::load_records(store)?;
    let top = top_items(&records, limit);

    match output {
        OutputFormat::Plain => {
            if top.is_empty() {
                println!("No entries");
                return Ok(());
            }
            for (rank, entry) in top.iter().enumerate() {
                println!("{}. {}: {} g", rank + 1, entry.item, entry.grams);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(&top)?),
    }
    Ok(())
}
