use crate::types::OutputFormat;
use anyhow::Result;
use wastelog_engine::total_waste;
use wastelog_store::LogStore;

pub fn handle(store: &LogStore, output: OutputFormat) -> Result<()> {
    let records = super::load_records(store)?;
    let total = total_waste(&records);

    match output {
        OutputFormat::Plain => println!("Total waste: {} g", total),
        OutputFormat::Json => println!("{}", serde_json::json!({ "total_grams": total })),
    }
    Ok(())
}
