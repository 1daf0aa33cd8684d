use crate::types::OutputFormat;
use anyhow::Result;
use wastelog_engine::waste_in_period;
use wastelog_store::LogStore;
use wastelog_types::parse_date;

pub fn handle(store: &LogStore, start: &str, end: &str, output: OutputFormat) -> Result<()> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;

    let records = super::load_records(store)?;
    let total = waste_in_period(&records, start, end)?;

    match output {
        OutputFormat::Plain => println!("Waste from {} to {}: {} g", start, end, total),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "start": start.to_string(),
                "end": end.to_string(),
                "total_grams": total,
            })
        ),
    }
    Ok(())
}
