use crate::types::OutputFormat;
use anyhow::Result;
use wastelog_engine::most_common_reason;
use wastelog_store::LogStore;

pub fn handle(store: &LogStore, output: OutputFormat) -> Result<()> {
    let records = super::load_records(store)?;
    let reason = most_common_reason(&records);

    match output {
        OutputFormat::Plain => match reason {
            Some(reason) => println!("Most common reason: {}", reason),
            None => println!("No entries"),
        },
        OutputFormat::Json => println!("{}", serde_json::json!({ "reason": reason })),
    }
    Ok(())
}
