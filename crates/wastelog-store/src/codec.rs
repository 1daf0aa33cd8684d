use crate::{Result, StorageFormat};
use wastelog_types::{RawRecord, WasteRecord};

/// Fixed header row for the tabular format.
pub const CSV_HEADER: &str = "ID,DATE,ITEM,GRAMS,REASON";

/// One line/row that failed to decode, with its 1-based file line number.
#[derive(Debug, Clone)]
pub struct DecodeIssue {
    pub line: usize,
    pub message: String,
}

/// Outcome of decoding a whole file: records in file order plus any rows
/// that were skipped. A malformed line never poisons the rest of the batch.
#[derive(Debug, Default)]
pub struct DecodedBatch {
    pub records: Vec<WasteRecord>,
    pub skipped: Vec<DecodeIssue>,
}

/// Encode one record as a single line in the given format, without the
/// trailing newline (the store owns line termination).
pub fn encode_record(record: &WasteRecord, format: StorageFormat) -> Result<String> {
    let raw = RawRecord::from(record);
    match format {
        StorageFormat::Jsonl => Ok(serde_json::to_string(&raw)?),
        StorageFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(Vec::new());
            writer.serialize(&raw)?;
            let bytes = writer
                .into_inner()
                .map_err(|e| crate::Error::Io(e.into_error()))?;
            let mut line = String::from_utf8(bytes).map_err(|e| {
                crate::Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            })?;
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Ok(line)
        }
    }
}

/// Decode a full line-delimited buffer. Blank lines are skipped silently;
/// each malformed line is isolated as a [`DecodeIssue`].
pub fn decode_jsonl(content: &str) -> DecodedBatch {
    let mut batch = DecodedBatch::default();
    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let decoded = serde_json::from_str::<RawRecord>(line)
            .map_err(|e| e.to_string())
            .and_then(|raw| WasteRecord::try_from(raw).map_err(|e| e.to_string()));
        match decoded {
            Ok(record) => batch.records.push(record),
            Err(message) => batch.skipped.push(DecodeIssue {
                line: line_no,
                message,
            }),
        }
    }
    batch
}

/// Decode a full tabular buffer. The first line is the header; malformed
/// rows are isolated per line just like the JSONL variant.
pub fn decode_csv(content: &str) -> DecodedBatch {
    let mut batch = DecodedBatch::default();
    let mut reader = csv::ReaderBuilder::new().from_reader(content.as_bytes());
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(err) => {
            batch.skipped.push(DecodeIssue {
                line: 1,
                message: err.to_string(),
            });
            return batch;
        }
    };
    for row in reader.records() {
        match row {
            Ok(row) => {
                let line_no = row.position().map(|p| p.line() as usize).unwrap_or(0);
                let decoded = row
                    .deserialize::<RawRecord>(Some(&headers))
                    .map_err(|e| e.to_string())
                    .and_then(|raw| WasteRecord::try_from(raw).map_err(|e| e.to_string()));
                match decoded {
                    Ok(record) => batch.records.push(record),
                    Err(message) => batch.skipped.push(DecodeIssue {
                        line: line_no,
                        message,
                    }),
                }
            }
            Err(err) => {
                let line_no = err.position().map(|p| p.line() as usize).unwrap_or(0);
                batch.skipped.push(DecodeIssue {
                    line: line_no,
                    message: err.to_string(),
                });
            }
        }
    }
    batch
}
