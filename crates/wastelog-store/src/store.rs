use crate::codec::{self, DecodeIssue, CSV_HEADER};
use crate::{Result, StorageFormat};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use wastelog_types::WasteRecord;

/// Durable append/read/rewrite manager for one record file.
///
/// A store owns a path and a fixed [`StorageFormat`]. Appends are O(1) in
/// the existing file size; bulk changes go through [`LogStore::save_all`],
/// which writes a sibling temp file and renames it over the target so a
/// crash mid-write leaves the original intact. Single writer assumed.
#[derive(Debug, Clone)]
pub struct LogStore {
    path: PathBuf,
    format: StorageFormat,
}

/// Result of a full read: records in append order, plus the lines that
/// could not be decoded and were skipped.
#[derive(Debug, Default)]
pub struct ReadReport {
    pub records: Vec<WasteRecord>,
    pub skipped: Vec<DecodeIssue>,
}

impl ReadReport {
    pub fn into_records(self) -> Vec<WasteRecord> {
        self.records
    }
}

impl LogStore {
    /// Open a store at `path`, creating missing parent directories and the
    /// file itself if absent (empty for JSONL, header-only for CSV).
    pub fn open(path: impl Into<PathBuf>, format: StorageFormat) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            match format {
                StorageFormat::Jsonl => {
                    fs::write(&path, "")?;
                }
                StorageFormat::Csv => {
                    fs::write(&path, format!("{}\n", CSV_HEADER))?;
                }
            }
        }
        Ok(Self { path, format })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> StorageFormat {
        self.format
    }

    /// Append exactly one record to the end of the file.
    ///
    /// Never re-reads or re-validates existing content. An IO failure here
    /// can leave a partially written final line; that line is then skipped
    /// on the next read like any other malformed line.
    pub fn append(&self, record: &WasteRecord) -> Result<()> {
        let line = codec::encode_record(record, self.format)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        if self.format == StorageFormat::Csv && file.metadata()?.len() == 0 {
            writeln!(file, "{}", CSV_HEADER)?;
        }
        writeln!(file, "{}", line)?;
        Ok(())
    }

    /// Read every record in file order.
    ///
    /// A missing file yields an empty report, not an error. Malformed
    /// lines/rows are collected in [`ReadReport::skipped`] and never abort
    /// the read.
    pub fn read_all(&self) -> Result<ReadReport> {
        if !self.path.exists() {
            return Ok(ReadReport::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let batch = match self.format {
            StorageFormat::Jsonl => codec::decode_jsonl(&content),
            StorageFormat::Csv => codec::decode_csv(&content),
        };
        Ok(ReadReport {
            records: batch.records,
            skipped: batch.skipped,
        })
    }

    /// Atomically replace the whole file with the given records.
    ///
    /// Encodes everything to `<name>.tmp` next to the target, then renames
    /// it into place. This is the only way to drop or bulk-modify records.
    pub fn save_all(&self, records: &[WasteRecord]) -> Result<()> {
        let mut content = String::new();
        if self.format == StorageFormat::Csv {
            content.push_str(CSV_HEADER);
            content.push('\n');
        }
        for record in records {
            content.push_str(&codec::encode_record(record, self.format)?);
            content.push('\n');
        }
        let tmp_path = self.temp_path();
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
