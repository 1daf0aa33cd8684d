use clap::ValueEnum;
use std::fmt;
use wastelog_store::StorageFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    Jsonl,
    Csv,
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Jsonl => write!(f, "jsonl"),
            FormatArg::Csv => write!(f, "csv"),
        }
    }
}

impl From<FormatArg> for StorageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Jsonl => StorageFormat::Jsonl,
            FormatArg::Csv => StorageFormat::Csv,
        }
    }
}
