use crate::types::{FormatArg, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wastelog")]
#[command(about = "Track household food waste with a durable local log", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Path to the data file (default: config or platform data dir)")]
    pub db: Option<String>,

    #[arg(long, global = true, help = "Storage format for --db (default: config or jsonl)")]
    pub format: Option<FormatArg>,

    #[arg(long, default_value = "plain", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Add a new waste entry")]
    Add {
        #[arg(long)]
        item: String,

        // Hyphen values allowed so negative input reaches the validator
        // instead of dying as an unknown flag
        #[arg(long, allow_hyphen_values = true, help = "Wasted grams (integer >= 0)")]
        grams: String,

        #[arg(long, help = "Reason (free text)")]
        reason: String,

        #[arg(long, help = "Date (YYYY-MM-DD, DD.MM.YYYY or YYYY/MM/DD); default: today")]
        date: Option<String>,
    },

    #[command(about = "List all entries in append order")]
    List {
        #[arg(long, default_value = "0", help = "Limit number of rows shown (0 = all)")]
        limit: usize,
    },

    #[command(about = "Show total wasted grams")]
    Total,

    #[command(about = "Show top items by waste")]
    Top3 {
        #[arg(long, default_value = "3")]
        limit: usize,
    },

    #[command(about = "Show total waste in a date range (inclusive)")]
    Period {
        #[arg(long)]
        start: String,

        #[arg(long)]
        end: String,
    },

    #[command(name = "common-reason", about = "Show the most frequent reason")]
    CommonReason,

    #[command(name = "import-csv", about = "Bulk-import entries from an external CSV file")]
    ImportCsv {
        path: PathBuf,

        #[arg(
            long = "map",
            value_name = "COLUMN=HEADER",
            help = "Map a required column to a source header, e.g. GRAMS=Menge (repeatable)"
        )]
        map: Vec<String>,

        #[arg(long, help = "Field delimiter (default: sniffed from the header line)")]
        delimiter: Option<char>,

        #[arg(long, help = "Validate and count rows without writing")]
        dry_run: bool,
    },
}
