use crate::args::{Cli, Commands};
use crate::config::{self, Config};
use crate::handlers;
use anyhow::Result;
use wastelog_store::{LogStore, StorageFormat};

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let format = match cli.format {
        Some(arg) => StorageFormat::from(arg),
        None => config.storage_format()?.unwrap_or(StorageFormat::Jsonl),
    };
    let db_path = config::resolve_db_path(cli.db.as_deref(), &config, format)?;
    let store = LogStore::open(&db_path, format)?;
    let output = cli.output;

    match cli.command {
        Commands::Add {
            item,
            grams,
            reason,
            date,
        } => handlers::add::handle(&store, &item, &grams, &reason, date.as_deref(), output),

        Commands::List { limit } => handlers::list::handle(&store, limit, output),

        Commands::Total => handlers::total::handle(&store, output),

        Commands::Top3 { limit } => handlers::top::handle(&store, limit, output),

        Commands::Period { start, end } => handlers::period::handle(&store, &start, &end, output),

        Commands::CommonReason => handlers::common_reason::handle(&store, output),

        Commands::ImportCsv {
            path,
            map,
            delimiter,
            dry_run,
        } => handlers::import::handle(&store, &path, &map, delimiter, dry_run, output),
    }
}
