use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use wastelog_store::StorageFormat;

/// Optional settings from `<data dir>/config.toml`. Command-line flags win
/// over everything here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub db: Option<String>,

    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&default_data_dir()?.join("config.toml"))
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Storage format from the config file, when present and valid.
    pub fn storage_format(&self) -> Result<Option<StorageFormat>> {
        match &self.format {
            Some(s) => {
                let format = s
                    .parse::<StorageFormat>()
                    .map_err(|e| anyhow::anyhow!("config: {}", e))?;
                Ok(Some(format))
            }
            None => Ok(None),
        }
    }
}

/// Resolve the data file path based on priority:
/// 1. Explicit --db flag (with tilde expansion)
/// 2. WASTELOG_DB environment variable (with tilde expansion)
/// 3. `db` key in the config file
/// 4. Platform data directory, e.g. ~/.local/share/wastelog/waste.<ext>
/// 5. ~/.wastelog/waste.<ext> (fallback for systems without a data dir)
pub fn resolve_db_path(
    explicit: Option<&str>,
    config: &Config,
    format: StorageFormat,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("WASTELOG_DB") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(path) = &config.db {
        return Ok(expand_tilde(path));
    }

    let file_name = format!("waste.{}", format.extension());
    Ok(default_data_dir()?.join(file_name))
}

fn default_data_dir() -> Result<PathBuf> {
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("wastelog"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".wastelog"));
    }

    anyhow::bail!("could not determine data directory: no HOME or XDG data directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
