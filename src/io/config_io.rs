use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Name of the optional config file looked up in the working directory
pub const CONFIG_FILE: &str = "listkeep.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse listkeep.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Read `listkeep.toml` from `dir`. A missing file yields the defaults.
pub fn read_config(dir: &Path) -> Result<Config, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        log::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
        return Ok(Config::default());
    }
    let text = fs::read_to_string(&path).map_err(|e| ConfigError::Read {
        path: path.clone(),
        source: e,
    })?;
    let config = toml::from_str(&text)?;
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}
