use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for config reads
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read the optional config.toml from the store directory.
/// A missing file yields the default config; a malformed file is an error
/// (unlike task records, config mistakes should be surfaced, not swallowed).
pub fn read_config(store_dir: &Path) -> Result<Config, ConfigError> {
    let config_path = store_dir.join("config.toml");
    if !config_path.exists() {
        return Ok(Config::default());
    }
    let config_text = fs::read_to_string(&config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.clone(),
        source: e,
    })?;
    let config: Config = toml::from_str(&config_text)?;
    Ok(config)
}
