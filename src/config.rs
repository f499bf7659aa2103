//! Configuration loading
//!
//! Reads `~/.config/govform/config.toml` (or an explicit path). A missing
//! default file means defaults; a file that exists but cannot be read or
//! parsed is an error.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FormError;

pub use types::{AutocompleteConfig, ComponentsConfig, Config};

const CONFIG_DIR: &str = "govform";
const CONFIG_FILE: &str = "config.toml";

/// Default config location
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> Result<Config, FormError> {
    match path {
        Some(path) => read_config(path),
        None => match config_path() {
            Some(default) if default.exists() => read_config(&default),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        },
    }
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, FormError> {
    toml::from_str(content).map_err(|e| FormError::InvalidConfig(e.to_string()))
}

fn read_config(path: &Path) -> Result<Config, FormError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
