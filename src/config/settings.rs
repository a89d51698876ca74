//! Settings for the `vchconf` binary

use crate::utils::io::{load_document, DocumentFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Binary settings. Every field has a default, so an empty file is valid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,
    /// Emit logs as JSON lines
    pub json_logs: bool,
    /// Pretty-print output documents
    pub pretty: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
            pretty: true,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to load config file {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

const FILE_NAMES: [&str; 3] = ["config.yaml", "config.yml", "config.json"];

/// Default location: `<config_dir>/vchconf/config.{yaml,yml,json}`, first hit wins.
pub fn default_config_path() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join("vchconf");
    FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

impl Settings {
    /// Load settings from an explicit file, which must exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        load_document(path, DocumentFormat::from_path(path)).map_err(|source| ConfigError::Load {
            path: path.to_path_buf(),
            source: source.into(),
        })
    }

    /// Load from `explicit` if given, else from the default location if a
    /// file exists there, else fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) => Self::from_file(&path),
                None => Ok(Self::default()),
            },
        }
    }
}
