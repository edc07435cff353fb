//! Configuration System
//!
//! Defaults overlaid with an optional `arbor.toml` in the working
//! directory. CLI flags are applied on top by the binary, so the effective
//! precedence is CLI over file over defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::logging::LoggingConfig;
use crate::store::persistence::STORAGE_FILE_NAME;

/// Config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "arbor.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArborConfig {
    /// Storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Tree storage file (default: `storage.json` in the working directory)
    #[serde(default = "default_storage_file")]
    pub file: PathBuf,
}

fn default_storage_file() -> PathBuf {
    PathBuf::from(STORAGE_FILE_NAME)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: default_storage_file(),
        }
    }
}

/// Configuration loader facade
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `arbor.toml` from `dir` when present; defaults otherwise.
    pub fn load(dir: &Path) -> Result<ArborConfig, StorageError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(ArborConfig::default())
        }
    }

    /// Load an explicit config file. Unlike [`ConfigLoader::load`], a
    /// missing or unparsable file here is an error.
    pub fn load_from_file(path: &Path) -> Result<ArborConfig, StorageError> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| {
            StorageError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })
    }
}
