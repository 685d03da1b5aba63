//! Extension configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tabgroup_groups::DEFAULT_STORAGE_KEY;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Path to the state database
    pub database_path: PathBuf,
    /// Key of the slot holding saved groups
    pub storage_key: String,
    /// Restored tabs open behind the current editor
    pub restore_preserves_focus: bool,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("tabgroups.db"),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            restore_preserves_focus: true,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tab-groups")
    }

    /// Read a JSON config file. A missing file yields the defaults and
    /// missing fields take their default values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))?;

        if config.storage_key.trim().is_empty() {
            return Err(CoreError::Config("storageKey cannot be empty".to_string()));
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}
