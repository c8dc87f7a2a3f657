//! # Backend Configuration
//!
//! Settings read once at start-up from a YAML file. Every field is optional;
//! anything missing takes its default.
//!
//! ```yaml
//! storage:
//!   backend: json_file          # or "memory"
//!   data_directory: /var/lib/petconnect
//!   quota_bytes: 5242880        # null disables the limit
//! seed_sample_data: true
//! log_level: info
//! ```

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Storage budget of a typical browser origin
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

const APP_DIRECTORY_NAME: &str = "PetConnect";
const FALLBACK_DATA_DIRECTORY: &str = "petconnect-data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackendKind {
    /// Nothing survives the process
    Memory,
    /// One JSON file per collection under `data_directory`
    #[default]
    JsonFile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackendKind,
    pub data_directory: Option<PathBuf>,
    pub quota_bytes: Option<usize>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackendKind::default(),
            data_directory: None,
            quota_bytes: Some(DEFAULT_QUOTA_BYTES),
        }
    }
}

impl StorageConfig {
    /// The configured data directory, or the platform data directory when
    /// none is set.
    pub fn resolved_data_directory(&self) -> PathBuf {
        if let Some(directory) = &self.data_directory {
            return directory.clone();
        }

        match dirs::data_dir() {
            Some(data_dir) => data_dir.join(APP_DIRECTORY_NAME),
            None => {
                warn!("No platform data directory, using ./{}", FALLBACK_DATA_DIRECTORY);
                PathBuf::from(FALLBACK_DATA_DIRECTORY)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub storage: StorageConfig,
    /// Add the sample listings when the pet collection is empty
    pub seed_sample_data: bool,
    /// Filter directive for the log subscriber, e.g. `debug` or
    /// `petconnect_backend=trace`
    pub log_level: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            seed_sample_data: true,
            log_level: "info".to_string(),
        }
    }
}

impl BackendConfig {
    /// In-memory store with default settings
    pub fn in_memory() -> Self {
        Self {
            storage: StorageConfig {
                backend: StorageBackendKind::Memory,
                ..StorageConfig::default()
            },
            ..Self::default()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).context("Failed to parse backend configuration")
    }

    /// Load the configuration file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config = Self::from_yaml_str(&yaml_content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        debug!("Loaded backend config from {:?}", path);
        Ok(config)
    }
}
