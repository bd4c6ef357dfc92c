//! Application configuration.
//!
//! This module provides:
//! - Configuration constants (defaults, file names)
//! - CLI option types and parsing
//! - The persistent JSON settings file (create-or-load semantics)

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogLevel, Options};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error_handling::ConfigError;
use crate::utils::to_json_pretty;

/// Persistent settings backing `config.json`.
///
/// Created with defaults on first run and persisted verbatim afterwards.
/// Fields are declared alphabetically so the serialized file carries sorted
/// keys; the file is written with 4-space indentation.
///
/// Invariant: `hash` is one of `hashes`. [`Settings::apply_overrides`]
/// enforces it for CLI overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// API key sent with every MASS request.
    pub api_key: String,
    /// MASS API base URL.
    pub base_url: String,
    /// Output directory for the materialized result tree.
    pub directory: String,
    /// Hash algorithm used for hash-file lookups.
    pub hash: String,
    /// Hash algorithms the server supports.
    pub hashes: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            directory: DEFAULT_DIRECTORY.to_string(),
            hash: DEFAULT_HASH.to_string(),
            hashes: DEFAULT_HASHES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Settings {
    /// Loads the settings file, creating it with defaults if it does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
            let settings = serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse configuration file {}", path.display())
            })?;
            Ok(settings)
        } else {
            println!(
                "configuration file not found.\ncreating config: {}",
                path.display()
            );
            let settings = Self::default();
            settings.save(path)?;
            Ok(settings)
        }
    }

    /// Writes the settings to `path` as sorted-key, 4-space-indented JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = to_json_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write configuration file {}", path.display()))
    }

    /// Applies CLI overrides for this run.
    ///
    /// Overrides are in-memory only; the settings file is never re-saved after
    /// mutation. An unknown `--hash-type` aborts before any network activity.
    pub fn apply_overrides(&mut self, options: &Options) -> Result<(), ConfigError> {
        if let Some(hash_type) = &options.hash_type {
            if !self.hashes.iter().any(|h| h == hash_type) {
                return Err(ConfigError::UnknownHash(hash_type.clone()));
            }
            self.hash = hash_type.clone();
        }
        if let Some(api_key) = &options.api_key {
            self.api_key = api_key.clone();
        }
        Ok(())
    }
}
