//! Configuration for the CLI front end.
//!
//! The engine itself takes no configuration; everything here concerns how
//! the command-line driver renders and writes artifacts.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while loading or validating a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}

/// Settings for the CLI driver, loaded from a TOML file. Every field has
/// a default, so a partial file (or none at all) is fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignerConfig {
    /// Directory export artifacts are written into.
    pub output_dir: PathBuf,
    /// Pretty-print generated documents on stdout.
    pub pretty: bool,
    /// Export name used when the caller does not supply one.
    pub default_export_name: String,
}

impl Default for DesignerConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("schemas"),
            pretty: true,
            default_export_name: "schema".to_string(),
        }
    }
}

impl DesignerConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_export_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "default_export_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
