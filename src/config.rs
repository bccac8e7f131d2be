//! Configuration management for zcalc.
//!
//! Loads an optional TOML file; every field has a default.

use crate::calculator::{DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Decimal places kept after each computation.
    pub precision: u32,
    /// Copy finite results to the clipboard on equals.
    pub copy_on_equals: bool,
    /// Draw the clickable keypad in interactive mode.
    pub show_keypad: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            copy_on_equals: false,
            show_keypad: true,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config.clamped())
    }

    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from default locations.
    ///
    /// Searches in order:
    /// 1. `./zcalc.toml`
    /// 2. `~/.config/zcalc/config.toml`
    ///
    /// Returns default config if no file is found. A file that exists but
    /// fails to parse is reported and skipped.
    pub fn load_default() -> Self {
        for path in Self::search_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load(&path) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "loaded config");
                    return config;
                }
                Err(e) => tracing::warn!("{}", e),
            }
        }

        tracing::debug!("no config file found, using defaults");
        Self::default()
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("zcalc.toml")];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("zcalc").join("config.toml"));
        }
        paths
    }

    fn clamped(mut self) -> Self {
        if self.precision > MAX_PRECISION {
            tracing::warn!(
                precision = self.precision,
                max = MAX_PRECISION,
                "precision too large, clamping"
            );
            self.precision = MAX_PRECISION;
        }
        self
    }

    /// Apply command-line overrides on top of the loaded file.
    pub fn with_overrides(mut self, precision: Option<u32>, copy_on_equals: bool) -> Self {
        if let Some(precision) = precision {
            self.precision = precision;
        }
        self.copy_on_equals |= copy_on_equals;
        self.clamped()
    }
}
