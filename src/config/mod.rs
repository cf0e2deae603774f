//! User configuration for pomdep.
//!
//! Defaults for the add goal can be kept in a TOML file so they do not have to
//! be repeated on every invocation. Values given on the command line always
//! win over the file.
//!
//! # Location
//!
//! - **Unix/macOS**: `~/.pomdep/config.toml`
//! - **Windows**: `%LOCALAPPDATA%\pomdep\config.toml`
//!
//! `--config <path>` (or `POMDEP_CONFIG`) selects another file. A missing
//! default file is fine; a missing explicitly selected file is an error.
//!
//! # File Format
//!
//! ```toml
//! # never touch the pom, e.g. on CI
//! skip = false
//! # copy classifiers from the coordinate onto the dependency
//! apply-classifier = false
//! # packaging used when --packaging is not given
//! packaging = "jar"
//! ```

use crate::core::{PomdepError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings read from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PomdepConfig {
    /// Skip execution unless overridden on the command line
    #[serde(default)]
    pub skip: bool,

    /// Copy the coordinate classifier onto new dependencies
    #[serde(default)]
    pub apply_classifier: bool,

    /// Packaging for discrete-field coordinates without `--packaging`
    #[serde(default)]
    pub packaging: Option<String>,
}

impl PomdepConfig {
    /// Platform-specific default location of the configuration file.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()?.join("pomdep")
        } else {
            dirs::home_dir()?.join(".pomdep")
        };

        Some(config_dir.join("config.toml"))
    }

    /// Load the configuration from `explicit`, or from the default location.
    ///
    /// # Errors
    ///
    /// [`PomdepError::ConfigError`] if an explicit file is missing or any file
    /// cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(PomdepError::ConfigError {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// [`PomdepError::ConfigError`] if the file cannot be read or is not valid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| PomdepError::ConfigError {
            message: format!("failed to read {}: {e}", path.display()),
        })?;

        let config = toml::from_str(&content).map_err(|e| PomdepError::ConfigError {
            message: format!("failed to parse {}: {e}", path.display()),
        })?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }
}
