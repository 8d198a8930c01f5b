//! core::config
//!
//! Global configuration schema and loading.
//!
//! # Overview
//!
//! Bootsmith has a single user-scope configuration file. It mainly
//! carries the template root so that generated projects can be seeded
//! without passing `--template-root` on every invocation.
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$BOOTSMITH_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/bootsmith/config.toml`
//! 3. `~/.bootsmith/config.toml` (canonical write location)
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. CLI flags
//!
//! # Example
//!
//! ```
//! use bootsmith::core::config::GlobalConfig;
//!
//! let config: GlobalConfig = toml::from_str(
//!     "template_root = \"/opt/bootsmith/templates\"\n"
//! ).unwrap();
//! assert!(config.template_root.is_some());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// template_root = "/opt/bootsmith/templates"
/// quiet = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Root directory holding boilerplate template files
    pub template_root: Option<PathBuf>,

    /// Default quiet mode
    pub quiet: Option<bool>,
}

impl GlobalConfig {
    /// Load the global configuration, searching the standard locations.
    ///
    /// Returns defaults when no config file exists.
    ///
    /// # Errors
    ///
    /// Returns an error only when a config file exists but cannot be
    /// read, parsed, or validated.
    pub fn load() -> Result<Self, ConfigError> {
        match global_config_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate configuration from a specific file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config: GlobalConfig =
            toml::from_str(&contents).map_err(|err| ConfigError::ParseError {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(root) = &self.template_root {
            if root.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "template_root cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Resolve the template root, applying precedence (flag > config).
    ///
    /// Returns `None` when neither the flag nor the config provides one;
    /// the CLI layer turns that into a user-facing error.
    pub fn resolve_template_root(&self, flag: Option<PathBuf>) -> Option<PathBuf> {
        flag.or_else(|| self.template_root.clone())
    }
}

/// Determine the global config path from the standard search order.
fn global_config_path() -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var("BOOTSMITH_CONFIG") {
        if !explicit.is_empty() {
            return Some(PathBuf::from(explicit));
        }
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg).join("bootsmith").join("config.toml"));
        }
    }

    dirs::home_dir().map(|home| home.join(".bootsmith").join("config.toml"))
}
