//! Configuration for gce-check
//!
//! Holds the installation root of the test appliance server and the
//! logging settings. Values come from defaults, an optional TOML or JSON
//! file, and a couple of environment overrides (see [`loader`]).

pub mod loader;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Installation root of the server; compiled helpers live in `bin/`
    pub root_dir: PathBuf,

    /// Logging configuration
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(crate::ROOT_DIR),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Directory holding the compiled helper executables
    pub fn bin_dir(&self) -> PathBuf {
        self.root_dir.join("bin")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.root_dir.as_os_str().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "root_dir".to_string(),
                reason: "Root directory cannot be empty".to_string(),
            });
        }

        if !self.root_dir.is_absolute() {
            return Err(Error::ConfigValidationFailed {
                field: "root_dir".to_string(),
                reason: format!("'{}' is not an absolute path", self.root_dir.display()),
            });
        }

        if self.log.filter.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "log.filter".to_string(),
                reason: "Log filter cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives, e.g. `info,gce_check=debug`
    pub filter: String,

    /// Colourise output
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            ansi: false,
        }
    }
}
