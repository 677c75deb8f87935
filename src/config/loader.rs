//! Configuration File Loading
//!
//! Reads a [`Config`] from a TOML or JSON file, layers environment
//! overrides on top and validates the result.

use super::Config;
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::path::Path;

/// Overrides `Config::root_dir`
pub const ROOT_DIR_ENV: &str = "GCE_SERVER_ROOT";

/// Overrides `LogConfig::filter`
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension; anything but `.json` is TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Configuration file loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Build the effective configuration.
    ///
    /// Starts from defaults, replaces them with `path` when given, applies
    /// environment overrides, then validates.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Config::default(),
        };

        let config = Self::apply_env(config);
        config.validate()?;
        Ok(config)
    }

    /// Load a specific configuration file
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => toml::from_str(&content)?,
            ConfigFormat::Json => serde_json::from_str(&content)?,
        };

        debug!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(config: Config) -> Config {
        Self::apply_overrides(config, |name| env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    ///
    /// Unset or empty variables leave the configuration untouched.
    pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(root) = var(ROOT_DIR_ENV) {
            debug!("{} overrides root_dir with {}", ROOT_DIR_ENV, root);
            config.root_dir = root.into();
        }

        if let Some(filter) = var(LOG_FILTER_ENV) {
            config.log.filter = filter;
        }

        config
    }
}
