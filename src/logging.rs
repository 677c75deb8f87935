//! Logging setup
//!
//! Installs a compact `tracing_subscriber` formatter for processes that use
//! this crate standalone. Servers that already install their own subscriber
//! should skip this; events from [`crate::check::TracingReporter`] go to
//! whatever subscriber is active.

use crate::config::LogConfig;
use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter described by `config`
pub fn env_filter(config: &LogConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.filter).map_err(|e| Error::ConfigParseFailed {
        format: "log filter".to_string(),
        reason: e.to_string(),
    })
}

/// Install the global subscriber.
///
/// Returns an error instead of panicking when a subscriber is already set.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = env_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init()
        .map_err(|e| Error::Other(format!("Failed to install log subscriber: {}", e)))?;

    debug!("Logging initialised with filter '{}'", config.filter);
    Ok(())
}
