//! Error types and Result aliases for gce-check

use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type alias for gce-check operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for gce-check
#[derive(Debug)]
pub enum Error {
    // === Command errors ===
    /// The command could not be started at all
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully (non-zero or killed by a signal).
    ///
    /// `output` holds whatever was captured before the exit, empty when the
    /// output was streamed to caller sinks instead.
    ExitStatus {
        command: String,
        status: ExitStatus,
        output: String,
    },

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to parse configuration
    ConfigParseFailed {
        format: String,
        reason: String,
    },

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    // === I/O errors ===
    /// I/O errors, passed through from the operating system
    Io(std::io::Error),

    // === Generic fallback (use sparingly) ===
    Other(String),
}

impl Error {
    /// Output captured before a command failed, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            Error::ExitStatus { output, .. } => Some(output),
            _ => None,
        }
    }

    /// Exit code of a failed command, `None` when it was killed by a signal
    /// or the error is not an exit failure
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Error::ExitStatus { status, .. } => status.code(),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Command errors
            Error::Spawn { command, source } => {
                write!(f, "Failed to spawn command '{}': {}", command, source)
            }
            Error::ExitStatus {
                command, status, ..
            } => {
                write!(f, "Command '{}' failed: {}", command, status)
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }

            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Spawn { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigParseFailed {
            format: "JSON".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigParseFailed {
            format: "TOML".to_string(),
            reason: err.to_string(),
        }
    }
}
