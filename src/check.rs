//! Error classification
//!
//! Two ways of checking a result: [`panic_on_error`] treats a failure as
//! unrecoverable, logs it at fatal severity and unwinds; [`no_error`] logs
//! the failure and hands a boolean back so the caller decides how to carry
//! on. Where the log entries go is decided by a [`Reporter`].

use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Message used when the caller does not supply one
pub const DEFAULT_MESSAGE: &str = "Something bad happened";

/// Destination for classified errors
pub trait Reporter: Send + Sync {
    /// Record an unrecoverable error
    fn fatal(&self, message: &str, error: &dyn fmt::Display);

    /// Record an error the caller will recover from
    fn error(&self, message: &str, error: &dyn fmt::Display);
}

/// Reporter that emits `tracing` events
#[derive(Debug, Clone, Default)]
pub struct TracingReporter {
    component: Option<String>,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a `component` field to every event, e.g. the name of the
    /// test runner or server handler doing the check
    pub fn with_component(component: impl Into<String>) -> Self {
        Self {
            component: Some(component.into()),
        }
    }
}

impl Reporter for TracingReporter {
    fn fatal(&self, message: &str, error: &dyn fmt::Display) {
        error!(
            component = self.component.as_deref(),
            error = %error,
            fatal = true,
            "{}",
            message
        );
    }

    fn error(&self, message: &str, error: &dyn fmt::Display) {
        error!(
            component = self.component.as_deref(),
            error = %error,
            "{}",
            message
        );
    }
}

/// Severity of a recorded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Fatal,
    Error,
}

/// One entry captured by [`MemoryReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub severity: Severity,
    pub message: String,
    pub error: String,
}

/// Reporter that keeps entries in memory, for tests
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: Mutex<Vec<Entry>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    pub fn entries(&self) -> Vec<Entry> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn record(&self, severity: Severity, message: &str, error: &dyn fmt::Display) {
        self.lock().push(Entry {
            severity,
            message: message.to_string(),
            error: error.to_string(),
        });
    }

    // A panicking test must not hide the entries recorded before it.
    fn lock(&self) -> MutexGuard<'_, Vec<Entry>> {
        self.entries.lock().unwrap_or_else(|p| p.into_inner())
    }
}

impl Reporter for MemoryReporter {
    fn fatal(&self, message: &str, error: &dyn fmt::Display) {
        self.record(Severity::Fatal, message, error);
    }

    fn error(&self, message: &str, error: &dyn fmt::Display) {
        self.record(Severity::Error, message, error);
    }
}

/// Panic payload raised by [`panic_on_error`].
///
/// A top-level handler can recover it with
/// `payload.downcast_ref::<Fatal>()` after `std::panic::catch_unwind`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}: {error}")]
pub struct Fatal {
    pub message: String,
    pub error: String,
}

/// Unwrap `result`, or log the error as fatal and unwind.
///
/// The panic unwinds with a [`Fatal`] payload, so destructors and any
/// `catch_unwind` boundary further up still run. An empty `message` is
/// replaced by [`DEFAULT_MESSAGE`].
#[track_caller]
pub fn panic_on_error<T, E, R>(result: Result<T, E>, reporter: &R, message: &str) -> T
where
    E: fmt::Display,
    R: Reporter + ?Sized,
{
    match result {
        Ok(value) => value,
        Err(err) => {
            let message = or_default(message);
            reporter.fatal(message, &err);
            std::panic::panic_any(Fatal {
                message: message.to_string(),
                error: err.to_string(),
            })
        }
    }
}

/// Log the error in `result`, if any, and report whether there was none.
///
/// Returns `true` for `Ok` without logging anything. An empty `message` is
/// replaced by [`DEFAULT_MESSAGE`].
pub fn no_error<T, E, R>(result: &Result<T, E>, reporter: &R, message: &str) -> bool
where
    E: fmt::Display,
    R: Reporter + ?Sized,
{
    match result {
        Ok(_) => true,
        Err(err) => {
            reporter.error(or_default(message), err);
            false
        }
    }
}

fn or_default(message: &str) -> &str {
    if message.is_empty() {
        DEFAULT_MESSAGE
    } else {
        message
    }
}
