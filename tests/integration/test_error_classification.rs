//! Integration Tests for Error Classification

use gce_check::check::{
    no_error, panic_on_error, Fatal, MemoryReporter, Severity, DEFAULT_MESSAGE,
};
use gce_check::filesystem::read_lines;
use std::panic::{self, AssertUnwindSafe};

#[test]
fn test_no_error_on_ok_logs_nothing() {
    let reporter = MemoryReporter::new();
    let ok: Result<(), std::io::Error> = Ok(());

    assert!(no_error(&ok, &reporter, "msg"));
    assert!(reporter.is_empty());
}

#[test]
fn test_no_error_on_err_logs_one_entry() {
    let reporter = MemoryReporter::new();
    let result = read_lines("/nonexistent/gce-check/file");
    let error_text = result.as_ref().unwrap_err().to_string();

    assert!(!no_error(&result, &reporter, "msg"));

    let entries = reporter.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Error);
    assert_eq!(entries[0].message, "msg");
    assert_eq!(entries[0].error, error_text);
}

#[test]
fn test_panic_on_error_logs_fatal_and_unwinds() {
    let reporter = MemoryReporter::new();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        panic_on_error(Err::<(), _>("kernel build failed"), &reporter, "")
    }));

    let payload = outcome.unwrap_err();
    let fatal = payload.downcast_ref::<Fatal>().expect("payload should be Fatal");
    assert_eq!(fatal.message, DEFAULT_MESSAGE);
    assert_eq!(fatal.error, "kernel build failed");

    let entries = reporter.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, Severity::Fatal);
    assert_eq!(entries[0].message, DEFAULT_MESSAGE);
}

#[test]
fn test_panic_on_error_runs_destructors() {
    struct Cleanup<'a>(&'a std::cell::Cell<bool>);
    impl Drop for Cleanup<'_> {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    let cleaned = std::cell::Cell::new(false);
    let reporter = MemoryReporter::new();

    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        let _guard = Cleanup(&cleaned);
        panic_on_error(Err::<(), _>("boom"), &reporter, "abort");
    }));

    assert!(cleaned.get());
}
