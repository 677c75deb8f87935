//! gce-check - OS helpers for the GCE test appliance server
//!
//! This library collects the small operating-system chores the test
//! orchestration server performs over and over: running external tools,
//! preparing scratch directories, reading and copying files, and deciding
//! whether an error is worth aborting for.
//!
//! ## Module Organization
//!
//! - [`execution`] - Run commands with streamed or captured output
//! - [`filesystem`] - Directory management, existence checks, line reads, copies
//! - [`check`] - Log and classify errors as fatal or recoverable
//! - [`config`] - Installation root and logging settings
//! - [`logging`] - `tracing` subscriber setup
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use gce_check::{check, execution, filesystem};
//! use std::path::Path;
//! use std::process::Command;
//!
//! let reporter = check::TracingReporter::with_component("runner");
//!
//! let scratch = Path::new("/tmp/gce-run");
//! check::panic_on_error(filesystem::create_dir(scratch), &reporter, "create scratch dir");
//!
//! let mut cmd = Command::new("uname");
//! cmd.arg("-r");
//! let kernel = execution::capture_output(cmd, scratch, &execution::empty_env(), &mut std::io::stderr());
//! if check::no_error(&kernel, &reporter, "query kernel version") {
//!     println!("running on {}", kernel.unwrap_or_default().trim());
//! }
//! ```
//!
//! ## Behaviour
//!
//! Every operation is synchronous and blocks the calling thread until the
//! underlying process or file operation finishes. Nothing is retried, no
//! timeouts are applied, and no state is kept between calls. Callers that
//! want concurrency run these helpers on their own threads.

#[macro_use]
extern crate tracing;

pub mod check;
pub mod config;
pub mod error;
pub mod execution;
pub mod filesystem;
pub mod logging;

// Re-exports for core functionality
pub use check::{no_error, panic_on_error, Reporter, TracingReporter};
pub use config::{loader::ConfigLoader, Config};
pub use error::{Error, Result};
pub use execution::{capture_combined_output, capture_output, empty_env, run, Env};
pub use filesystem::{copy_file, create_dir, dir_exists, file_exists, read_lines, remove_dir};

/// Installation root of the GCE test appliance server.
///
/// The compiled helper executables are located under `bin/` below it.
pub const ROOT_DIR: &str = "/usr/local/lib/gce-server";

/// The current version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The crate name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
