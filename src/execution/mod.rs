//! Blocking command execution
//!
//! Thin wrappers around [`std::process::Command`] that apply a working
//! directory and environment overrides, then either stream the child's
//! output into caller sinks or capture it as text. A spawn failure or an
//! unsuccessful exit status is always returned as an error; nothing is
//! retried and no deadline is applied.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;

/// Environment overrides applied on top of the inherited environment
pub type Env = HashMap<String, String>;

/// Placeholder for commands that need no environment overrides
pub fn empty_env() -> Env {
    Env::new()
}

/// Run a command, streaming stdout and stderr live into the given sinks.
///
/// Blocks until the child exits. The sinks receive bytes exactly as the
/// child writes them; each stream is copied on its own thread so a chatty
/// stderr cannot stall stdout.
pub fn run<O, E>(
    mut cmd: Command,
    work_dir: &Path,
    env: &Env,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<()>
where
    O: Write + Send + ?Sized,
    E: Write + Send + ?Sized,
{
    let description = prepare(&mut cmd, work_dir, env);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = spawn(&mut cmd, &description)?;
    let child_out = child.stdout.take();
    let child_err = child.stderr.take();

    thread::scope(|s| {
        let err_pump = s.spawn(move || pump(child_err, stderr));
        let out_result = pump(child_out, stdout);
        let err_result = join_pump(err_pump);
        out_result.and(err_result)
    })
    .inspect_err(|e| {
        // Reap the child even though its output could not be delivered.
        let _ = child.wait();
        debug!("Streaming output of '{}' failed: {}", description, e);
    })?;

    let status = child.wait()?;
    check_status(description, status, String::new())
}

/// Run a command and return its stdout as text.
///
/// Stderr is streamed into `stderr`. If the command exits unsuccessfully
/// the returned [`Error::ExitStatus`] carries the stdout captured so far.
pub fn capture_output<E>(
    mut cmd: Command,
    work_dir: &Path,
    env: &Env,
    stderr: &mut E,
) -> Result<String>
where
    E: Write + Send + ?Sized,
{
    let description = prepare(&mut cmd, work_dir, env);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = spawn(&mut cmd, &description)?;
    let child_out = child.stdout.take();
    let child_err = child.stderr.take();

    let captured = thread::scope(|s| {
        let err_pump = s.spawn(move || pump(child_err, stderr));
        let mut buf = Vec::new();
        let out_result = match child_out {
            Some(mut out) => out.read_to_end(&mut buf).map(|_| ()),
            None => Ok(()),
        };
        let err_result = join_pump(err_pump);
        out_result.and(err_result).map(|_| buf)
    });

    let captured = match captured {
        Ok(buf) => buf,
        Err(e) => {
            let _ = child.wait();
            return Err(e.into());
        }
    };

    let status = child.wait()?;
    let output = String::from_utf8_lossy(&captured).into_owned();
    check_status(description, status, output.clone())?;
    Ok(output)
}

/// Run a command and return stdout and stderr interleaved as one string.
///
/// Both streams are attached to the same pipe, so the text appears in the
/// order the child wrote it.
pub fn capture_combined_output(mut cmd: Command, work_dir: &Path, env: &Env) -> Result<String> {
    let description = prepare(&mut cmd, work_dir, env);

    let (mut reader, writer) = io::pipe()?;
    let writer_err = writer.try_clone()?;
    cmd.stdin(Stdio::null())
        .stdout(Stdio::from(writer))
        .stderr(Stdio::from(writer_err));

    let spawned = spawn(&mut cmd, &description);
    // The command still owns the parent's copies of the write end; they must
    // be closed or reading below never sees end-of-file.
    drop(cmd);
    let mut child = spawned?;

    let mut buf = Vec::new();
    if let Err(e) = reader.read_to_end(&mut buf) {
        let _ = child.wait();
        return Err(e.into());
    }

    let status = child.wait()?;
    let output = String::from_utf8_lossy(&buf).into_owned();
    check_status(description, status, output.clone())?;
    Ok(output)
}

/// Apply working directory and environment overrides, returning a printable
/// form of the command for logs and errors.
///
/// An empty `work_dir` keeps the current directory. Overrides are layered on
/// the inherited environment, so an override replaces an inherited value of
/// the same name and an empty map changes nothing.
fn prepare(cmd: &mut Command, work_dir: &Path, env: &Env) -> String {
    if !work_dir.as_os_str().is_empty() {
        cmd.current_dir(work_dir);
    }
    cmd.envs(env);

    let description = describe(cmd);
    debug!(
        command = %description,
        work_dir = %work_dir.display(),
        env_overrides = env.len(),
        "Running command"
    );
    description
}

fn describe(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|arg| arg.to_string_lossy().into_owned()));
    parts.join(" ")
}

fn spawn(cmd: &mut Command, description: &str) -> Result<Child> {
    cmd.spawn().map_err(|source| {
        debug!("Failed to spawn '{}': {}", description, source);
        Error::Spawn {
            command: description.to_string(),
            source,
        }
    })
}

fn pump<R, W>(source: Option<R>, sink: &mut W) -> io::Result<()>
where
    R: Read,
    W: Write + ?Sized,
{
    if let Some(mut source) = source {
        io::copy(&mut source, sink)?;
    }
    sink.flush()
}

fn join_pump(handle: thread::ScopedJoinHandle<'_, io::Result<()>>) -> io::Result<()> {
    handle
        .join()
        .unwrap_or_else(|_| Err(io::Error::other("output copier thread panicked")))
}

fn check_status(command: String, status: ExitStatus, output: String) -> Result<()> {
    if status.success() {
        return Ok(());
    }
    debug!("Command '{}' failed: {}", command, status);
    Err(Error::ExitStatus {
        command,
        status,
        output,
    })
}
