//! Filesystem helpers
//!
//! Directory management, existence checks, line-oriented reads and file
//! copies. Errors from the operating system are passed through unchanged,
//! except in the existence checks which map every failure to `false`.

use crate::error::Result;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};

/// Permissions for directories created by [`create_dir`] (`rwxr-xr-x`)
pub const DIR_MODE: u32 = 0o755;

/// Permissions for files created by [`copy_file`] (`rw-r--r--`)
pub const FILE_MODE: u32 = 0o644;

/// Create a directory and any missing parents.
///
/// Succeeds silently if the directory already exists.
pub fn create_dir(path: impl AsRef<Path>) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(DIR_MODE);
    builder.create(path.as_ref())?;
    Ok(())
}

/// Remove a directory and everything below it.
///
/// A missing path is not an error. A path that names something other than
/// a directory is removed on its own.
pub fn remove_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match removed {
        Ok(()) => Ok(()),
        // Raced with another remover.
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Returns true if `path` exists and is not a directory
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path)
        .map(|metadata| !metadata.is_dir())
        .unwrap_or(false)
}

/// Returns true if `path` exists and is a directory
pub fn dir_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path)
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

/// Read a whole file and split it into lines.
///
/// Lines are split on `'\n'` only and empty lines are dropped, including the
/// one left behind by a trailing newline. Anything else, such as `'\r'` or
/// whitespace-only lines, is kept as written. Invalid UTF-8 is replaced
/// rather than rejected.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let content = fs::read(path.as_ref())?;
    Ok(split_lines(&String::from_utf8_lossy(&content)))
}

pub(crate) fn split_lines(content: &str) -> Vec<String> {
    content
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Copy the content of `src` into `dst`, replacing whatever `dst` held.
///
/// `dst` is created if needed. Both files are closed before this returns,
/// whether or not the copy succeeded.
pub fn copy_file(dst: impl AsRef<Path>, src: impl AsRef<Path>) -> Result<()> {
    let mut from = File::open(src.as_ref())?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);
    let mut to = options.open(dst.as_ref())?;

    io::copy(&mut from, &mut to)?;
    Ok(())
}
