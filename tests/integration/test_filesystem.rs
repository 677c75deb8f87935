//! Integration Tests for Filesystem Helpers

use gce_check::filesystem::{copy_file, create_dir, dir_exists, file_exists, read_lines, remove_dir};
use gce_check::Error;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_create_dir_is_recursive_and_idempotent() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("a").join("b").join("c");

    assert!(!dir_exists(&nested));
    create_dir(&nested).unwrap();
    assert!(dir_exists(&nested));

    create_dir(&nested).expect("second create should be a no-op");
    assert!(dir_exists(&nested));
}

#[test]
fn test_create_dir_over_file_fails() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("taken");
    fs::write(&file, "x").unwrap();

    let err = create_dir(&file).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_remove_missing_dir_succeeds() {
    let tmp = TempDir::new().unwrap();
    remove_dir(tmp.path().join("never-created")).unwrap();
}

#[test]
fn test_remove_populated_dir() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join("results");
    create_dir(root.join("xfs").join("generic")).unwrap();
    fs::write(root.join("xfs").join("generic").join("001.out"), "ok").unwrap();
    fs::write(root.join("summary"), "passed").unwrap();

    remove_dir(&root).unwrap();
    assert!(!dir_exists(&root));
    assert!(!root.exists());
}

#[test]
fn test_existence_checks_respect_kind() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("file");
    fs::write(&file, "x").unwrap();

    assert!(file_exists(&file));
    assert!(!dir_exists(&file));
    assert!(dir_exists(tmp.path()));
    assert!(!file_exists(tmp.path()));
    assert!(!file_exists(tmp.path().join("missing")));
    assert!(!dir_exists(tmp.path().join("missing")));
}

#[test]
fn test_read_lines_drops_blank_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("tests");
    fs::write(&path, "a\n\nb\n").unwrap();

    assert_eq!(read_lines(&path).unwrap(), vec!["a", "b"]);
}

#[test]
fn test_read_lines_empty_file() {
    let tmp = TempDir::new().unwrap();
    let empty = tmp.path().join("empty");
    fs::write(&empty, "").unwrap();
    let blank = tmp.path().join("blank");
    fs::write(&blank, "\n\n").unwrap();

    assert!(read_lines(&empty).unwrap().is_empty());
    assert!(read_lines(&blank).unwrap().is_empty());
}

#[test]
fn test_read_lines_missing_file_is_error() {
    let tmp = TempDir::new().unwrap();
    let err = read_lines(tmp.path().join("missing")).unwrap_err();

    match err {
        Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("Expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_copy_file_overwrites_destination() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src");
    let dst = tmp.path().join("dst");
    fs::write(&src, b"short").unwrap();
    fs::write(&dst, b"a much longer previous content").unwrap();

    copy_file(&dst, &src).unwrap();
    assert_eq!(fs::read(&dst).unwrap(), b"short");
}

#[test]
fn test_copy_file_preserves_binary_content() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("blob");
    let dst = tmp.path().join("copy");
    let bytes: Vec<u8> = (0..=255u8).cycle().take(70_000).collect();
    fs::write(&src, &bytes).unwrap();

    copy_file(&dst, &src).unwrap();
    assert_eq!(fs::read(&dst).unwrap(), bytes);
}

#[test]
fn test_copy_file_missing_source() {
    let tmp = TempDir::new().unwrap();
    let dst = tmp.path().join("dst");

    assert!(copy_file(&dst, tmp.path().join("missing")).is_err());
    assert!(!dst.exists(), "destination must not be created when source is missing");
}

#[test]
fn test_copy_file_into_missing_dir() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src");
    fs::write(&src, "x").unwrap();

    let err = copy_file(tmp.path().join("no-such-dir").join("dst"), &src).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
