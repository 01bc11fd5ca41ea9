//! Tests for TOML configuration loading.

use std::io::Write;
use strictly_rewind::{RewindConfig, SortOrder};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = RewindConfig::default();
    assert_eq!(*config.initial_sort(), SortOrder::Descending);
    assert_eq!(config.log_filter(), "info");
    assert_eq!(config.log_file().to_str(), Some("strictly_rewind.log"));
}

#[test]
fn test_partial_file_fills_defaults() {
    let file = write_config("initial_sort = \"ascending\"\n");
    let config = RewindConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.initial_sort(), SortOrder::Ascending);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_full_file() {
    let file = write_config(
        "initial_sort = \"descending\"\nlog_file = \"/tmp/rewind.log\"\nlog_filter = \"debug\"\n",
    );
    let config = RewindConfig::load(Some(file.path())).expect("valid config");
    assert_eq!(*config.initial_sort(), SortOrder::Descending);
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file().to_str(), Some("/tmp/rewind.log"));
}

#[test]
fn test_invalid_sort_rejected() {
    let file = write_config("initial_sort = \"sideways\"\n");
    let err = RewindConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = RewindConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_override_initial_sort() {
    let config = RewindConfig::default().with_initial_sort(SortOrder::Ascending);
    assert_eq!(*config.initial_sort(), SortOrder::Ascending);
}
