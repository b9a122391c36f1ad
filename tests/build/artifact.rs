//! The written artifact: format, determinism, atomic replacement.

use super::common::{config_for, list_files, write_sample_tree};
use docsift::build::{LOADER_FILE, LOADER_JS};
use docsift::render::{render_notice, UNAVAILABLE_NOTICE};
use docsift::{run_build, BuildConfig};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_pretty_json_array() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_sample_tree(content.path());

    let report = run_build(&config_for(content.path(), out.path())).unwrap();
    let text = fs::read_to_string(&report.output).unwrap();
    assert!(text.starts_with("[\n  {\n    \"title\": \"FAQ\",\n    \"content\": "), "{}", text);
    assert!(text.ends_with("]\n"));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(3));
}

#[test]
fn test_compact_json() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_sample_tree(content.path());

    let config = BuildConfig {
        pretty: false,
        ..config_for(content.path(), out.path())
    };
    let report = run_build(&config).unwrap();
    let text = fs::read_to_string(&report.output).unwrap();
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_builds_are_byte_identical() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_sample_tree(content.path());
    let config = config_for(content.path(), out.path());

    let first = run_build(&config).unwrap();
    let first_bytes = fs::read(&first.output).unwrap();
    let second = run_build(&config).unwrap();
    let second_bytes = fs::read(&second.output).unwrap();

    assert_eq!(first_bytes, second_bytes);
    assert_eq!(first.checksum, second.checksum);
}

#[test]
fn test_report_matches_file() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_sample_tree(content.path());

    let report = run_build(&config_for(content.path(), out.path())).unwrap();
    let bytes = fs::read(&report.output).unwrap();
    assert_eq!(report.entries, 3);
    assert_eq!(report.bytes, bytes.len());
    assert_eq!(report.checksum, crc32fast::hash(&bytes));
    assert_eq!(report.loader, None);
}

#[test]
fn test_existing_artifact_is_replaced_without_leftovers() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_sample_tree(content.path());
    let config = config_for(content.path(), out.path());

    fs::create_dir_all(config.output.parent().unwrap()).unwrap();
    fs::write(&config.output, "stale").unwrap();

    run_build(&config).unwrap();
    assert_ne!(fs::read_to_string(&config.output).unwrap(), "stale");
    assert_eq!(list_files(out.path()), vec![PathBuf::from("assets/search.json")]);
}

#[test]
fn test_loader_emitted_on_request() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_sample_tree(content.path());

    let config = BuildConfig {
        emit_loader: true,
        ..config_for(content.path(), out.path())
    };
    let report = run_build(&config).unwrap();

    let loader = out.path().join("assets").join(LOADER_FILE);
    assert_eq!(report.loader.as_deref(), Some(loader.as_path()));
    assert_eq!(fs::read_to_string(&loader).unwrap(), LOADER_JS);
    assert!(LOADER_JS.contains("results-container"));
}

#[test]
fn test_loader_shows_notice_when_wasm_fails_to_load() {
    // The wasm init is guarded, and its fallback markup is the engine's own
    // unavailable notice.
    let init = LOADER_JS.find("await init()").unwrap();
    let guard = LOADER_JS[..init].rfind("try {").unwrap();
    assert!(LOADER_JS[guard..init].trim_start_matches("try {").trim().is_empty());

    let notice = render_notice(UNAVAILABLE_NOTICE);
    let catch = LOADER_JS[init..].find("catch").unwrap() + init;
    let fallback = &LOADER_JS[catch..];
    let returns = fallback.find("return null").unwrap();
    assert!(fallback[..returns].contains(&notice), "missing {}", notice);
}

#[test]
fn test_empty_content_tree_writes_empty_array() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let report = run_build(&config_for(content.path(), out.path())).unwrap();
    assert_eq!(report.entries, 0);
    assert_eq!(fs::read_to_string(&report.output).unwrap(), "[]\n");
}
