//! Build failures are fatal and leave nothing behind.

use super::common::{config_for, list_files, write_tree};
use docsift::{run_build, BuildError};
use tempfile::TempDir;

#[test]
fn test_missing_root_fails() {
    let out = TempDir::new().unwrap();
    let missing = out.path().join("no-such-dir");

    let err = run_build(&config_for(&missing, out.path())).unwrap_err();
    assert!(matches!(err, BuildError::MissingRoot(_)));
    assert!(list_files(out.path()).is_empty());
}

#[test]
fn test_root_that_is_a_file_fails() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("page.md", "x")]);
    let out = TempDir::new().unwrap();

    let err = run_build(&config_for(&dir.path().join("page.md"), out.path())).unwrap_err();
    assert!(matches!(err, BuildError::MissingRoot(_)));
}

#[test]
fn test_invalid_utf8_fails_without_writing() {
    let content = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_tree(content.path(), &[("good.md", "fine")]);
    std::fs::write(content.path().join("bad.md"), [0xff, 0xfe, 0x00]).unwrap();

    let err = run_build(&config_for(content.path(), out.path())).unwrap_err();
    match err {
        BuildError::Read { path, .. } => assert!(path.ends_with("bad.md")),
        other => panic!("expected read error, got {:?}", other),
    }
    assert!(list_files(out.path()).is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_are_followed() {
    let content = TempDir::new().unwrap();
    let shared = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_tree(shared.path(), &[("common.md", "shared page")]);
    std::os::unix::fs::symlink(shared.path(), content.path().join("shared")).unwrap();

    let report = run_build(&config_for(content.path(), out.path())).unwrap();
    assert_eq!(report.entries, 1);
    let index = docsift::SearchIndex::load(&report.output).unwrap();
    assert_eq!(index.entries()[0].url, "/beamng/shared/common.html");
}
