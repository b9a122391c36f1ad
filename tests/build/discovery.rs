//! Source document discovery.

use super::common::{write_sample_tree, write_tree};
use docsift::build::discover_documents;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_recursive_and_sorted() {
    let dir = TempDir::new().unwrap();
    write_sample_tree(dir.path());

    let documents = discover_documents(dir.path(), "md").unwrap();
    let relative: Vec<PathBuf> = documents.iter().map(|d| d.relative.clone()).collect();
    assert_eq!(
        relative,
        vec![
            PathBuf::from("faq.md"),
            PathBuf::from("guides/vehicles/tuning.md"),
            PathBuf::from("setup.md"),
        ]
    );
}

#[test]
fn test_other_extensions_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("a.md", "x"), ("b.markdown", "x"), ("c.MD.bak", "x"), ("d", "x")]);

    let documents = discover_documents(dir.path(), "md").unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].relative, PathBuf::from("a.md"));
}

#[test]
fn test_custom_source_extension() {
    let dir = TempDir::new().unwrap();
    write_tree(dir.path(), &[("a.md", "x"), ("b.markdown", "x")]);

    let documents = discover_documents(dir.path(), "markdown").unwrap();
    assert_eq!(documents.len(), 1);
    assert_eq!(documents[0].relative, PathBuf::from("b.markdown"));
}

#[test]
fn test_empty_root_finds_nothing() {
    let dir = TempDir::new().unwrap();
    assert!(discover_documents(dir.path(), "md").unwrap().is_empty());
}
