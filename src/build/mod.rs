// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index builder: content tree in, `search.json` out.
//!
//! The pipeline is short:
//!
//! 1. Walk the content root for source documents (sorted, recursive)
//! 2. Read them in parallel, strip front matter, compute URLs
//! 3. Reject duplicate URLs
//! 4. Serialize and write the artifact atomically
//!
//! Any failure aborts before step 4 touches the destination, so a failed
//! build leaves the previous artifact (or nothing) in place.

mod document;
mod frontmatter;
mod parallel;

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::types::{IndexEntry, SearchIndex};

pub use document::*;
pub use frontmatter::FrontMatter;
pub use parallel::*;

/// Browser loader emitted next to the artifact on request.
pub const LOADER_JS: &str = include_str!("loader.js");

/// File name of the emitted loader.
pub const LOADER_FILE: &str = "docsift-loader.js";

/// What a successful build produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    pub entries: usize,
    pub bytes: usize,
    /// CRC32 of the artifact bytes.
    pub checksum: u32,
    /// Path of the emitted loader, if any.
    pub loader: Option<PathBuf>,
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Build the search index described by `config`.
pub fn run_build(config: &BuildConfig) -> Result<BuildReport, BuildError> {
    let root = config.content_dir.as_path();
    let documents = discover_documents(root, &config.source_extension)?;

    if documents.is_empty() {
        tracing::warn!(root = %root.display(), "no source documents found");
        eprintln!("⚠️  No .{} documents under {}", config.source_extension, root.display());
    }

    // INVARIANT: entries[i] was built from documents[i]
    let entries = load_all(&documents, config)?;
    check_unique_urls(&documents, &entries)?;

    let index = SearchIndex::new(entries);
    let bytes = serialize_index(&index, config.pretty)?;
    write_atomic(&config.output, &bytes)?;

    let loader = if config.emit_loader {
        Some(emit_js_loader(&config.output)?)
    } else {
        None
    };

    let report = BuildReport {
        output: config.output.clone(),
        entries: index.len(),
        bytes: bytes.len(),
        checksum: crc32fast::hash(&bytes),
        loader,
    };

    tracing::info!(
        output = %report.output.display(),
        entries = report.entries,
        bytes = report.bytes,
        checksum = format_args!("{:08x}", report.checksum),
        "search index written"
    );
    print_summary(&report);

    Ok(report)
}

#[cfg(feature = "parallel")]
fn load_all(documents: &[SourceDocument], config: &BuildConfig) -> Result<Vec<IndexEntry>, BuildError> {
    let progress = ProgressBar::new(documents.len() as u64);
    if !atty::is(atty::Stream::Stderr) {
        progress.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }
    progress.set_style(create_progress_style());
    progress.set_prefix("Loading");
    progress.set_message("documents...");

    let entries = load_entries_with_progress(documents, config, &progress);
    progress.finish_and_clear();
    entries
}

#[cfg(not(feature = "parallel"))]
fn load_all(documents: &[SourceDocument], config: &BuildConfig) -> Result<Vec<IndexEntry>, BuildError> {
    load_entries(documents, config)
}

/// Fail on the first URL produced by two different documents.
fn check_unique_urls(documents: &[SourceDocument], entries: &[IndexEntry]) -> Result<(), BuildError> {
    let mut seen: HashMap<&str, &Path> = HashMap::with_capacity(entries.len());
    for (document, entry) in documents.iter().zip(entries) {
        if seen.insert(&entry.url, &document.path).is_some() {
            return Err(BuildError::DuplicateUrl {
                url: entry.url.clone(),
                path: document.path.clone(),
            });
        }
    }
    Ok(())
}

/// Serialize the index. Pretty output uses a two-space indent.
pub fn serialize_index(index: &SearchIndex, pretty: bool) -> Result<Vec<u8>, BuildError> {
    let mut bytes = if pretty {
        serde_json::to_vec_pretty(index)?
    } else {
        serde_json::to_vec(index)?
    };
    bytes.push(b'\n');
    Ok(bytes)
}

/// Write `bytes` to `path` via a temp file in the same directory.
///
/// Readers of `path` see either the old file or the complete new one.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), BuildError> {
    let write_err = |source: std::io::Error| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut temp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(bytes).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Write the browser loader next to the artifact.
fn emit_js_loader(output: &Path) -> Result<PathBuf, BuildError> {
    let dir = output.parent().unwrap_or_else(|| Path::new("."));
    let loader_path = dir.join(LOADER_FILE);
    write_atomic(&loader_path, LOADER_JS.as_bytes())?;
    Ok(loader_path)
}

fn print_summary(report: &BuildReport) {
    eprintln!("  ✓ {}", report.output.display());
    if let Some(loader) = &report.loader {
        eprintln!("  ✓ {}", loader.display());
    }
    eprintln!();
    eprintln!("✅ Build complete");
    eprintln!(
        "   {} entries │ {} │ crc32 {:08x}",
        report.entries,
        format_bytes(report.bytes),
        report.checksum
    );
}

pub fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
