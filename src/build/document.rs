// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Source document discovery and conversion to index entries.

use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::types::IndexEntry;

use super::FrontMatter;

/// A source file found under the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Path on disk.
    pub path: PathBuf,
    /// Path relative to the content root.
    pub relative: PathBuf,
}

/// Recursively find every file with `extension` under `root`.
///
/// Each directory is read in file-name order, so the result (and the index
/// built from it) is identical across runs and platforms.
pub fn discover_documents(root: &Path, extension: &str) -> Result<Vec<SourceDocument>, BuildError> {
    if !root.is_dir() {
        return Err(BuildError::MissingRoot(root.to_path_buf()));
    }

    let mut documents = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|source| BuildError::Walk {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
        documents.push(SourceDocument {
            path: path.to_path_buf(),
            relative,
        });
    }

    tracing::debug!(root = %root.display(), count = documents.len(), "discovered documents");
    Ok(documents)
}

/// URL of the rendered page for a source path relative to the content root.
///
/// ```
/// use docsift::build::page_url;
/// use std::path::Path;
///
/// let url = page_url(Path::new("guides/setup.md"), "/beamng", "html");
/// assert_eq!(url, "/beamng/guides/setup.html");
/// ```
pub fn page_url(relative: &Path, base_route: &str, page_extension: &str) -> String {
    let rendered = relative.with_extension(page_extension);
    let segments: Vec<String> = rendered
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let base = base_route.trim_end_matches('/');
    format!("{}/{}", base, segments.join("/"))
}

/// Title for a document without a front-matter title: its file stem.
pub fn fallback_title(relative: &Path) -> String {
    relative
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Turn the raw text of `document` into its index entry.
pub fn to_entry(document: &SourceDocument, raw: &str, config: &BuildConfig) -> IndexEntry {
    let front = FrontMatter::split(raw);
    let title = front
        .title()
        .map(str::to_string)
        .unwrap_or_else(|| fallback_title(&document.relative));

    IndexEntry {
        title: Some(title),
        content: front.body.to_string(),
        url: page_url(&document.relative, &config.base_route, &config.page_extension),
    }
}
