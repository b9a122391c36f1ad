// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search index.
//!
//! An index is deliberately boring: an ordered list of `{title, content, url}`
//! records, serialized as a bare JSON array. The builder writes it once per site
//! build, the browser fetches it once per session, and nobody mutates it after.
//!
//! # Invariants
//!
//! - **IndexEntry**: `url` is unique across the index. `content` is UTF-8 text
//!   that may contain HTML markup.
//!
//! - **SearchIndex**: order is significant. Results are reported in index
//!   order, so the builder's discovery order is what users see.
//!
//! A missing `title` is not an error anywhere. Display falls back to the URL.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// One document's searchable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Display title. Absent for documents without a usable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Document body text, possibly containing HTML markup.
    #[serde(default)]
    pub content: String,
    /// Canonical path to the rendered page.
    pub url: String,
}

impl IndexEntry {
    pub fn new(title: impl Into<String>, content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: content.into(),
            url: url.into(),
        }
    }

    /// Link text for this entry: the title, or the URL when there is none.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.trim().is_empty() => title,
            _ => &self.url,
        }
    }

    /// The text that queries are matched against and snippets are cut from.
    ///
    /// The title sits on its own line so that a title match produces a snippet
    /// starting at the top of the page rather than mid-sentence.
    pub fn searchable_text(&self) -> String {
        let title = self.title.as_deref().unwrap_or("");
        let mut text = String::with_capacity(title.len() + 1 + self.content.len());
        text.push_str(title);
        text.push('\n');
        text.push_str(&self.content);
        text
    }
}

/// Ordered, read-only sequence of index entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    pub fn new(entries: Vec<IndexEntry>) -> Self {
        Self { entries }
    }

    /// Parse an index from the JSON artifact body.
    pub fn from_json(body: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Read and parse an index artifact from disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let body = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&body)
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    /// First URL that appears more than once, if any.
    pub fn duplicate_url(&self) -> Option<&str> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        self.entries
            .iter()
            .map(|entry| entry.url.as_str())
            .find(|url| !seen.insert(*url))
    }

    pub fn into_entries(self) -> Vec<IndexEntry> {
        self.entries
    }
}

impl From<Vec<IndexEntry>> for SearchIndex {
    fn from(entries: Vec<IndexEntry>) -> Self {
        Self::new(entries)
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
