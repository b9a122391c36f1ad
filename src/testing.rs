// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::engine::ResultsView;
use crate::types::{IndexEntry, SearchIndex};

/// Create an entry whose url is derived from its position.
pub fn make_entry(id: usize, title: &str, content: &str) -> IndexEntry {
    IndexEntry::new(title, content, format!("/doc/{}.html", id))
}

/// Create an entry with no title.
pub fn make_untitled_entry(id: usize, content: &str) -> IndexEntry {
    IndexEntry {
        title: None,
        content: content.to_string(),
        url: format!("/doc/{}.html", id),
    }
}

/// Index of `(title, content)` pairs with `/doc/{i}.html` urls.
pub fn make_index(pages: &[(&str, &str)]) -> SearchIndex {
    SearchIndex::new(
        pages
            .iter()
            .enumerate()
            .map(|(id, (title, content))| make_entry(id, title, content))
            .collect(),
    )
}

/// The two-page site used by the end-to-end examples.
pub fn sample_site() -> SearchIndex {
    SearchIndex::new(vec![
        IndexEntry::new(
            "Setup Guide",
            "Install the mod by copying files into the mods folder.",
            "/beamng/setup.html",
        ),
        IndexEntry::new("FAQ", "No relevant text here.", "/beamng/faq.html"),
    ])
}

/// A results view that records every render.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub renders: Vec<String>,
}

impl RecordingView {
    /// The container's current content.
    pub fn current(&self) -> Option<&str> {
        self.renders.last().map(String::as_str)
    }
}

impl ResultsView for RecordingView {
    fn replace_results(&mut self, html: &str) {
        self.renders.push(html.to_string());
    }
}
