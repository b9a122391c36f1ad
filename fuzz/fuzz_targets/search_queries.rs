// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary queries against arbitrary pages: emoji, RTL text, regex syntax,
//! half-open tags, characters whose lowercase form changes length. None of it
//! may panic, and the limits must hold.

#![no_main]

use arbitrary::Arbitrary;
use docsift::{search, IndexEntry, SearchIndex, SearchOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    pages: Vec<(Option<String>, String)>,
    max_results: u8,
    max_matches_per_page: u8,
    context_words: u8,
    lines_above: u8,
    lines_below: u8,
}

fuzz_target!(|input: Input| {
    let index = SearchIndex::new(
        input
            .pages
            .into_iter()
            .take(32)
            .enumerate()
            .map(|(i, (title, content))| IndexEntry {
                title,
                content,
                url: format!("/p/{}.html", i),
            })
            .collect(),
    );

    let options = SearchOptions {
        max_results: usize::from(input.max_results % 16),
        max_matches_per_page: usize::from(input.max_matches_per_page % 8),
        context_words: usize::from(input.context_words),
        lines_above: usize::from(input.lines_above % 8),
        lines_below: usize::from(input.lines_below % 8),
        ..SearchOptions::default()
    };

    let results = search(&index, &input.query, &options);
    assert!(results.len() <= options.max_results);
    for pair in results.windows(2) {
        assert!(pair[0].entry < pair[1].entry, "results out of index order");
    }
    for result in &results {
        assert!(result.snippets.len() <= options.max_matches_per_page);
    }
});
