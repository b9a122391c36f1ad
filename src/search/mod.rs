// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline: where a keystroke becomes a result list.
//!
//! There is no ranking model here and that is the point. Every pass scans the
//! whole index, keeps the first `max_results` entries that contain any query
//! word, and cuts a few line-window snippets around the matches. For a
//! documentation site with a few hundred pages this is comfortably faster than
//! a frame, and it never surprises anyone with a "relevant" page that doesn't
//! contain the word they typed.
//!
//! ```text
//! raw query ─▶ Query::parse ─▶ find_matches ─▶ build_snippet ─▶ RankedResult
//!              (trim, lower,    (substring      (window, demote,
//!               tokenize)        scan, merge)     highlight, balance)
//! ```
//!
//! **Invariant**: results are a prefix of the candidates in index order.
//! Truncation never reorders.

pub mod balance;
pub mod highlight;
pub mod matching;
pub mod query;
pub mod snippet;

use serde::{Deserialize, Serialize};

use crate::types::SearchIndex;

pub use balance::balance_tags;
pub use highlight::Highlighter;
pub use matching::{find_matches, merge_anchors, Haystack, MatchRecord};
pub use query::Query;
pub use snippet::{build_snippet, demote_headings, snippet_window};

/// Tunables for one search pass.
///
/// Deserializable so that `docsift.toml` and the browser binding can both
/// override individual fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Queries shorter than this (in characters, after trimming) clear results.
    #[serde(alias = "min_query_len")]
    pub min_query_len: usize,
    /// Maximum number of entries reported.
    #[serde(alias = "max_results")]
    pub max_results: usize,
    /// Maximum number of snippets per entry.
    #[serde(alias = "max_matches_per_page")]
    pub max_matches_per_page: usize,
    /// Hits fewer than `context_words * 8` characters apart share one snippet.
    #[serde(alias = "context_words")]
    pub context_words: usize,
    /// Lines of context above the matching line.
    #[serde(alias = "lines_above")]
    pub lines_above: usize,
    /// Lines of context below the matching line.
    #[serde(alias = "lines_below")]
    pub lines_below: usize,
    /// Windows with fewer words than this grow a line at a time.
    #[serde(alias = "target_words")]
    pub target_words: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            max_results: 10,
            max_matches_per_page: 5,
            context_words: 10,
            lines_above: 3,
            lines_below: 3,
            target_words: 30,
        }
    }
}

impl SearchOptions {
    /// Character distance under which neighbouring hits collapse into one anchor.
    pub fn proximity_threshold(&self) -> usize {
        self.context_words.saturating_mul(8)
    }
}

/// One entry in the result list, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult {
    /// Position of the entry in the index.
    pub entry: usize,
    /// Link text: the title, or the URL for untitled entries.
    pub title: String,
    pub url: String,
    /// Highlighted, tag-balanced HTML fragments in anchor order.
    pub snippets: Vec<String>,
}

/// What a search pass decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query is below the minimum length; results should be cleared.
    TooShort,
    /// The query ran. An empty list means "no results found".
    Hits(Vec<RankedResult>),
}

impl SearchOutcome {
    pub fn into_results(self) -> Vec<RankedResult> {
        match self {
            SearchOutcome::TooShort => Vec::new(),
            SearchOutcome::Hits(results) => results,
        }
    }
}

/// Run one full search pass over the index.
pub fn run(index: &SearchIndex, raw_query: &str, options: &SearchOptions) -> SearchOutcome {
    let Some(query) = Query::parse(raw_query, options.min_query_len) else {
        return SearchOutcome::TooShort;
    };

    let matches = find_matches(index, &query, options);
    let highlighter = Highlighter::new(query.words());

    let results: Vec<RankedResult> = matches
        .iter()
        .map(|record| {
            let entry = &index.entries()[record.entry];
            let text = entry.searchable_text();
            let snippets = record
                .anchors
                .iter()
                .map(|&anchor| build_snippet(&text, anchor, &highlighter, options))
                .collect();
            RankedResult {
                entry: record.entry,
                title: entry.display_title().to_string(),
                url: entry.url.clone(),
                snippets,
            }
        })
        .collect();

    tracing::debug!(
        query = query.normalized(),
        words = query.words().len(),
        results = results.len(),
        "search pass"
    );

    SearchOutcome::Hits(results)
}

/// Convenience wrapper around [`run`] that treats a short query as no results.
pub fn search(index: &SearchIndex, raw_query: &str, options: &SearchOptions) -> Vec<RankedResult> {
    run(index, raw_query, options).into_results()
}
