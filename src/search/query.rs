// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalization.

/// A normalized query and its whitespace-separated words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    normalized: String,
    words: Vec<String>,
}

impl Query {
    /// Trim and lowercase `raw`, then split it into words.
    ///
    /// Lowercasing is per character, the same folding the haystack uses, so
    /// context-sensitive rules like the Greek final sigma never apply.
    ///
    /// Returns `None` when the normalized query has fewer than `min_len`
    /// characters, which callers treat as "clear the results".
    ///
    /// ```
    /// use docsift::search::Query;
    ///
    /// let query = Query::parse("  Install  MOD ", 2).unwrap();
    /// assert_eq!(query.words(), ["install", "mod"]);
    /// assert!(Query::parse("m", 2).is_none());
    /// ```
    pub fn parse(raw: &str, min_len: usize) -> Option<Self> {
        let normalized: String = raw.trim().chars().flat_map(char::to_lowercase).collect();
        if normalized.chars().count() < min_len {
            return None;
        }

        let words: Vec<String> = normalized.split_whitespace().map(str::to_string).collect();
        if words.is_empty() {
            return None;
        }

        Some(Self { normalized, words })
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }
}
