// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring scanning and anchor merging.
//!
//! Matching is a literal, case-insensitive substring scan: the query word is
//! lowercased by [`Query`], the entry text is lowercased here, and
//! `str::match_indices` does the rest. No regex is involved, so a word like
//! `(.*)` matches exactly those four characters.
//!
//! Offsets are byte offsets into the entry's *original* searchable text. That
//! takes a little care: lowercasing can change a character's UTF-8 length
//! (`İ` becomes `i̇`), so [`Haystack`] keeps a map back to the original bytes
//! whenever that happens.
//!
//! [`Query`]: super::Query

use crate::types::SearchIndex;

use super::{Query, SearchOptions};

/// An entry that matched, with the anchors its snippets will be cut around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// Position of the entry in the index.
    pub entry: usize,
    /// Ascending byte offsets into the entry's searchable text.
    pub anchors: Vec<usize>,
}

/// Lowercased view of a text with offsets mapped back to the original.
#[derive(Debug, Clone)]
pub struct Haystack {
    lower: String,
    /// Original byte offset for every byte of `lower`. `None` when lowercasing
    /// preserved every character's length, so offsets are identical.
    origins: Option<Vec<usize>>,
}

impl Haystack {
    pub fn new(text: &str) -> Self {
        let mut lower = String::with_capacity(text.len());
        let mut origins: Option<Vec<usize>> = None;

        for (offset, ch) in text.char_indices() {
            let before = lower.len();
            lower.extend(ch.to_lowercase());
            let grown = lower.len() - before;

            if origins.is_none() && grown != ch.len_utf8() {
                // First length change: backfill the identity map so far.
                origins = Some((0..before).collect());
            }
            // INVARIANT: every byte of `lower` maps to the start of a char in `text`
            if let Some(map) = origins.as_mut() {
                map.extend(std::iter::repeat(offset).take(grown));
            }
        }

        Self { lower, origins }
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    fn origin(&self, lower_offset: usize) -> usize {
        match &self.origins {
            Some(map) => map[lower_offset],
            None => lower_offset,
        }
    }

    /// Start offsets (in the original text) of every non-overlapping
    /// occurrence of `word`, scanning left to right.
    pub fn occurrences<'a>(&'a self, word: &'a str) -> impl Iterator<Item = usize> + 'a {
        self.lower
            .match_indices(word)
            .map(move |(offset, _)| self.origin(offset))
    }
}

/// Collapse nearby offsets into representative anchors.
///
/// `offsets` are byte offsets into `text`. They are sorted and deduplicated;
/// any offset fewer than `threshold` characters after the current anchor is
/// absorbed by it. The anchor is always the first offset of its run.
///
/// ```
/// use docsift::search::merge_anchors;
///
/// let text = "x".repeat(400);
/// assert_eq!(merge_anchors(&text, vec![300, 10, 40, 120], 80), vec![10, 120, 300]);
/// ```
pub fn merge_anchors(text: &str, mut offsets: Vec<usize>, threshold: usize) -> Vec<usize> {
    offsets.sort_unstable();
    offsets.dedup();

    let mut anchors: Vec<usize> = Vec::with_capacity(offsets.len());
    for offset in offsets {
        match anchors.last() {
            Some(&anchor) if char_distance(text, anchor, offset, threshold) < threshold => {}
            _ => anchors.push(offset),
        }
    }
    anchors
}

/// Characters between two offsets, counting no further than `limit`.
/// Offsets that are not char boundaries fall back to the byte distance.
fn char_distance(text: &str, from: usize, to: usize, limit: usize) -> usize {
    match text.get(from..to) {
        Some(between) => between.chars().take(limit).count(),
        None => to - from,
    }
}

/// Scan the index for entries containing any query word.
///
/// Returns at most `max_results` records, in index order, each with at most
/// `max_matches_per_page` anchors. Scanning stops as soon as enough
/// candidates have been found since later entries could never be reported.
pub fn find_matches(index: &SearchIndex, query: &Query, options: &SearchOptions) -> Vec<MatchRecord> {
    let mut records = Vec::new();
    if options.max_results == 0 {
        return records;
    }

    for (position, entry) in index.iter().enumerate() {
        let text = entry.searchable_text();
        let haystack = Haystack::new(&text);

        let offsets: Vec<usize> = query
            .words()
            .iter()
            .flat_map(|word| haystack.occurrences(word))
            .collect();
        if offsets.is_empty() {
            continue;
        }

        let mut anchors = merge_anchors(&text, offsets, options.proximity_threshold());
        anchors.truncate(options.max_matches_per_page);

        records.push(MatchRecord {
            entry: position,
            anchors,
        });

        // INVARIANT: records is a prefix of all candidates in index order
        if records.len() >= options.max_results {
            break;
        }
    }

    records
}
