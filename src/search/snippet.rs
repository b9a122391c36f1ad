// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction around a match anchor.
//!
//! Documentation reads in lines and paragraphs, so snippets are cut in lines
//! too: the line holding the match plus a few lines either side. Short lines
//! (headings, list items, blank separators) would make that window too thin
//! to be useful, so when it holds fewer than `target_words` words it grows
//! one line at a time on each side that still has room.
//!
//! The pipeline for one snippet:
//!
//! 1. locate the anchor's line and take the window around it
//! 2. demote `<h1>`..`<h6>` to `<strong>` so headings don't shout
//! 3. join lines with `<br>`
//! 4. highlight query words
//! 5. balance tags, since the window cut through arbitrary markup
//!
//! Demotion never touches a newline, so doing it after windowing gives the
//! same lines as doing it first while keeping anchor offsets valid.

use regex::Regex;
use std::sync::LazyLock;

use super::{balance_tags, Highlighter, SearchOptions};

static HEADING_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(/?)h[1-6]\b[^<>]*>").expect("heading pattern is valid")
});

const LINE_BREAK: &str = "<br>";

/// Replace heading tags with `<strong>` / `</strong>`.
pub fn demote_headings(text: &str) -> String {
    HEADING_TAG.replace_all(text, "<${1}strong>").into_owned()
}

/// Index of the line containing byte `offset`.
///
/// Line lengths (plus one for each newline) are accumulated until the total
/// passes the offset. Offsets past the end land on the last line.
fn line_of_offset(lines: &[&str], offset: usize) -> usize {
    let mut end = 0;
    for (i, line) in lines.iter().enumerate() {
        end += line.len() + 1;
        if end > offset {
            return i;
        }
    }
    lines.len().saturating_sub(1)
}

fn word_count(lines: &[&str]) -> usize {
    lines.iter().map(|line| line.split_whitespace().count()).sum()
}

/// The window of lines to show for a match at `offset`.
pub fn snippet_window<'a>(text: &'a str, offset: usize, options: &SearchOptions) -> Vec<&'a str> {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    let line = line_of_offset(&lines, offset);

    // INVARIANT: start <= line <= end <= last
    let mut start = line.saturating_sub(options.lines_above);
    let mut end = (line + options.lines_below).min(last);

    while word_count(&lines[start..=end]) < options.target_words && (start > 0 || end < last) {
        start = start.saturating_sub(1);
        end = (end + 1).min(last);
    }

    lines[start..=end]
        .iter()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Build the highlighted, tag-balanced HTML snippet for one anchor.
pub fn build_snippet(
    text: &str,
    offset: usize,
    highlighter: &Highlighter,
    options: &SearchOptions,
) -> String {
    let window = snippet_window(text, offset, options);
    let joined = window
        .iter()
        .map(|line| demote_headings(line))
        .collect::<Vec<_>>()
        .join(LINE_BREAK);
    balance_tags(&highlighter.highlight(&joined))
}
