// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query word highlighting.
//!
//! Every word is passed through `regex::escape` before it goes anywhere near
//! a pattern. A query of `.` highlights full stops, not every character, and a
//! query of `(` cannot produce an unbalanced group. This is structural: there
//! is no code path that compiles user text unescaped.
//!
//! All words are compiled into one case-insensitive alternation, longest
//! first, so overlapping words (`mod`, `mods`) produce one `<mark>` rather than
//! nested ones. Replacement only touches text *between* tags and character
//! references, so a query of `br` leaves `<br>` alone and `amp` leaves
//! `&amp;` alone.

use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::sync::LazyLock;

use super::balance::TAG_PATTERN;

/// Tags and character references (`&amp;`, `&#39;`, `&#x2014;`).
static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{}|&(?:#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z][A-Za-z0-9]*);",
        TAG_PATTERN
    ))
    .expect("markup pattern is valid")
});

pub const MARK_OPEN: &str = "<mark>";
pub const MARK_CLOSE: &str = "</mark>";

/// Compiled highlighter for one query.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(words: &[String]) -> Self {
        let mut words: Vec<&str> = words
            .iter()
            .map(String::as_str)
            .filter(|w| !w.is_empty())
            .collect();
        words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        words.dedup();

        if words.is_empty() {
            return Self { pattern: None };
        }

        let alternation = words
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");

        // Escaped input always parses; the only failure left is the compiled
        // size limit on absurdly long queries, where we skip highlighting.
        let pattern = match RegexBuilder::new(&alternation).case_insensitive(true).build() {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::warn!(error = %e, "highlight pattern rejected, snippets left unmarked");
                None
            }
        };

        Self { pattern }
    }

    /// Wrap every occurrence of a query word in `fragment` with `<mark>`.
    pub fn highlight(&self, fragment: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return fragment.to_string();
        };

        let mut out = String::with_capacity(fragment.len() + 32);
        let mut last = 0;
        for markup in MARKUP.find_iter(fragment) {
            out.push_str(&mark_text(pattern, &fragment[last..markup.start()]));
            out.push_str(markup.as_str());
            last = markup.end();
        }
        out.push_str(&mark_text(pattern, &fragment[last..]));
        out
    }
}

fn mark_text<'a>(pattern: &Regex, text: &'a str) -> Cow<'a, str> {
    if text.is_empty() {
        return Cow::Borrowed(text);
    }
    pattern.replace_all(text, |caps: &regex::Captures<'_>| {
        format!("{}{}{}", MARK_OPEN, &caps[0], MARK_CLOSE)
    })
}
