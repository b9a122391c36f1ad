// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tag balancing for snippet fragments.
//!
//! Snippets are cut at line boundaries with no regard for markup, so a window
//! can start inside a `<div>` or stop before a `</table>`. Injected as-is, such
//! a fragment would swallow the rest of the results list. This pass repairs it
//! with a stack:
//!
//! - open tags push, void elements and `<x/>` do not
//! - a close tag pops back to its matching opener, closing anything opened
//!   inside it first
//! - a close tag whose opener was cut off is dropped
//! - whatever is still open at the end is closed in reverse order
//!
//! This is a regex heuristic, not an HTML parser. Comments, `<script>` bodies
//! and attribute values containing `>` are not understood. A streaming
//! tokenizer could replace it without changing the contract: the output has
//! no unclosed non-void element and no unmatched close tag.

use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

pub(crate) const TAG_PATTERN: &str = r"<(/?)([A-Za-z][A-Za-z0-9-]*)\b[^<>]*?(/?)>";

/// Any start, end or self-closing tag. Groups: `/` for end tags, the tag name,
/// `/` for self-closing tags. Shared with the balance checkers in tests and
/// fuzz targets.
#[doc(hidden)]
pub static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TAG_PATTERN).expect("tag pattern is valid"));

/// Elements that never take a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| void.eq_ignore_ascii_case(name))
}

/// Rewrite `fragment` so every element it opens is closed and every close
/// tag it keeps has an opener.
///
/// ```
/// use docsift::search::balance_tags;
///
/// assert_eq!(balance_tags("<p>cut <em>off"), "<p>cut <em>off</em></p>");
/// assert_eq!(balance_tags("tail</div> ok"), "tail ok");
/// ```
pub fn balance_tags(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len() + 16);
    let mut open: Vec<String> = Vec::new();
    let mut last = 0;

    for caps in TAG.captures_iter(fragment) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&fragment[last..whole.start()]);
        last = whole.end();

        let closing = !caps[1].is_empty();
        let self_closing = !caps[3].is_empty();
        let name = caps[2].to_ascii_lowercase();

        if closing {
            let Some(position) = open.iter().rposition(|tag| *tag == name) else {
                // Opener is outside the window
                continue;
            };
            while open.len() > position + 1 {
                if let Some(inner) = open.pop() {
                    let _ = write!(out, "</{}>", inner);
                }
            }
            open.pop();
            out.push_str(whole.as_str());
        } else {
            out.push_str(whole.as_str());
            if !self_closing && !is_void_element(&name) {
                open.push(name);
            }
        }
    }

    out.push_str(&fragment[last..]);

    // INVARIANT: after this loop no element opened in `out` is left unclosed
    while let Some(tag) = open.pop() {
        let _ = write!(out, "</{}>", tag);
    }

    out
}
