// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTML rendering for the results container.
//!
//! The container's whole content is replaced on every pass, so each function
//! here returns the complete markup for it. URL and title come from the index
//! and are escaped; snippets are already sanitized fragments and go in as-is.

use std::fmt::Write;

use crate::search::RankedResult;

/// Shown when a query ran and nothing matched.
pub const NO_RESULTS_NOTICE: &str = "No results found";

/// Shown once when the index cannot be loaded.
pub const UNAVAILABLE_NOTICE: &str = "Search unavailable";

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn render_notice(message: &str) -> String {
    format!(r#"<p class="search-notice">{}</p>"#, escape_html(message))
}

/// Markup for a finished search pass.
pub fn render_results(results: &[RankedResult]) -> String {
    if results.is_empty() {
        return render_notice(NO_RESULTS_NOTICE);
    }

    let mut html = String::new();
    for result in results {
        let _ = write!(
            html,
            r#"<div class="search-result"><a href="{}">{}</a>"#,
            escape_html(&result.url),
            escape_html(&result.title)
        );
        for snippet in &result.snippets {
            let _ = write!(html, r#"<p class="search-snippet">{}</p>"#, snippet);
        }
        html.push_str("</div>");
    }
    html
}
