// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Front-matter handling for source documents.
//!
//! Only two things matter to the index: the `title:` value, and where the
//! body starts. The block is the Jekyll convention: a `---` line at the very
//! top, metadata lines, a closing `---` line. Nothing else in the block is
//! interpreted, so this is not a YAML parser and doesn't try to be.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\u{FEFF}?---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)")
        .expect("front-matter pattern is valid")
});

static TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^title:[ \t]*(.*?)[ \t]*\r?$").expect("title pattern is valid")
});

/// A source document split into its metadata block and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Lines between the `---` delimiters, if the document has a block.
    pub block: Option<&'a str>,
    /// Everything after the block.
    pub body: &'a str,
}

impl<'a> FrontMatter<'a> {
    pub fn split(text: &'a str) -> Self {
        match BLOCK.captures(text) {
            Some(caps) => {
                let end = caps.get(0).map_or(0, |m| m.end());
                Self {
                    block: Some(caps.get(1).map_or("", |m| m.as_str())),
                    body: &text[end..],
                }
            }
            None => Self {
                block: None,
                body: text,
            },
        }
    }

    /// The `title:` value, unquoted. Empty titles count as missing.
    ///
    /// ```
    /// use docsift::build::FrontMatter;
    ///
    /// let doc = FrontMatter::split("---\nlayout: page\ntitle: \"Setup Guide\"\n---\nBody");
    /// assert_eq!(doc.title(), Some("Setup Guide"));
    /// assert_eq!(doc.body, "Body");
    /// ```
    pub fn title(&self) -> Option<&'a str> {
        let block = self.block?;
        let caps = TITLE.captures(block)?;
        let value = unquote(caps.get(1)?.as_str().trim());
        (!value.is_empty()).then_some(value)
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
