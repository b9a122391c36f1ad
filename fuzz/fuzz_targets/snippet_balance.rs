// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for tag balancing.
//!
//! Arbitrary text goes in, and what comes out must be balanced: every close
//! tag has an opener and every non-void opener is closed. Balancing its own
//! output must change nothing.

#![no_main]

use docsift::search::balance::{is_void_element, TAG};
use docsift::search::balance_tags;
use libfuzzer_sys::fuzz_target;

fn assert_balanced(html: &str) {
    let mut open: Vec<String> = Vec::new();
    for caps in TAG.captures_iter(html) {
        let name = caps[2].to_ascii_lowercase();
        if !caps[1].is_empty() {
            assert_eq!(open.pop().as_deref(), Some(name.as_str()), "stray </{}> in {:?}", name, html);
        } else if caps[3].is_empty() && !is_void_element(&name) {
            open.push(name);
        }
    }
    assert!(open.is_empty(), "unclosed {:?} in {:?}", open, html);
}

fuzz_target!(|fragment: &str| {
    let balanced = balance_tags(fragment);
    assert_balanced(&balanced);
    assert_eq!(balance_tags(&balanced), balanced);
});
