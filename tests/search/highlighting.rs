//! Highlighting of query words inside snippets.

use super::common::{make_index, marked_words};
use docsift::{search, SearchOptions};

fn snippets_for(content: &str, query: &str) -> Vec<String> {
    search(&make_index(&[("T", content)]), query, &SearchOptions::default())
        .into_iter()
        .flat_map(|r| r.snippets)
        .collect()
}

#[test]
fn test_dot_is_literal() {
    let snippets = snippets_for("Version 1.2 replaces 1x2.", "1.2");
    assert_eq!(snippets.len(), 1);
    assert_eq!(marked_words(&snippets[0]), vec!["1.2"]);
}

#[test]
fn test_dot_only_query_matches_dots() {
    let snippets = snippets_for("See... more", "..");
    assert_eq!(marked_words(&snippets[0]), vec![".."]);
}

#[test]
fn test_regex_metacharacters_do_not_panic() {
    for query in ["a*b", "(beta)", "((", "))", "[x]", "a+", "c?", "x|y", "^^", "$$", "\\d"] {
        let content = format!("before {} after", query);
        let snippets = snippets_for(&content, query);
        assert_eq!(snippets.len(), 1, "query {:?}", query);
        assert_eq!(marked_words(&snippets[0]), vec![query.to_string()], "query {:?}", query);
    }
}

#[test]
fn test_star_is_not_a_quantifier() {
    assert!(snippets_for("aaab and ab", "a*b").is_empty());
}

#[test]
fn test_tags_are_never_highlighted() {
    let snippets = snippets_for("first br line\nsecond line", "br");
    assert_eq!(snippets.len(), 1);
    assert!(snippets[0].contains("<br>"), "{}", snippets[0]);
    assert_eq!(marked_words(&snippets[0]), vec!["br"]);
}

#[test]
fn test_attribute_values_are_untouched() {
    let snippets = snippets_for(r#"<a href="/mods/x">mods link</a>"#, "mods");
    assert!(snippets[0].contains(r#"<a href="/mods/x">"#), "{}", snippets[0]);
    assert_eq!(marked_words(&snippets[0]), vec!["mods"]);
}

#[test]
fn test_longer_word_wins_over_prefix() {
    let snippets = snippets_for("the mods folder", "mod mods");
    assert_eq!(marked_words(&snippets[0]), vec!["mods"]);
}

#[test]
fn test_highlight_keeps_source_case() {
    let snippets = snippets_for("Mod MOD mod", "mod");
    assert_eq!(marked_words(&snippets[0]), vec!["Mod", "MOD", "mod"]);
}

#[test]
fn test_character_references_survive_highlighting() {
    let snippets = snippets_for("Tom &amp; Jerry use an amplifier", "amp");
    assert_eq!(snippets.len(), 1);
    assert!(snippets[0].contains("Tom &amp; Jerry"), "{}", snippets[0]);
    assert_eq!(marked_words(&snippets[0]), vec!["amp"]);

    for (query, entity) in [("lt", "&lt;"), ("gt", "&gt;"), ("quot", "&quot;"), ("nbsp", "&nbsp;")] {
        let content = format!("x {} y", entity);
        for snippet in snippets_for(&content, query) {
            assert!(snippet.contains(entity), "{} broke {}", query, snippet);
        }
    }
}
