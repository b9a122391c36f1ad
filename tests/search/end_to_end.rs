//! Full passes over small indexes.

use super::common::{make_index, make_untitled_entry, sample_site};
use docsift::{search, IndexEntry, SearchIndex, SearchOptions, SearchOutcome};

#[test]
fn test_mod_query_on_sample_site() {
    let results = search(&sample_site(), "mod", &SearchOptions::default());

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Setup Guide");
    assert_eq!(results[0].url, "/beamng/setup.html");
    assert_eq!(
        results[0].snippets,
        vec![
            "Setup Guide<br>Install the <mark>mod</mark> by copying files into the \
             <mark>mod</mark>s folder."
                .to_string()
        ]
    );
}

#[test]
fn test_query_case_does_not_matter() {
    let lower = search(&sample_site(), "mod", &SearchOptions::default());
    let upper = search(&sample_site(), "  MOD ", &SearchOptions::default());
    assert_eq!(lower, upper);
}

#[test]
fn test_empty_query_gives_nothing() {
    let options = SearchOptions::default();
    assert!(search(&sample_site(), "", &options).is_empty());
    assert_eq!(docsift::search::run(&sample_site(), "", &options), SearchOutcome::TooShort);
}

#[test]
fn test_title_only_match() {
    let results = search(&sample_site(), "faq", &SearchOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "/beamng/faq.html");
    assert_eq!(results[0].snippets, vec!["<mark>FAQ</mark><br>No relevant text here."]);
}

#[test]
fn test_any_word_matches() {
    let index = make_index(&[
        ("Cars", "Tuning the engine."),
        ("Maps", "Editing terrain."),
        ("Misc", "Nothing to see."),
    ]);
    let results = search(&index, "engine terrain", &SearchOptions::default());
    let urls: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["/doc/0.html", "/doc/1.html"]);
}

#[test]
fn test_words_near_each_other_share_a_snippet() {
    let results = search(&sample_site(), "install folder", &SearchOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].snippets.len(), 1);
    let snippet = &results[0].snippets[0];
    assert!(snippet.contains("<mark>Install</mark>"), "{}", snippet);
    assert!(snippet.contains("<mark>folder</mark>"), "{}", snippet);
}

#[test]
fn test_untitled_entry_uses_url_as_title() {
    let index = SearchIndex::new(vec![make_untitled_entry(0, "about mods")]);
    let results = search(&index, "mods", &SearchOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "/doc/0.html");
}

#[test]
fn test_entry_without_content_field() {
    let index = SearchIndex::from_json(r#"[{"title": "Lonely", "url": "/l.html"}]"#).unwrap();
    let results = search(&index, "lonely", &SearchOptions::default());
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].snippets, vec!["<mark>Lonely</mark><br>"]);
}

#[test]
fn test_non_ascii_query() {
    let index = SearchIndex::new(vec![IndexEntry::new(
        "Straßen",
        "Die Straßenkarte zeigt ÜBERALL Wege.",
        "/de.html",
    )]);
    let results = search(&index, "überall", &SearchOptions::default());
    assert_eq!(results.len(), 1);
    assert!(results[0].snippets[0].contains("<mark>ÜBERALL</mark>"));
}

#[test]
fn test_repeated_passes_are_identical() {
    let index = sample_site();
    let options = SearchOptions::default();
    assert_eq!(search(&index, "the", &options), search(&index, "the", &options));
}
