//! Snippet windows, heading demotion and tag balancing.

use super::common::{is_tag_balanced, make_index};
use docsift::{search, SearchOptions};

fn only_snippet(title: &str, content: &str, query: &str) -> String {
    let results = search(&make_index(&[(title, content)]), query, &SearchOptions::default());
    assert_eq!(results.len(), 1, "expected exactly one result for {:?}", query);
    assert_eq!(results[0].snippets.len(), 1);
    results[0].snippets[0].clone()
}

fn filler(n: usize) -> String {
    (0..n)
        .map(|i| format!("filler line {} with several more words in it", i))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_headings_become_strong() {
    let snippet = only_snippet("T", "<h2 id=\"install\">Install</h2>\nRun the mod installer.", "mod");
    assert!(snippet.contains("<strong>Install</strong>"), "{}", snippet);
    assert!(!snippet.contains("<h2"), "{}", snippet);
}

#[test]
fn test_window_is_three_lines_each_side() {
    // Eleven words per line, so the default window already has enough words.
    let mut lines: Vec<String> = (0..20)
        .map(|i| format!("line{} one two three four five six seven eight nine ten", i))
        .collect();
    lines[10] = "the target mod line with plenty of words in it today".to_string();
    let snippet = only_snippet("T", &lines.join("\n"), "target");

    // Searchable text is "T\n" + content, so content line 10 is text line 11.
    // Window: text lines 8..=14, i.e. content lines 7..=13.
    assert!(snippet.starts_with("line7 "), "{}", snippet);
    assert!(snippet.ends_with("line13 one two three four five six seven eight nine ten"));
    assert_eq!(snippet.matches("<br>").count(), 6);
}

#[test]
fn test_short_lines_grow_the_window() {
    let lines: Vec<String> = (0..20)
        .map(|i| if i == 10 { "mod".to_string() } else { format!("w{}", i) })
        .collect();
    let snippet = only_snippet("T", &lines.join("\n"), "mod");
    // 21 one-word lines never reach the word target, so all of them are kept.
    assert_eq!(snippet.matches("<br>").count(), 20);
    assert!(snippet.starts_with("T<br>w0<br>"));
}

#[test]
fn test_carriage_returns_are_stripped() {
    let snippet = only_snippet("T", "one\r\ntwo mod\r\nthree", "mod");
    assert!(!snippet.contains('\r'));
    assert_eq!(snippet, "T<br>one<br>two <mark>mod</mark><br>three");
}

#[test]
fn test_window_cut_through_open_element_is_closed() {
    let content = format!(
        "{}\n<section><p>Intro to the mod\n{}\n</p></section>",
        filler(5),
        filler(8)
    );
    let snippet = only_snippet("T", &content, "intro");
    assert!(is_tag_balanced(&snippet), "{}", snippet);
    assert!(snippet.ends_with("</p></section>"), "{}", snippet);
}

#[test]
fn test_stray_close_tag_is_dropped() {
    let content = format!("<div>\n{}\n</div> tail mod words\n{}", filler(8), filler(8));
    let snippet = only_snippet("T", &content, "tail");
    assert!(!snippet.contains("</div>"), "{}", snippet);
    assert!(is_tag_balanced(&snippet), "{}", snippet);
}

#[test]
fn test_code_element_is_closed() {
    let content = format!("{}\nuse <code>mod_loader\n{}\nend</code>", filler(4), filler(8));
    let snippet = only_snippet("T", &content, "mod_loader");
    assert!(snippet.contains("<code><mark>mod_loader</mark>"), "{}", snippet);
    assert!(snippet.ends_with("</code>"), "{}", snippet);
}
