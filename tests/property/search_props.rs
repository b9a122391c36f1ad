//! Result-set properties.

use docsift::{search, IndexEntry, SearchIndex, SearchOptions};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabet so random queries actually hit.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-f]{2,5}").unwrap()
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => word_strategy(),
            1 => Just("\n".to_string()),
        ],
        0..40,
    )
    .prop_map(|words| words.join(" "))
}

fn index_strategy() -> impl Strategy<Value = SearchIndex> {
    prop::collection::vec((word_strategy(), text_strategy()), 0..25).prop_map(|pages| {
        SearchIndex::new(
            pages
                .into_iter()
                .enumerate()
                .map(|(i, (title, content))| IndexEntry::new(title, content, format!("/p/{}.html", i)))
                .collect(),
        )
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..3).prop_map(|words| words.join(" "))
}

fn options_strategy() -> impl Strategy<Value = SearchOptions> {
    (1usize..12, 1usize..6, 0usize..15).prop_map(|(max_results, max_matches_per_page, context_words)| {
        SearchOptions {
            max_results,
            max_matches_per_page,
            context_words,
            ..SearchOptions::default()
        }
    })
}

/// Positions of every entry containing at least one query word.
fn candidates(index: &SearchIndex, query: &str) -> Vec<usize> {
    let words: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    index
        .iter()
        .enumerate()
        .filter(|(_, entry)| {
            let text = entry.searchable_text().to_lowercase();
            words.iter().any(|w| text.contains(w.as_str()))
        })
        .map(|(i, _)| i)
        .collect()
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Anything under two characters after trimming yields nothing.
    #[test]
    fn prop_short_query_is_empty(
        index in index_strategy(),
        query in "[ \t]{0,3}[a-fA-F]?[ \t]{0,3}",
    ) {
        prop_assert!(search(&index, &query, &SearchOptions::default()).is_empty());
    }

    /// Results are exactly the first `max_results` candidates, in index order.
    #[test]
    fn prop_results_are_candidate_prefix(
        index in index_strategy(),
        query in query_strategy(),
        options in options_strategy(),
    ) {
        let results = search(&index, &query, &options);
        let expected: Vec<usize> = candidates(&index, &query)
            .into_iter()
            .take(options.max_results)
            .collect();
        let positions: Vec<usize> = results.iter().map(|r| r.entry).collect();
        prop_assert_eq!(positions, expected);
    }

    /// Limits hold and every reported entry has at least one snippet.
    #[test]
    fn prop_limits_hold(
        index in index_strategy(),
        query in query_strategy(),
        options in options_strategy(),
    ) {
        let results = search(&index, &query, &options);
        prop_assert!(results.len() <= options.max_results);
        for result in &results {
            prop_assert!(!result.snippets.is_empty());
            prop_assert!(result.snippets.len() <= options.max_matches_per_page);
        }
    }

    /// The same pass over the same index always renders the same thing.
    #[test]
    fn prop_search_deterministic(index in index_strategy(), query in query_strategy()) {
        let options = SearchOptions::default();
        prop_assert_eq!(search(&index, &query, &options), search(&index, &query, &options));
    }
}
