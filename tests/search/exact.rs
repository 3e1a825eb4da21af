//! Exact substring search tests.
//!
//! Offsets come from the suffix array, snippets from the raw text. These
//! check both against what a reader of the document would expect.

use super::common::{narrow, naive_find_all, searcher, searcher_with, CAT_SAT, VERSE};
use folio::search::exact::match_offsets;
use folio::{Corpus, Query, SearchOptions};

// ============================================================================
// MATCHING
// ============================================================================

#[test]
fn test_every_occurrence_found() {
    let corpus = Corpus::from_text(CAT_SAT);
    assert_eq!(match_offsets(&corpus, "the", 500), vec![0, 15]);
    assert_eq!(match_offsets(&corpus, "at", 500), vec![5, 9, 20]);
}

#[test]
fn test_overlapping_occurrences() {
    let corpus = Corpus::from_text("aaaa");
    assert_eq!(match_offsets(&corpus, "aa", 500), vec![0, 1, 2]);
}

#[test]
fn test_case_insensitive_both_ways() {
    let corpus = Corpus::from_text(VERSE);
    let lower = match_offsets(&corpus, "to be", 500);
    let upper = match_offsets(&corpus, "TO BE", 500);
    assert_eq!(lower, upper);
    assert_eq!(lower.len(), 2);
}

#[test]
fn test_offsets_agree_with_naive_scan() {
    let corpus = Corpus::from_text(VERSE);
    let folded = VERSE.to_lowercase();
    for term in ["the", "to", "of", "s", "nobler in", ":\nwhether"] {
        assert_eq!(
            match_offsets(&corpus, term, 500),
            naive_find_all(folded.as_bytes(), term.as_bytes()),
            "term {:?}",
            term
        );
    }
}

#[test]
fn test_not_found_is_empty() {
    let s = searcher(CAT_SAT);
    assert!(s.search_exact(&["dog"]).is_empty());
    assert!(s.search_exact(&["the cat sat on the mat and more"]).is_empty());
}

#[test]
fn test_empty_term_contributes_nothing() {
    let s = searcher(CAT_SAT);
    assert!(s.search_exact(&[""]).is_empty());
    assert_eq!(s.search_exact(&["", "cat"]).len(), 1);
}

#[test]
fn test_phrase_is_one_term_without_multi() {
    let s = searcher(VERSE);
    let results = s.search(&Query::new("to be", false, false));
    assert_eq!(results.len(), 2);
    for snippet in &results {
        assert!(snippet.to_lowercase().contains("to be"));
    }
}

// ============================================================================
// SNIPPETS
// ============================================================================

#[test]
fn test_small_document_snippet() {
    let s = searcher(CAT_SAT);
    // Window end clamps to len - 1, so the final 't' never shows
    assert_eq!(
        s.search_exact(&["the"]),
        vec!["the cat sat on the ma", "the cat sat on the ma"]
    );
}

#[test]
fn test_snippet_keeps_raw_case() {
    let s = searcher("Alas, poor YORICK! I knew him.");
    assert_eq!(s.search_exact(&["yorick"]), vec!["Alas, poor YORICK! I knew him"]);
}

#[test]
fn test_window_clamps_at_start() {
    let s = searcher_with("abcdefghijklmnopqrstuvwxyz", narrow(5, 35));
    assert_eq!(s.search_exact(&["a"]), vec!["abcde"]);
}

#[test]
fn test_window_clamps_at_end() {
    let s = searcher_with("abcdefghijklmnopqrstuvwxyz", narrow(5, 35));
    assert_eq!(s.search_exact(&["z"]), vec!["uvwxy"]);
}

#[test]
fn test_window_in_the_middle() {
    let s = searcher_with("abcdefghijklmnopqrstuvwxyz", narrow(5, 35));
    assert_eq!(s.search_exact(&["m"]), vec!["hijklmnopq"]);
}

#[test]
fn test_window_never_splits_a_character() {
    let s = searcher("café Café");
    // The window end falls inside the final 'é' and is pulled back
    assert_eq!(s.search_exact(&["CAFÉ"]), vec!["café Caf", "café Caf"]);
}

#[test]
fn test_snippet_width_bounded() {
    let text = "lorem ipsum dolor sit amet ".repeat(100);
    let s = searcher(&text);
    for snippet in s.search_exact(&["dolor"]) {
        assert!(snippet.len() <= 2 * SearchOptions::default().context_bytes);
    }
}

// ============================================================================
// CAPS
// ============================================================================

#[test]
fn test_cap_at_max_matches() {
    let s = searcher(&"cat ".repeat(600));
    assert_eq!(s.search_exact(&["cat"]).len(), 500);
}

#[test]
fn test_cap_is_per_term() {
    let s = searcher(&"cat dog ".repeat(600));
    assert_eq!(s.search_exact(&["cat", "dog"]).len(), 1000);
}

#[test]
fn test_custom_cap() {
    let options = SearchOptions {
        max_matches: 3,
        ..SearchOptions::default()
    };
    let s = searcher_with(&"cat ".repeat(10), options);
    assert_eq!(s.search_exact(&["cat"]).len(), 3);
}
