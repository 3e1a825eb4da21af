//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::{Corpus, SearchOptions, Searcher};

// ============================================================================
// FIXTURES
// ============================================================================

/// A few lines of verse, mixed case and punctuation included.
pub const VERSE: &str = "To be, or not to be, that is the question:\n\
Whether 'tis nobler in the mind to suffer\n\
The slings and arrows of outrageous fortune,\n\
Or to take arms against a sea of troubles\n\
And by opposing end them. To die: to sleep;\n";

/// The canonical small corpus.
pub const CAT_SAT: &str = "the cat sat on the mat";

pub fn searcher(text: &str) -> Searcher {
    Searcher::new(Corpus::from_text(text))
}

pub fn searcher_with(text: &str, options: SearchOptions) -> Searcher {
    Searcher::with_options(Corpus::from_text(text), options)
}

/// Options with small windows so snippets are easy to assert on.
pub fn narrow(context_bytes: usize, context_words: usize) -> SearchOptions {
    SearchOptions {
        context_bytes,
        context_words,
        ..SearchOptions::default()
    }
}

// ============================================================================
// ORACLES
// ============================================================================

/// Every byte offset where `needle` occurs in `haystack`, overlapping
/// occurrences included. Quadratic, for tests only.
pub fn naive_find_all(haystack: &[u8], needle: &[u8]) -> Vec<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }
    (0..=haystack.len() - needle.len())
        .filter(|&i| &haystack[i..i + needle.len()] == needle)
        .collect()
}

/// Suffix array by sorting every suffix directly.
pub fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}

/// Sorted copy, for comparing multi-term results that are shuffled.
pub fn sorted(mut results: Vec<String>) -> Vec<String> {
    results.sort();
    results
}
