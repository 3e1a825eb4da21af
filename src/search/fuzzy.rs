// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy word search: a linear scan of the cleaned word list.
//!
//! No vocabulary index, no automaton. Every word is checked against the
//! term with the length prefilter first, so most of the scan is a length
//! comparison. The scan stops as soon as `limit` matches are found, which
//! keeps the first matches in document order.

use super::window::word_window;
use super::SearchOptions;
use crate::corpus::Corpus;
use crate::fuzzy::WordMatcher;

/// Word indices matching `matcher`, in document order, at most `limit`.
pub fn matching_words(corpus: &Corpus, matcher: &WordMatcher, limit: usize) -> Vec<usize> {
    corpus
        .cleaned_words()
        .iter()
        .enumerate()
        .filter(|(_, word)| matcher.matches_cleaned(word))
        .map(|(idx, _)| idx)
        .take(limit)
        .collect()
}

/// Snippets of surrounding words for every (capped) fuzzy match of `term`.
pub fn term_snippets(corpus: &Corpus, term: &str, options: &SearchOptions) -> Vec<String> {
    let matcher = WordMatcher::new(term);
    matching_words(corpus, &matcher, options.max_matches)
        .into_iter()
        .map(|idx| {
            corpus.join_words(word_window(corpus.word_count(), idx, options.context_words))
        })
        .collect()
}
