// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact substring search through the suffix array.
//!
//! The term is case folded the same way the index was, looked up as a byte
//! pattern, capped, and each hit becomes a raw-case window of text around it.

use super::window::text_window;
use super::SearchOptions;
use crate::corpus::Corpus;
use crate::util::fold_case;

/// Byte offsets of `term` in the corpus.
///
/// At most `limit` offsets are kept: the first ones the suffix array yields,
/// not the first in the document. The kept offsets are returned sorted.
pub fn match_offsets(corpus: &Corpus, term: &str, limit: usize) -> Vec<usize> {
    let pattern = fold_case(term);
    let hits = corpus.index().lookup(pattern.as_bytes());

    let mut offsets = hits[..hits.len().min(limit)].to_vec();
    offsets.sort_unstable();
    offsets
}

/// Snippets for every (capped) occurrence of `term`, in document order.
pub fn term_snippets(corpus: &Corpus, term: &str, options: &SearchOptions) -> Vec<String> {
    match_offsets(corpus, term, options.max_matches)
        .into_iter()
        .map(|idx| text_window(corpus.full_text(), idx, options.context_bytes).to_string())
        .collect()
}
