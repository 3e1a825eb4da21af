// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary corpora and queries: emoji, NUL bytes, combining marks. Search
//! must never panic, must respect the caps, and every exact snippet must be
//! a slice of the corpus.

#![no_main]

use arbitrary::Arbitrary;
use folio::{Corpus, Query, SearchOptions, Searcher};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    text: String,
    query: String,
    multi: bool,
    fuzzy: bool,
    max_matches: u8,
    context: u8,
}

fuzz_target!(|input: SearchInput| {
    let options = SearchOptions {
        max_matches: usize::from(input.max_matches),
        context_bytes: usize::from(input.context),
        context_words: usize::from(input.context % 40),
    };
    let searcher = Searcher::with_options(Corpus::from_text(input.text.clone()), options);
    let query = Query::new(&input.query, input.multi, input.fuzzy);

    // INVARIANT 1: search() never panics
    let results = searcher.search(&query);

    // INVARIANT 2: at most max_matches per term
    assert!(results.len() <= options.max_matches * query.terms.len().max(1));

    for snippet in &results {
        if query.mode == folio::SearchMode::Exact {
            // INVARIANT 3: exact snippets are slices of the corpus
            assert!(input.text.contains(snippet.as_str()));
            assert!(snippet.len() <= 2 * options.context_bytes);
        } else {
            // INVARIANT 4: fuzzy snippets hold at most 2 * context words
            assert!(snippet.split(' ').count() <= (2 * options.context_words).max(1));
        }
    }
});
