// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded Levenshtein matching.
//!
//! The bounded check exits early on length and on row minimums. Both exits
//! must agree with the full distance, or fuzzy search silently drops words.

#![no_main]

use arbitrary::Arbitrary;
use folio::{levenshtein, levenshtein_within, max_edits, WordMatcher};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    term: String,
    word: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths on char boundaries to avoid timeouts
    let term: String = input.term.chars().take(40).collect();
    let word: String = input.word.chars().take(40).collect();
    let max = usize::from(input.max % 6);

    let distance = levenshtein(&term, &word);

    // INVARIANT 1: bounded check agrees with the exact distance
    assert_eq!(
        levenshtein_within(&term, &word, max),
        distance <= max,
        "term={:?} word={:?} max={} distance={}",
        term,
        word,
        max,
        distance
    );

    // INVARIANT 2: length difference is a lower bound
    assert!(term.chars().count().abs_diff(word.chars().count()) <= distance);

    // INVARIANT 3: symmetric
    assert_eq!(distance, levenshtein(&word, &term));

    // INVARIANT 4: a term always matches itself, within its own budget
    let matcher = WordMatcher::new(&folio::clean_word(&term));
    assert!(matcher.matches_cleaned(matcher.term()), "{:?} must match itself", matcher.term());
    assert_eq!(matcher.max_edits(), max_edits(matcher.term().chars().count()));
});
