// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word matcher: is this corpus word a plausible typo of the term?
//!
//! Two checks, cheapest first:
//! 1. Length prefilter: cleaned word length within [`MAX_LENGTH_DELTA`] of the term.
//! 2. Bounded edit distance within [`max_edits`] for the term's length.
//!
//! Short terms get no slack at all. A one-letter typo in "to" is a different
//! word, not a typo.

use super::levenshtein::levenshtein_within;
use crate::util::clean_word;

/// Words whose cleaned length differs from the term by more than this are
/// rejected before any distance is computed.
pub const MAX_LENGTH_DELTA: usize = 2;

/// Edit budget for a term of `term_len` characters.
///
/// | term length | max edits |
/// |-------------|-----------|
/// | 0..=2       | 0         |
/// | 3..=6       | 1         |
/// | 7..=8       | 2         |
/// | 9+          | 3         |
pub fn max_edits(term_len: usize) -> usize {
    match term_len {
        0..=2 => 0,
        3..=6 => 1,
        7..=8 => 2,
        _ => 3,
    }
}

/// A lowercased term with its edit budget precomputed.
///
/// Built once per term, then run against every word in the corpus.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    term: String,
    term_len: usize,
    max_edits: usize,
}

impl WordMatcher {
    pub fn new(term: &str) -> Self {
        let term = term.to_lowercase();
        let term_len = term.chars().count();
        Self {
            max_edits: max_edits(term_len),
            term,
            term_len,
        }
    }

    /// The lowercased term.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn max_edits(&self) -> usize {
        self.max_edits
    }

    /// Does the raw corpus word match? Punctuation is stripped and case
    /// folded before comparison.
    pub fn matches(&self, word: &str) -> bool {
        self.matches_cleaned(&clean_word(word))
    }

    /// Same as [`WordMatcher::matches`] for a word that is already cleaned.
    pub fn matches_cleaned(&self, cleaned: &str) -> bool {
        // Length prefilter runs before the distance check
        if cleaned.chars().count().abs_diff(self.term_len) > MAX_LENGTH_DELTA {
            return false;
        }
        levenshtein_within(&self.term, cleaned, self.max_edits)
    }
}
