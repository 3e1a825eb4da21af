// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Two pieces here: Levenshtein distance (exact and bounded), and the word
//! matcher that decides whether a corpus word is close enough to a term. The
//! matcher is what the fuzzy search scans the word list with.

mod levenshtein;
mod matcher;

pub use levenshtein::*;
pub use matcher::*;
