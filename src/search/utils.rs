// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.
//!
//! Query splitting, per-term fan-out and the multi-term shuffle. Exact and
//! fuzzy search differ only in what they do for one term; everything around
//! that lives here.

use rand::seq::SliceRandom;
use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Split a raw query into terms.
///
/// With `multi` the query is split on whitespace; otherwise the whole string
/// is a single term, spaces included.
///
/// # Example
///
/// ```ignore
/// assert_eq!(parse_terms("to be", true), vec!["to", "be"]);
/// assert_eq!(parse_terms("to be", false), vec!["to be"]);
/// ```
pub fn parse_terms(raw: &str, multi: bool) -> Vec<String> {
    if multi {
        raw.split_whitespace().map(str::to_string).collect()
    } else {
        vec![raw.to_string()]
    }
}

/// Run `per_term` over every term and concatenate the snippets in term order.
///
/// Empty terms contribute nothing. With the `parallel` feature, terms run on
/// the rayon pool; order of the concatenation is unchanged.
pub(crate) fn collect_per_term<T, F>(terms: &[T], per_term: F) -> Vec<String>
where
    T: AsRef<str> + Sync,
    F: Fn(&str) -> Vec<String> + Sync + Send,
{
    let run = |term: &T| -> Vec<String> {
        let term = term.as_ref();
        if term.is_empty() {
            Vec::new()
        } else {
            per_term(term)
        }
    };

    #[cfg(feature = "parallel")]
    let per_term_results: Vec<Vec<String>> = if terms.len() > 1 {
        terms.par_iter().map(run).collect()
    } else {
        terms.iter().map(run).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let per_term_results: Vec<Vec<String>> = terms.iter().map(run).collect();

    per_term_results.into_iter().flatten().collect()
}

/// Shuffle `results` uniformly when the query had more than one term.
///
/// Single-term results keep their order.
pub fn shuffle_multi<R: Rng + ?Sized>(results: &mut [String], term_count: usize, rng: &mut R) {
    if term_count > 1 {
        results.shuffle(rng);
    }
}
