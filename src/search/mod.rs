// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: where the rubber meets the road.
//!
//! Two modes over one frozen [`Corpus`]:
//! - **Exact**: case-insensitive substring lookup in the suffix array, each
//!   hit returned as a window of raw text around it.
//! - **Fuzzy**: scan of the cleaned word list with a bounded Levenshtein
//!   check, each hit returned as a window of surrounding words.
//!
//! Terms are independent. A multi-term query is the concatenation of the
//! per-term results, shuffled so no single term dominates the top of the
//! list. Single-term results keep document order.

pub mod exact;
pub mod fuzzy;
pub mod utils;
pub mod window;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use utils::{collect_per_term, parse_terms, shuffle_multi};

/// Per-term cap on matches, in both modes.
pub const MAX_MATCHES: usize = 500;

/// Bytes of context on each side of an exact match.
pub const CONTEXT_BYTES: usize = 250;

/// Words of context on each side of a fuzzy match.
pub const CONTEXT_WORDS: usize = 35;

/// Limits applied to every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub max_matches: usize,
    pub context_bytes: usize,
    pub context_words: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_matches: MAX_MATCHES,
            context_bytes: CONTEXT_BYTES,
            context_words: CONTEXT_WORDS,
        }
    }
}

/// How terms are matched against the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Exact,
    Fuzzy,
}

/// A validated query: one or more terms and a mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub terms: Vec<String>,
    pub mode: SearchMode,
}

impl Query {
    /// Build a query from the raw string and the two mode flags.
    pub fn new(raw: &str, multi: bool, fuzzy: bool) -> Self {
        Self {
            terms: parse_terms(raw, multi),
            mode: if fuzzy {
                SearchMode::Fuzzy
            } else {
                SearchMode::Exact
            },
        }
    }
}

/// The search engine: a corpus plus the limits to query it with.
///
/// Read-only after construction. Share it with `Arc<Searcher>`.
#[derive(Debug, Clone)]
pub struct Searcher {
    corpus: Corpus,
    options: SearchOptions,
}

impl Searcher {
    pub fn new(corpus: Corpus) -> Self {
        Self::with_options(corpus, SearchOptions::default())
    }

    pub fn with_options(corpus: Corpus, options: SearchOptions) -> Self {
        Self { corpus, options }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Case-insensitive substring search.
    ///
    /// Up to `max_matches` snippets per term. Shuffled when more than one
    /// term is given.
    pub fn search_exact<T: AsRef<str> + Sync>(&self, terms: &[T]) -> Vec<String> {
        self.run(SearchMode::Exact, terms)
    }

    /// Approximate word search.
    ///
    /// Up to `max_matches` snippets per term, first matches in document
    /// order. Shuffled when more than one term is given.
    pub fn search_fuzzy<T: AsRef<str> + Sync>(&self, terms: &[T]) -> Vec<String> {
        self.run(SearchMode::Fuzzy, terms)
    }

    /// Dispatch on the query's mode.
    pub fn search(&self, query: &Query) -> Vec<String> {
        self.run(query.mode, &query.terms)
    }

    fn run<T: AsRef<str> + Sync>(&self, mode: SearchMode, terms: &[T]) -> Vec<String> {
        let started = Instant::now();
        let corpus = &self.corpus;
        let options = &self.options;

        let mut results = match mode {
            SearchMode::Exact => {
                collect_per_term(terms, |term| exact::term_snippets(corpus, term, options))
            }
            SearchMode::Fuzzy => {
                collect_per_term(terms, |term| fuzzy::term_snippets(corpus, term, options))
            }
        };
        shuffle_multi(&mut results, terms.len(), &mut rand::thread_rng());

        tracing::debug!(
            ?mode,
            terms = terms.len(),
            results = results.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "search"
        );
        results
    }
}
