// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory substring and fuzzy search over a single text corpus.
//!
//! Load a document once, query it forever. The corpus is indexed at startup
//! (word list, cleaned word list, SA-IS suffix array over the case-folded
//! text) and never changes afterwards, so any number of threads can search
//! it at once without locks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  corpus/    │────▶│   index/     │     │   fuzzy/    │
//! │ (Corpus,    │     │ (sais,       │     │ (levenshtein│
//! │  load)      │     │  lookup)     │     │  WordMatcher│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     search/                          │
//! │  (Searcher: search_exact, search_fuzzy, windows,     │
//! │   per-term caps, multi-term shuffle)                 │
//! └─────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  server/ (axum: GET /search, static assets)          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use folio::{Corpus, Searcher};
//!
//! let searcher = Searcher::new(Corpus::load("completeworks.txt")?);
//!
//! let snippets = searcher.search_exact(&["to be or not"]);
//! let typos = searcher.search_fuzzy(&["hamlet", "ophelia"]);
//! ```

pub mod corpus;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod search;
pub mod server;
pub mod util;

// Re-exports for public API
pub use corpus::{Corpus, CorpusStats};
pub use error::{CorpusError, CorpusResult};
pub use fuzzy::{levenshtein, levenshtein_within, max_edits, WordMatcher};
pub use index::{is_suffix_array_sorted, sais, SubstringIndex};
pub use search::{Query, SearchMode, SearchOptions, Searcher};
pub use util::{clean_word, fold_case};
