// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading: one text file in, one frozen search structure out.
//!
//! Loading does all the work up front so queries only read:
//! - the raw text, kept verbatim for snippets
//! - word spans (whitespace-delimited, document order, original case)
//! - cleaned words (punctuation stripped, lowercased) for the fuzzy scan
//! - a suffix array over the case-folded text for substring lookup
//!
//! Nothing is mutated after construction. A `Corpus` is `Send + Sync` and can
//! be shared across request handlers behind an `Arc` with no locking.

use std::collections::HashSet;
use std::fs;
use std::ops::Range;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::error::{CorpusError, CorpusResult};
use crate::index::SubstringIndex;
use crate::util::{clean_word, fold_case};

/// The loaded document plus everything derived from it.
#[derive(Debug, Clone)]
pub struct Corpus {
    full_text: String,
    /// Byte ranges into `full_text`, one per word
    spans: Vec<Range<usize>>,
    /// `cleaned[i]` is `clean_word(word(i))`
    cleaned: Vec<String>,
    index: SubstringIndex,
}

/// Summary numbers for `folio inspect` and startup logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub bytes: usize,
    pub chars: usize,
    pub words: usize,
    pub distinct_words: usize,
    pub suffixes: usize,
}

impl Corpus {
    /// Read `path` fully and index it.
    pub fn load(path: impl AsRef<Path>) -> CorpusResult<Self> {
        let path = path.as_ref();
        let started = Instant::now();

        let bytes = fs::read(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| CorpusError::InvalidUtf8 {
            path: path.to_path_buf(),
            source,
        })?;

        let corpus = Self::from_text(text);
        tracing::info!(
            path = %path.display(),
            bytes = corpus.full_text.len(),
            words = corpus.spans.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "corpus loaded"
        );
        Ok(corpus)
    }

    /// Index an in-memory document.
    pub fn from_text(text: impl Into<String>) -> Self {
        let full_text = text.into();
        let spans = word_spans(&full_text);
        let cleaned = spans
            .iter()
            .map(|span| clean_word(&full_text[span.clone()]))
            .collect();
        let index = SubstringIndex::new(fold_case(&full_text));

        Self {
            full_text,
            spans,
            cleaned,
            index,
        }
    }

    /// The document exactly as loaded.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// Number of whitespace-delimited words.
    pub fn word_count(&self) -> usize {
        self.spans.len()
    }

    /// The `i`-th word in document order, original case and punctuation.
    pub fn word(&self, i: usize) -> Option<&str> {
        self.spans.get(i).map(|span| &self.full_text[span.clone()])
    }

    /// All words in document order.
    pub fn words(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.spans.iter().map(|span| &self.full_text[span.clone()])
    }

    /// Words with punctuation stripped and lowercased, aligned with [`Corpus::words`].
    pub fn cleaned_words(&self) -> &[String] {
        &self.cleaned
    }

    /// Suffix array over the case-folded text.
    pub fn index(&self) -> &SubstringIndex {
        &self.index
    }

    /// Words `range` joined by single spaces.
    pub(crate) fn join_words(&self, range: Range<usize>) -> String {
        let mut out = String::new();
        for span in &self.spans[range] {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&self.full_text[span.clone()]);
        }
        out
    }

    pub fn stats(&self) -> CorpusStats {
        let distinct: HashSet<&str> = self
            .cleaned
            .iter()
            .map(String::as_str)
            .filter(|w| !w.is_empty())
            .collect();

        CorpusStats {
            bytes: self.full_text.len(),
            chars: self.full_text.chars().count(),
            words: self.spans.len(),
            distinct_words: distinct.len(),
            suffixes: self.index.len(),
        }
    }
}

/// Byte spans of whitespace-delimited words, same rules as `str::split_whitespace`.
fn word_spans(text: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                spans.push(s..i);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        spans.push(s..text.len());
    }

    spans
}
