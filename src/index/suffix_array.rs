// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Substring index over a single case-folded text.
//!
//! Every suffix of the text gets one slot in the suffix array, sorted
//! lexicographically by bytes. All suffixes sharing a prefix sit in one
//! contiguous run, so "where does this pattern occur?" is two binary
//! searches: one for the first suffix `>= pattern`, one for the first suffix
//! that no longer starts with it. The run between them is the answer.

use super::sais::sais;

/// Suffix array plus the text it was built over.
///
/// The text is owned by the index so lookups never need a second reference.
/// Offsets returned by [`SubstringIndex::lookup`] are byte offsets into that
/// text.
#[derive(Debug, Clone)]
pub struct SubstringIndex {
    text: Vec<u8>,
    suffix_array: Vec<usize>,
}

impl SubstringIndex {
    /// Build the index in O(n) with SA-IS.
    pub fn new(text: impl Into<Vec<u8>>) -> Self {
        let text = text.into();
        let suffix_array = sais(&text);
        Self { text, suffix_array }
    }

    /// All starting offsets where `pattern` occurs, in suffix-array order.
    ///
    /// An empty pattern matches every offset. The returned slice borrows the
    /// index, so callers can truncate it without copying.
    pub fn lookup(&self, pattern: &[u8]) -> &[usize] {
        let sa = &self.suffix_array;

        // First suffix >= pattern
        let start = sa.partition_point(|&pos| &self.text[pos..] < pattern);

        // First suffix past start that no longer has pattern as a prefix
        let len = sa[start..].partition_point(|&pos| self.text[pos..].starts_with(pattern));

        &sa[start..start + len]
    }

    /// Number of occurrences of `pattern`.
    pub fn count(&self, pattern: &[u8]) -> usize {
        self.lookup(pattern).len()
    }

    /// The indexed text.
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// Raw suffix array; `suffix_array()[i]` is the offset of the i-th smallest suffix.
    pub fn suffix_array(&self) -> &[usize] {
        &self.suffix_array
    }

    pub fn len(&self) -> usize {
        self.suffix_array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffix_array.is_empty()
    }
}

/// Check the suffix array is sorted. Used by tests and `folio inspect`.
pub fn is_suffix_array_sorted(index: &SubstringIndex) -> bool {
    let text = index.text();
    index
        .suffix_array()
        .windows(2)
        .all(|pair| text[pair[0]..] <= text[pair[1]..])
}
