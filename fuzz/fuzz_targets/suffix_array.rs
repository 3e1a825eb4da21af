// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for SA-IS construction and lookup.
//!
//! Any byte string, NULs included, must produce a sorted permutation, and
//! every lookup range must hold only real occurrences.

#![no_main]

use arbitrary::Arbitrary;
use folio::{is_suffix_array_sorted, SubstringIndex};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct IndexInput {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fuzz_target!(|input: IndexInput| {
    let text = &input.text[..input.text.len().min(4096)];
    let index = SubstringIndex::new(text);

    // INVARIANT 1: one entry per position, in sorted order
    assert_eq!(index.len(), text.len());
    assert!(is_suffix_array_sorted(&index));

    let mut seen = index.suffix_array().to_vec();
    seen.sort_unstable();
    assert!(seen.iter().copied().eq(0..text.len()));

    // INVARIANT 2: every hit is an occurrence, and none are missed
    if input.pattern.is_empty() {
        return;
    }
    let hits = index.lookup(&input.pattern);
    for &pos in hits {
        assert!(text[pos..].starts_with(&input.pattern));
    }
    let expected = text
        .windows(input.pattern.len())
        .filter(|w| *w == input.pattern.as_slice())
        .count();
    assert_eq!(hits.len(), expected);
});
