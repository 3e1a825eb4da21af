//! Suffix array property tests.
//!
//! - Sortedness: suffixes are in lexicographic order
//! - Completeness: every position appears exactly once
//! - Lookup: the matching range holds exactly the occurrences of the pattern

use super::common::{naive_find_all, naive_suffix_array};
use folio::{is_suffix_array_sorted, sais, SubstringIndex};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small alphabets produce long repeats, which is where SA-IS recurses.
fn repetitive_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 0..200)
}

fn any_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..200)
}

fn prose() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z ]{0,120}").unwrap()
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_sais_matches_naive_sort(text in repetitive_text()) {
        prop_assert_eq!(sais(&text), naive_suffix_array(&text));
    }

    #[test]
    fn prop_sais_handles_arbitrary_bytes(text in any_bytes()) {
        prop_assert_eq!(sais(&text), naive_suffix_array(&text));
    }

    #[test]
    fn prop_suffix_array_is_permutation(text in any_bytes()) {
        let mut sa = sais(&text);
        sa.sort_unstable();
        prop_assert_eq!(sa, (0..text.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_index_is_sorted(text in prose()) {
        let index = SubstringIndex::new(text.into_bytes());
        prop_assert!(is_suffix_array_sorted(&index));
    }
}

// ============================================================================
// LOOKUP
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_lookup_matches_naive_find(
        text in repetitive_text(),
        pattern in prop::collection::vec(prop::sample::select(vec![b'a', b'b', b'c']), 1..5),
    ) {
        let index = SubstringIndex::new(text.clone());
        let mut found = index.lookup(&pattern).to_vec();
        found.sort_unstable();
        prop_assert_eq!(found, naive_find_all(&text, &pattern));
    }

    #[test]
    fn prop_every_substring_is_found(
        text in prose(),
        at in any::<prop::sample::Index>(),
        len in 1usize..10,
    ) {
        prop_assume!(!text.is_empty());
        let start = at.index(text.len());
        let end = (start + len).min(text.len());
        let index = SubstringIndex::new(text.as_bytes());
        prop_assert!(index.lookup(&text.as_bytes()[start..end]).contains(&start));
    }
}
