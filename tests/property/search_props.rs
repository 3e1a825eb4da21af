//! End-to-end search properties on random prose.

use super::common::{naive_find_all, sorted};
use folio::search::exact::match_offsets;
use folio::{Corpus, SearchOptions, Searcher};
use proptest::prelude::*;

fn prose() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C ,.\n]{0,300}").unwrap()
}

fn term() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C]{1,3}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_exact_offsets_are_case_insensitive_matches(text in prose(), t in term()) {
        let corpus = Corpus::from_text(text.clone());
        let expected = naive_find_all(
            text.to_lowercase().as_bytes(),
            t.to_lowercase().as_bytes(),
        );
        prop_assert_eq!(match_offsets(&corpus, &t, usize::MAX), expected);
    }

    #[test]
    fn prop_cap_is_respected(text in prose(), t in term(), cap in 0usize..10) {
        let options = SearchOptions { max_matches: cap, ..SearchOptions::default() };
        let searcher = Searcher::with_options(Corpus::from_text(text), options);
        prop_assert!(searcher.search_exact(&[&t]).len() <= cap);
        prop_assert!(searcher.search_fuzzy(&[&t]).len() <= cap);
    }

    #[test]
    fn prop_snippets_are_substrings(text in prose(), t in term()) {
        let searcher = Searcher::new(Corpus::from_text(text.clone()));
        for snippet in searcher.search_exact(&[&t]) {
            prop_assert!(text.contains(&snippet));
        }
    }

    #[test]
    fn prop_multi_is_union(text in prose(), a in term(), b in term()) {
        let searcher = Searcher::new(Corpus::from_text(text));
        let mut expected = searcher.search_exact(&[&a]);
        expected.extend(searcher.search_exact(&[&b]));
        prop_assert_eq!(sorted(searcher.search_exact(&[&a, &b])), sorted(expected));
    }
}
