// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//! On a real corpus most words die at that check before anything is allocated.

/// Levenshtein distance between `a` and `b`, counted in characters.
///
/// Single-row DP: one working array of length `len(a) + 1`, swept left to
/// right once per character of `b`. Unit cost for insert, delete and
/// substitute.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let mut column: Vec<usize> = (0..=a.len()).collect();

    for (x, bc) in b.chars().enumerate() {
        column[0] = x + 1;
        let mut last_diag = x;

        for y in 1..=a.len() {
            let old_diag = column[y];
            let cost = usize::from(a[y - 1] != bc);
            column[y] = (column[y] + 1).min(column[y - 1] + 1).min(last_diag + cost);
            last_diag = old_diag;
        }
    }

    column[a.len()]
}

/// Are these strings within `max` edits of each other?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return false immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
///
/// Both are sound: a row minimum never decreases in later rows, and the
/// length difference never exceeds the distance. So this always equals
/// `levenshtein(a, b) <= max`.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}
