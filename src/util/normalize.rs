// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Normalization for search: case folding and punctuation stripping.

/// Lowercase `value` without changing its byte layout.
///
/// Each character is replaced by its lowercase form only when that form is a
/// single character with the same UTF-8 length. Everything else is kept as
/// is. The output therefore has exactly the same byte length and character
/// boundaries as the input, which lets the substring index hand back offsets
/// that slice the original text directly.
///
/// - "Hamlet" → "hamlet"
/// - "ÉCOLE" → "école"
/// - "İ" stays "İ" (its lowercase is two characters)
pub fn fold_case(value: &str) -> String {
    if value.is_ascii() {
        return value.to_ascii_lowercase();
    }

    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l.len_utf8() == c.len_utf8() => out.push(l),
            _ => out.push(c),
        }
    }
    out
}

/// Strip every non-alphanumeric character and lowercase the rest.
///
/// This is how a corpus word is compared against a fuzzy term:
/// "Romeo," → "romeo", "o'er" → "oer", "--" → "".
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
