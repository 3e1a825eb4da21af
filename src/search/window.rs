// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet windows around a match.
//!
//! Both windows are half-open and clamped the same way: the start never goes
//! below zero and the end never goes past `len - 1`. That end bound means the
//! final byte (or word) of the corpus is never part of a snippet, which is
//! how the service has always behaved.

use std::ops::Range;

/// Bytes `[idx - context, idx + context)` of `text`, clamped to the document.
///
/// Bounds that land inside a multi-byte character are pulled inward to the
/// nearest character boundary, so the result is always valid UTF-8 and never
/// longer than `2 * context` bytes.
pub fn text_window(text: &str, idx: usize, context: usize) -> &str {
    let len = text.len();
    let mut start = idx.saturating_sub(context);
    let mut end = idx.saturating_add(context).min(len.saturating_sub(1));

    while start < len && !text.is_char_boundary(start) {
        start += 1;
    }
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }

    if start >= end {
        return "";
    }
    &text[start..end]
}

/// Word indices `[idx - context, idx + context)`, clamped to `word_count - 1`.
pub fn word_window(word_count: usize, idx: usize, context: usize) -> Range<usize> {
    let start = idx.saturating_sub(context);
    let end = idx.saturating_add(context).min(word_count.saturating_sub(1));
    start..end.max(start)
}
