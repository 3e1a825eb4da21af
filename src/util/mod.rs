// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by the index and the matchers.
//!
//! Case folding for the substring index (byte-length preserving, so offsets
//! in the folded text line up with the original) and word cleaning for fuzzy
//! matching.

pub mod normalize;

pub use normalize::{clean_word, fold_case};
