// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structure that makes substring search fast.
//!
//! One suffix array over the whole case-folded corpus, built once with SA-IS
//! in linear time. Any substring query is then two binary searches, no matter
//! where in a word the pattern starts.

mod sais;
mod suffix_array;

pub use sais::sais;
pub use suffix_array::*;
