// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `/search` query parameters and their validation.
//!
//! All three parameters are required. The two flags are never defaulted: a
//! client that forgets one gets a 400, not a guess.

use serde::Deserialize;
use thiserror::Error;

use crate::search::Query;

/// Raw parameters as they arrive in the URL.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub multi: Option<String>,
    pub fuzzy: Option<String>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing search query")]
    MissingQuery,
    #[error("missing `{0}` flag")]
    MissingFlag(&'static str),
}

impl SearchParams {
    /// Validate and turn the parameters into an engine query.
    pub fn into_query(self) -> Result<Query, ValidationError> {
        let q = non_empty(self.q).ok_or(ValidationError::MissingQuery)?;
        let multi = non_empty(self.multi).ok_or(ValidationError::MissingFlag("multi"))?;
        let fuzzy = non_empty(self.fuzzy).ok_or(ValidationError::MissingFlag("fuzzy"))?;

        Ok(Query::new(&q, parse_flag(&multi), parse_flag(&fuzzy)))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Boolean flag with the spellings clients have always sent.
///
/// `1 t T TRUE true True` are true. Anything else, including garbage, is
/// false.
pub fn parse_flag(value: &str) -> bool {
    matches!(value, "1" | "t" | "T" | "TRUE" | "true" | "True")
}
