// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while loading a corpus.
//!
//! Searching never fails, so this is the only error type the engine has.
//! Every variant is fatal at startup: there is no degraded mode without a
//! loaded corpus.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for corpus loading
pub type CorpusResult<T> = Result<T, CorpusError>;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read corpus {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corpus {path} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl CorpusError {
    /// Path of the corpus that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            CorpusError::Io { path, .. } | CorpusError::InvalidUtf8 { path, .. } => path,
        }
    }
}
