// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request failures and how they are rendered.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::params::ValidationError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),
    #[error("failed to encode results: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("search task failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(err) => {
                tracing::warn!(error = %err, "rejected search request");
                (StatusCode::BAD_REQUEST, "missing search query in URL params").into_response()
            }
            ApiError::Encoding(err) => {
                tracing::error!(error = %err, "encoding failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "encoding failure").into_response()
            }
            ApiError::Worker(err) => {
                tracing::error!(error = %err, "search task failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "search failure").into_response()
            }
        }
    }
}
