// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport: one search endpoint and a static file tree.
//!
//! ```text
//! GET /search?q=<query>&multi=<bool>&fuzzy=<bool>   → JSON array of snippets
//! GET /*                                            → files under the static dir
//! ```
//!
//! Searches are CPU-bound, so they run on tokio's blocking pool and never
//! stall the reactor. The searcher is shared as `Arc<Searcher>`; it is
//! immutable, so no locking is involved.

mod error;
mod params;

use std::path::Path;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::search::Searcher;

pub use error::ApiError;
pub use params::{parse_flag, SearchParams, ValidationError};

/// Build the application router.
pub fn router(searcher: Arc<Searcher>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .fallback_service(ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(searcher)
}

/// Serve `app` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}

async fn handle_search(
    State(searcher): State<Arc<Searcher>>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ApiError> {
    let query = params.into_query()?;

    let results = tokio::task::spawn_blocking(move || searcher.search(&query)).await?;
    let body = serde_json::to_vec(&results)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
