//! Request handlers

mod commerce;
mod pages;
mod support;
mod sync;

pub use commerce::*;
pub use pages::*;
pub use support::*;
pub use sync::*;

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Fallback for paths without a view, including the inert account links
pub async fn not_found(uri: axum::http::Uri) -> (StatusCode, &'static str) {
    tracing::debug!(path = %uri.path(), "No view for path");
    (StatusCode::NOT_FOUND, "Not found")
}
