//! Observability HTTP Routes
//!
//! Health check and query counters.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dataset_loaded: bool,
    pub rows: usize,
    /// RFC 3339 load time, absent when no dataset is loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<String>,
}

/// `/health` and `/metrics`
pub fn observability_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Reports `ok` even without data so that the process stays reachable; the
/// `dataset_loaded` flag tells the two situations apart.
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let table = state.table();
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset_loaded: table.is_some(),
        rows: table.map_or(0, |t| t.len()),
        loaded_at: table.map(|t| t.loaded_at().to_rfc3339()),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, Json(state.metrics().snapshot()))
}
