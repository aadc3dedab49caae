//! Liveness / readiness probe.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// Health routes mounted at the application root (not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health
///
/// Reports process liveness and database connectivity.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let database = match upkeep_db::health_check(&state.pool).await {
        Ok(()) => "ok",
        Err(_) => "unavailable",
    };
    Json(json!({ "status": "ok", "database": database }))
}
