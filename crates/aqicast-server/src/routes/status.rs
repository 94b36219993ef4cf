//! Health and status routes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(get_health))
        .route("/status", get(get_status))
}

/// GET /health — liveness probe.
async fn get_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "aqicast",
    }))
}

/// GET /status — backend capabilities resolved at startup.
async fn get_status(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "aqicast",
        "capabilities": state.capabilities,
        "defaultDays": state.config.default_days,
        "port": state.config.port,
    }))
}
