//! HTTP route handlers.

pub mod predict;
pub mod status;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Build the main Axum router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(predict::routes())
        .merge(status::routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
