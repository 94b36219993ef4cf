//! Prediction route.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use aqicast_core::Error;
use aqicast_runtime::PredictRequest;

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/predict", post(predict))
}

/// POST /predict — multi-day AQI forecast from a base reading or
/// coordinates.
///
/// A request either fully succeeds (some days may carry a null index) or
/// fully fails; there are no partial responses.
async fn predict(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PredictRequest>,
) -> Response {
    match state.orchestrator.predict(&request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(Error::InvalidInput(msg)) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": msg})),
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": e.to_string()})),
        )
            .into_response(),
    }
}
