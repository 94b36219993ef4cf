//! Shared application state.

use aqicast_core::{AqicastConfig, BackendCapabilities};
use aqicast_runtime::PredictionOrchestrator;

/// Shared application state accessible from all route handlers.
///
/// Everything here is read-only after startup; concurrent requests share it
/// behind an `Arc`.
pub struct AppState {
    pub config: AqicastConfig,
    pub capabilities: BackendCapabilities,
    pub orchestrator: PredictionOrchestrator,
}
