//! Aqicast Infer — predictive model boundary and feature construction.
//!
//! Provides the `AqiModel` trait for refining forecast rows into AQI
//! predictions. When the `onnx` feature is enabled and a model artifact is
//! present, `OnnxModel` serves the forward pass. Without it, `DisabledModel`
//! is used and the orchestrator computes every row from breakpoint
//! aggregation instead.

pub mod features;
pub mod model;
pub mod onnx_model;

pub use features::{build_feature_matrix, FEATURE_COLUMNS};
pub use model::{AqiModel, DisabledModel};

#[cfg(feature = "onnx")]
pub use onnx_model::OnnxModel;

use std::path::Path;
use std::sync::Arc;

/// Load the best available model for the given artifact directory.
///
/// Tries ONNX first (if the feature is enabled and the artifact is
/// present), falls back to `DisabledModel`.
pub fn load_model(model_dir: &Path) -> Arc<dyn AqiModel> {
    #[cfg(feature = "onnx")]
    {
        match OnnxModel::load(model_dir) {
            Ok(model) => {
                tracing::info!("Using ONNX model for AQI inference");
                return Arc::new(model);
            }
            Err(e) => {
                tracing::warn!("ONNX model unavailable: {}. Falling back to aggregation.", e);
            }
        }
    }

    #[cfg(not(feature = "onnx"))]
    {
        let _ = model_dir;
        tracing::info!("ONNX feature disabled. Using aggregation-only predictions.");
    }

    Arc::new(DisabledModel)
}
