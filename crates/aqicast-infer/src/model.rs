//! Predictive model trait and the disabled fallback.
//!
//! The `AqiModel` trait abstracts over AQI regression backends.
//! Implementations:
//! - `OnnxModel`: ONNX Runtime forward pass (requires the `onnx` feature)
//! - `DisabledModel`: always fails, signalling "no model loaded" so the
//!   orchestrator falls back to deterministic aggregation

use ndarray::ArrayView2;

use aqicast_core::{Error, Result};

/// Trait for predictive AQI backends.
///
/// The forward pass must be side-effect-free and safe to call from
/// concurrent requests.
pub trait AqiModel: Send + Sync {
    /// Run inference over a feature matrix, one output per input row.
    ///
    /// An `Err` here is recoverable by the caller: it means "this batch got
    /// no model predictions", never a request failure.
    fn predict(&self, features: ArrayView2<'_, f32>) -> Result<Vec<f32>>;

    /// Whether a model artifact is actually loaded.
    fn is_available(&self) -> bool;
}

/// Fallback used when no model artifact is present.
pub struct DisabledModel;

impl AqiModel for DisabledModel {
    fn predict(&self, _features: ArrayView2<'_, f32>) -> Result<Vec<f32>> {
        Err(Error::Inference("no model loaded".into()))
    }

    fn is_available(&self) -> bool {
        false
    }
}
