//! Aqicast Runtime — the prediction orchestrator and its wire types.

pub mod orchestrator;
pub mod types;

pub use orchestrator::PredictionOrchestrator;
pub use types::{DayPrediction, PredictRequest, PredictResponse};
