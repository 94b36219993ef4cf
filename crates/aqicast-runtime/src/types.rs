//! Request and response types for the prediction pipeline.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A prediction request. Exactly one of `base_input` or `(lat, lon)` must
/// be usable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictRequest {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub days: Option<usize>,
    /// Flat pollutant map plus Year/Month/Day and optional Hour.
    pub base_input: Option<serde_json::Map<String, Value>>,
}

/// One forecast day in the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPrediction {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Predicted index; `null` when no pollutant had a calibrated value.
    pub predicted_aqi: Option<f64>,
    pub pm25: f64,
    pub pm10: f64,
    /// Auxiliary per-day data; currently always empty.
    pub details: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predictions: Vec<DayPrediction>,
}
