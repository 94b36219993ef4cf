//! Prediction orchestrator.
//!
//! Drives one request through a fixed forward-only sequence: resolve the
//! base reading, synthesize the forecast, attempt model inference, fall
//! back to breakpoint aggregation per row, assemble the response. Model
//! failures degrade; input and upstream failures abort.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use aqicast_aqi::overall_aqi;
use aqicast_core::{Error, Pollutant, PollutantReading, Result};
use aqicast_forecast::{synthesize, ForecastRow};
use aqicast_infer::{build_feature_matrix, AqiModel};
use aqicast_weather::WeatherProvider;

use crate::types::{DayPrediction, PredictRequest, PredictResponse};

/// Coordinates the prediction pipeline. Both collaborators are injected at
/// construction; there is no process-global model state.
pub struct PredictionOrchestrator {
    model: Arc<dyn AqiModel>,
    weather: Arc<dyn WeatherProvider>,
    default_days: usize,
}

impl PredictionOrchestrator {
    pub fn new(
        model: Arc<dyn AqiModel>,
        weather: Arc<dyn WeatherProvider>,
        default_days: usize,
    ) -> Self {
        Self {
            model,
            weather,
            default_days,
        }
    }

    /// Run one request to completion.
    ///
    /// Fails only on unusable input or an upstream fetch failure; model
    /// trouble never surfaces to the caller.
    pub async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse> {
        let base = self.resolve_input(request).await?;

        let days = request.days.unwrap_or(self.default_days);
        let rows = synthesize(&base, days);

        let model_outputs = self.attempt_inference(&rows);

        let predictions = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let pm25 = row.reading.concentration(Pollutant::Pm25);
                let pm10 = row.reading.concentration(Pollutant::Pm10);
                let predicted_aqi = model_outputs
                    .as_ref()
                    .and_then(|outputs| outputs.get(i).copied())
                    .map(f64::from)
                    .or_else(|| overall_aqi(Some(pm25), Some(pm10)));
                DayPrediction {
                    date: row.reading.date.format("%Y-%m-%d").to_string(),
                    predicted_aqi,
                    pm25,
                    pm10,
                    details: json!({}),
                }
            })
            .collect();

        Ok(PredictResponse { predictions })
    }

    /// Resolve the base reading: caller-supplied input verbatim, else one
    /// upstream fetch, else an input error. Exactly one path runs.
    async fn resolve_input(&self, request: &PredictRequest) -> Result<PollutantReading> {
        if let Some(map) = &request.base_input {
            return PollutantReading::from_flat(map);
        }
        if let (Some(lat), Some(lon)) = (request.lat, request.lon) {
            return self.weather.fetch(lat, lon).await;
        }
        Err(Error::InvalidInput("Provide lat/lon or base_input".into()))
    }

    /// Run the model over the whole forecast batch. `None` means "no model
    /// predictions for this request": model absent, empty batch, or a
    /// recovered inference failure.
    fn attempt_inference(&self, rows: &[ForecastRow]) -> Option<Vec<f32>> {
        if rows.is_empty() || !self.model.is_available() {
            return None;
        }
        let features = build_feature_matrix(rows);
        match self.model.predict(features.view()) {
            Ok(outputs) => {
                debug!("Model produced {} outputs for {} rows", outputs.len(), rows.len());
                Some(outputs)
            }
            Err(e) => {
                warn!("Model inference failed, falling back to aggregation: {}", e);
                None
            }
        }
    }
}
