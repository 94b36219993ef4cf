//! Configuration resolved once at process startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level Aqicast configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AqicastConfig {
    /// HTTP server port.
    pub port: u16,
    /// Directory holding the ONNX model artifact (`model.onnx`).
    pub model_dir: PathBuf,
    /// OpenWeather API key; the weather fetch path is disabled without it.
    #[serde(skip_serializing)]
    pub openweather_api_key: Option<String>,
    /// Forecast horizon used when a request omits `days`.
    pub default_days: usize,
    /// Timeout for the upstream weather fetch, in seconds.
    pub weather_timeout_secs: u64,
}

impl AqicastConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let model_dir = std::env::var("AQICAST_MODEL_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/models"));

        let openweather_api_key = std::env::var("OPENWEATHER_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let weather_timeout_secs = std::env::var("AQICAST_WEATHER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        Self {
            port,
            model_dir,
            openweather_api_key,
            default_days: 10,
            weather_timeout_secs,
        }
    }
}
