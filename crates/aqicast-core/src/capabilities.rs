//! Backend capability descriptor.
//!
//! Resolved exactly once at startup from configuration and model loading;
//! the rest of the system reads it, never re-probes.

use serde::{Deserialize, Serialize};

use crate::config::AqicastConfig;

/// Which optional backends this process actually has.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BackendCapabilities {
    /// A predictive model artifact was loaded and can serve inference.
    pub model_loaded: bool,
    /// An upstream weather credential is configured, so `lat`/`lon`
    /// requests can be resolved.
    pub weather_fetch: bool,
}

impl BackendCapabilities {
    /// Resolve capabilities from config plus the model-load outcome.
    pub fn resolve(config: &AqicastConfig, model_loaded: bool) -> Self {
        Self {
            model_loaded,
            weather_fetch: config.openweather_api_key.is_some(),
        }
    }
}
