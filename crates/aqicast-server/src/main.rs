//! Aqicast — AQI forecast HTTP server.

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod routes;
mod state;

use aqicast_core::{AqicastConfig, BackendCapabilities};
use aqicast_runtime::PredictionOrchestrator;
use aqicast_weather::OpenWeatherProvider;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AqicastConfig::from_env();

    // Load the predictive model once; inference is optional and the
    // pipeline degrades to breakpoint aggregation without it.
    let model = aqicast_infer::load_model(&config.model_dir);

    let capabilities = BackendCapabilities::resolve(&config, model.is_available());
    info!(
        "Capabilities: model_loaded={}, weather_fetch={}",
        capabilities.model_loaded, capabilities.weather_fetch
    );

    let api_key = config.openweather_api_key.clone().unwrap_or_default();
    if api_key.is_empty() {
        warn!("OPENWEATHER_API_KEY not set; lat/lon requests will fail upstream");
    }
    let weather = Arc::new(OpenWeatherProvider::new(api_key, config.weather_timeout_secs)?);

    let orchestrator = PredictionOrchestrator::new(model, weather, config.default_days);

    let port = config.port;
    let state = Arc::new(AppState {
        config,
        capabilities,
        orchestrator,
    });

    let app = routes::build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Aqicast server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
