//! Aqicast Weather — resolves a base reading from an upstream provider.
//!
//! The orchestrator only sees the `WeatherProvider` trait; the OpenWeather
//! client is one implementation. A fetch failure is a hard request error —
//! there is no retry and no default reading.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use chrono::{Timelike, Utc};
use serde::Deserialize;
use tracing::{debug, error};

use aqicast_core::{Error, Pollutant, PollutantReading, Result};

/// Boxed future type so the provider trait stays dyn-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Source of point-in-time pollutant readings for a coordinate.
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current reading at `(lat, lon)`. One atomic upstream call;
    /// any failure aborts the whole request.
    fn fetch(&self, lat: f64, lon: f64) -> BoxFuture<'_, Result<PollutantReading>>;
}

const AIR_POLLUTION_URL: &str = "https://api.openweathermap.org/data/2.5/air_pollution";

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    components: Components,
}

#[derive(Debug, Default, Deserialize)]
struct Components {
    #[serde(default)]
    pm2_5: f64,
    #[serde(default)]
    pm10: f64,
    #[serde(default)]
    no: f64,
    #[serde(default)]
    no2: f64,
    #[serde(default)]
    nh3: f64,
    #[serde(default)]
    co: f64,
    #[serde(default)]
    so2: f64,
    #[serde(default)]
    o3: f64,
}

/// OpenWeather air-pollution API client.
pub struct OpenWeatherProvider {
    client: reqwest::Client,
    api_key: String,
}

impl OpenWeatherProvider {
    pub fn new(api_key: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    async fn fetch_inner(&self, lat: f64, lon: f64) -> Result<PollutantReading> {
        debug!("Fetching air pollution for lat={}, lon={}", lat, lon);

        let response = self
            .client
            .get(AIR_POLLUTION_URL)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| Error::UpstreamFetch(format!("air pollution request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| Error::UpstreamFetch(format!("air pollution API error: {}", e)))?;

        let body: AirPollutionResponse = response
            .json()
            .await
            .map_err(|e| Error::UpstreamFetch(format!("malformed air pollution response: {}", e)))?;

        let entry = body
            .list
            .into_iter()
            .next()
            .ok_or_else(|| Error::UpstreamFetch("air pollution response had no entries".into()))?;

        reading_from_components(&entry.components)
    }
}

impl WeatherProvider for OpenWeatherProvider {
    fn fetch(&self, lat: f64, lon: f64) -> BoxFuture<'_, Result<PollutantReading>> {
        Box::pin(async move {
            self.fetch_inner(lat, lon).await.map_err(|e| {
                error!("Upstream weather fetch failed: {}", e);
                e
            })
        })
    }
}

/// Map API components onto a reading stamped with the current UTC time.
///
/// NOx, Benzene and Toluene are not reported by the API and are carried
/// as zero. The constructor enforces the non-negativity invariant, so a
/// malformed upstream value surfaces as a fetch error.
fn reading_from_components(components: &Components) -> Result<PollutantReading> {
    let now = Utc::now();
    let mut concentrations = BTreeMap::new();
    concentrations.insert(Pollutant::Pm25, components.pm2_5);
    concentrations.insert(Pollutant::Pm10, components.pm10);
    concentrations.insert(Pollutant::No, components.no);
    concentrations.insert(Pollutant::No2, components.no2);
    concentrations.insert(Pollutant::Nox, 0.0);
    concentrations.insert(Pollutant::Nh3, components.nh3);
    concentrations.insert(Pollutant::Co, components.co);
    concentrations.insert(Pollutant::So2, components.so2);
    concentrations.insert(Pollutant::O3, components.o3);
    concentrations.insert(Pollutant::Benzene, 0.0);
    concentrations.insert(Pollutant::Toluene, 0.0);
    PollutantReading::new(now.date_naive(), now.hour(), concentrations)
        .map_err(|e| Error::UpstreamFetch(format!("invalid upstream reading: {}", e)))
}
