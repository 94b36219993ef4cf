//! Aqicast Core — shared pollutant types, configuration, error taxonomy.

pub mod capabilities;
pub mod config;
pub mod error;
pub mod pollutant;

pub use capabilities::BackendCapabilities;
pub use config::AqicastConfig;
pub use error::{Error, Result};
pub use pollutant::{Pollutant, PollutantReading, DEFAULT_HOUR};
