//! Pollutant kinds and point-in-time readings.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value;

use crate::error::{Error, Result};

/// Hour assumed when the caller supplies a reading without one.
pub const DEFAULT_HOUR: u32 = 12;

/// The fixed set of pollutant kinds a reading can carry.
///
/// The declaration order is the canonical feature order: it decides both the
/// noise draw order in the forecast synthesizer and the column ordering of
/// the model feature matrix, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pollutant {
    Pm25,
    Pm10,
    No,
    No2,
    Nox,
    Nh3,
    Co,
    So2,
    O3,
    Benzene,
    Toluene,
}

impl Pollutant {
    /// All pollutant kinds in canonical order.
    pub const ALL: [Pollutant; 11] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No,
        Pollutant::No2,
        Pollutant::Nox,
        Pollutant::Nh3,
        Pollutant::Co,
        Pollutant::So2,
        Pollutant::O3,
        Pollutant::Benzene,
        Pollutant::Toluene,
    ];

    /// Wire name as it appears in `base_input` maps.
    pub fn name(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No => "NO",
            Pollutant::No2 => "NO2",
            Pollutant::Nox => "NOx",
            Pollutant::Nh3 => "NH3",
            Pollutant::Co => "CO",
            Pollutant::So2 => "SO2",
            Pollutant::O3 => "O3",
            Pollutant::Benzene => "Benzene",
            Pollutant::Toluene => "Toluene",
        }
    }
}

impl std::fmt::Display for Pollutant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single point-in-time set of pollutant concentrations.
///
/// Concentrations are non-negative; pollutants absent from the map read as
/// zero. The date is a valid calendar date by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PollutantReading {
    pub date: NaiveDate,
    pub hour: u32,
    concentrations: BTreeMap<Pollutant, f64>,
}

impl PollutantReading {
    /// Create a reading, validating the invariants.
    pub fn new(
        date: NaiveDate,
        hour: u32,
        concentrations: BTreeMap<Pollutant, f64>,
    ) -> Result<Self> {
        if hour > 23 {
            return Err(Error::InvalidInput(format!("Hour out of range: {}", hour)));
        }
        for (pollutant, value) in &concentrations {
            if !value.is_finite() || *value < 0.0 {
                return Err(Error::InvalidInput(format!(
                    "Negative or non-finite concentration for {}: {}",
                    pollutant, value
                )));
            }
        }
        Ok(Self {
            date,
            hour,
            concentrations,
        })
    }

    /// Parse the flat wire form: pollutant names plus Year/Month/Day and an
    /// optional Hour, all as JSON numbers. Unknown keys are ignored.
    pub fn from_flat(map: &serde_json::Map<String, Value>) -> Result<Self> {
        let year = require_int(map, "Year")?;
        let month = require_int(map, "Month")?;
        let day = require_int(map, "Day")?;
        let date = NaiveDate::from_ymd_opt(year as i32, month as u32, day as u32)
            .ok_or_else(|| {
                Error::InvalidInput(format!("Invalid date: {}-{}-{}", year, month, day))
            })?;
        let hour = match map.get("Hour") {
            Some(v) => {
                let hour = v.as_u64().ok_or_else(|| {
                    Error::InvalidInput("Hour must be a non-negative integer".into())
                })?;
                u32::try_from(hour)
                    .map_err(|_| Error::InvalidInput(format!("Hour out of range: {}", hour)))?
            }
            None => DEFAULT_HOUR,
        };

        let mut concentrations = BTreeMap::new();
        for pollutant in Pollutant::ALL {
            if let Some(v) = map.get(pollutant.name()) {
                let value = v.as_f64().ok_or_else(|| {
                    Error::InvalidInput(format!("{} must be a number", pollutant))
                })?;
                concentrations.insert(pollutant, value);
            }
        }

        Self::new(date, hour, concentrations)
    }

    /// Concentration for a pollutant; zero when not present.
    pub fn concentration(&self, pollutant: Pollutant) -> f64 {
        self.concentrations.get(&pollutant).copied().unwrap_or(0.0)
    }

    pub fn set_concentration(&mut self, pollutant: Pollutant, value: f64) {
        self.concentrations.insert(pollutant, value);
    }
}

fn require_int(map: &serde_json::Map<String, Value>, key: &str) -> Result<i64> {
    map.get(key)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| Error::InvalidInput(format!("Missing or non-integer field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat(json: serde_json::Value) -> serde_json::Map<String, Value> {
        json.as_object().unwrap().clone()
    }

    #[test]
    fn test_from_flat() {
        let reading = PollutantReading::from_flat(&flat(serde_json::json!({
            "PM2.5": 30.0, "PM10": 40.0,
            "Year": 2026, "Month": 8, "Day": 27, "Hour": 14,
        })))
        .unwrap();
        assert_eq!(reading.date, NaiveDate::from_ymd_opt(2026, 8, 27).unwrap());
        assert_eq!(reading.hour, 14);
        assert_eq!(reading.concentration(Pollutant::Pm25), 30.0);
        // Absent pollutants read as zero.
        assert_eq!(reading.concentration(Pollutant::Benzene), 0.0);
    }

    #[test]
    fn test_from_flat_default_hour() {
        let reading = PollutantReading::from_flat(&flat(serde_json::json!({
            "PM2.5": 10.0, "Year": 2026, "Month": 1, "Day": 2,
        })))
        .unwrap();
        assert_eq!(reading.hour, DEFAULT_HOUR);
    }

    #[test]
    fn test_from_flat_rejects_negative() {
        let err = PollutantReading::from_flat(&flat(serde_json::json!({
            "PM2.5": -1.0, "Year": 2026, "Month": 1, "Day": 2,
        })))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_from_flat_rejects_bad_date() {
        let err = PollutantReading::from_flat(&flat(serde_json::json!({
            "PM2.5": 1.0, "Year": 2026, "Month": 2, "Day": 30,
        })))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_from_flat_rejects_negative_hour() {
        let err = PollutantReading::from_flat(&flat(serde_json::json!({
            "PM2.5": 1.0, "Year": 2026, "Month": 1, "Day": 2, "Hour": -5.0,
        })))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_from_flat_rejects_fractional_date() {
        let err = PollutantReading::from_flat(&flat(serde_json::json!({
            "PM2.5": 1.0, "Year": 2026.7, "Month": 1, "Day": 2,
        })))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_from_flat_missing_date_field() {
        let err = PollutantReading::from_flat(&flat(serde_json::json!({
            "PM2.5": 1.0, "Month": 2, "Day": 3,
        })))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
