//! Aqicast Forecast — projects one reading into N days of synthetic rows.
//!
//! The generator is deliberately deterministic: every call reseeds with a
//! fixed constant, so the same base reading and horizon always produce the
//! same trajectory, across calls and across requests.

use chrono::{Datelike, Days};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use tracing::debug;

use aqicast_core::{Pollutant, PollutantReading};

/// Fixed RNG seed. Same base reading + day count → bit-identical output.
const FORECAST_SEED: u64 = 42;

/// Weekday (Mon–Fri) pollutant multiplier; weekends run lighter.
const WEEKDAY_FACTOR: f64 = 1.03;
const WEEKEND_FACTOR: f64 = 0.97;

/// Linear per-day drift applied to the whole reading.
const DRIFT_PER_DAY: f64 = 0.002;

/// A synthesized reading at a 0-based day offset from the base date.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub offset: usize,
    pub reading: PollutantReading,
}

/// Noise standard deviation per pollutant.
fn sigma(pollutant: Pollutant) -> f64 {
    match pollutant {
        Pollutant::No | Pollutant::No2 | Pollutant::Nox => 0.15,
        Pollutant::Benzene | Pollutant::Toluene => 0.20,
        _ => 0.12,
    }
}

/// Expand one base reading into `days` synthetic daily rows.
///
/// Per day and pollutant, in canonical pollutant order: a Gaussian noise
/// sample scales the base value, then the weekday and drift multipliers
/// apply, floored at zero. Dates advance one day per row; the hour is
/// carried from the base reading.
pub fn synthesize(base: &PollutantReading, days: usize) -> Vec<ForecastRow> {
    let mut rng = StdRng::seed_from_u64(FORECAST_SEED);
    let mut rows = Vec::with_capacity(days);

    for i in 0..days {
        let date = base
            .date
            .checked_add_days(Days::new(i as u64))
            .unwrap_or(base.date);
        let weekday_factor = if date.weekday().number_from_monday() <= 5 {
            WEEKDAY_FACTOR
        } else {
            WEEKEND_FACTOR
        };
        let drift_factor = 1.0 + DRIFT_PER_DAY * i as f64;

        let mut row = base.clone();
        row.date = date;
        for pollutant in Pollutant::ALL {
            let base_value = base.concentration(pollutant);
            let noise: f64 = rng.sample::<f64, _>(StandardNormal) * sigma(pollutant);
            let noisy = base_value * (1.0 + noise);
            let value = (noisy * weekday_factor * drift_factor).max(0.0);
            row.set_concentration(pollutant, value);
        }
        rows.push(ForecastRow { offset: i, reading: row });
    }

    debug!("Synthesized {} forecast rows from {}", rows.len(), base.date);
    rows
}
