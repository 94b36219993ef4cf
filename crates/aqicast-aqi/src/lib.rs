//! Aqicast AQI — breakpoint interpolation and worst-pollutant aggregation.
//!
//! A concentration outside the calibrated range yields `None` rather than
//! being clamped or extrapolated; downstream treats that as "no valid
//! index", never as an error.

pub mod breakpoints;

pub use breakpoints::{table_for, BreakpointBracket, PM10_BREAKPOINTS, PM25_BREAKPOINTS};

use aqicast_core::Pollutant;

/// Map a concentration to a sub-index via the first bracket containing it.
///
/// Piecewise-linear within a bracket; `None` below the table's minimum or
/// above its maximum. Monotonic non-decreasing over the covered range.
pub fn interpolate(concentration: f64, table: &[BreakpointBracket]) -> Option<f64> {
    for b in table {
        if b.conc_low <= concentration && concentration <= b.conc_high {
            let slope = (b.index_high - b.index_low) / (b.conc_high - b.conc_low);
            return Some(b.index_low + slope * (concentration - b.conc_low));
        }
    }
    None
}

/// Sub-index for a single pollutant, using its own table. `None` when the
/// pollutant has no calibration or the value falls outside it.
pub fn sub_index(pollutant: Pollutant, concentration: f64) -> Option<f64> {
    interpolate(concentration, table_for(pollutant)?)
}

/// Overall AQI from particulate concentrations: the worst pollutant
/// dominates. `None` when neither yields a valid sub-index.
pub fn overall_aqi(pm25: Option<f64>, pm10: Option<f64>) -> Option<f64> {
    let mut best: Option<f64> = None;
    let candidates = [
        pm25.and_then(|c| sub_index(Pollutant::Pm25, c)),
        pm10.and_then(|c| sub_index(Pollutant::Pm10, c)),
    ];
    for value in candidates.into_iter().flatten() {
        best = Some(match best {
            Some(current) => current.max(value),
            None => value,
        });
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_inside_bracket() {
        // Mid-bracket: PM2.5 = 15 in (0,50,0,30) → 50/30 * 15 = 25.
        let v = interpolate(15.0, &PM25_BREAKPOINTS).unwrap();
        assert!((v - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_interpolate_known_values() {
        // PM2.5 = 30 → bracket (0,50,0,30) → index 50 at the upper edge.
        assert!((interpolate(30.0, &PM25_BREAKPOINTS).unwrap() - 50.0).abs() < 1e-9);
        // PM10 = 40 → bracket (0,50,0,50) → 40/50 * 50 = 40.
        assert!((interpolate(40.0, &PM10_BREAKPOINTS).unwrap() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_interpolate_monotonic_within_bracket() {
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=60 {
            let c = i as f64 * 0.5; // 0..30, first PM2.5 bracket
            let v = interpolate(c, &PM25_BREAKPOINTS).unwrap();
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_interpolate_out_of_range() {
        assert!(interpolate(-0.1, &PM25_BREAKPOINTS).is_none());
        assert!(interpolate(500.1, &PM25_BREAKPOINTS).is_none());
        assert!(interpolate(600.1, &PM10_BREAKPOINTS).is_none());
    }

    #[test]
    fn test_overall_aqi_worst_pollutant_wins() {
        // PM2.5=30 → 50.0; PM10=40 → 40.0; the worse sub-index dominates.
        let v = overall_aqi(Some(30.0), Some(40.0)).unwrap();
        assert!((v - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_aqi_single_pollutant() {
        let v = overall_aqi(Some(15.0), None).unwrap();
        assert!((v - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_overall_aqi_undefined() {
        assert!(overall_aqi(None, None).is_none());
        // Both out of calibrated range.
        assert!(overall_aqi(Some(1000.0), Some(1000.0)).is_none());
    }
}
