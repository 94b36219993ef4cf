//! Calibrated breakpoint tables.
//!
//! Each bracket maps a concentration interval linearly onto an index
//! interval. Brackets are sorted ascending, contiguous and non-overlapping
//! in concentration.

use aqicast_core::Pollutant;

/// One calibration bracket: `[conc_low, conc_high]` maps onto
/// `[index_low, index_high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakpointBracket {
    pub index_low: f64,
    pub index_high: f64,
    pub conc_low: f64,
    pub conc_high: f64,
}

const fn bracket(index_low: f64, index_high: f64, conc_low: f64, conc_high: f64) -> BreakpointBracket {
    BreakpointBracket {
        index_low,
        index_high,
        conc_low,
        conc_high,
    }
}

/// PM2.5 calibration (µg/m³).
pub const PM25_BREAKPOINTS: [BreakpointBracket; 6] = [
    bracket(0.0, 50.0, 0.0, 30.0),
    bracket(51.0, 100.0, 31.0, 60.0),
    bracket(101.0, 200.0, 61.0, 90.0),
    bracket(201.0, 300.0, 91.0, 120.0),
    bracket(301.0, 400.0, 121.0, 250.0),
    bracket(401.0, 500.0, 251.0, 500.0),
];

/// PM10 calibration (µg/m³).
pub const PM10_BREAKPOINTS: [BreakpointBracket; 6] = [
    bracket(0.0, 50.0, 0.0, 50.0),
    bracket(51.0, 100.0, 51.0, 100.0),
    bracket(101.0, 200.0, 101.0, 250.0),
    bracket(201.0, 300.0, 251.0, 350.0),
    bracket(301.0, 400.0, 351.0, 430.0),
    bracket(401.0, 500.0, 431.0, 600.0),
];

/// Table for a pollutant kind, if it has one. Only particulate matter is
/// calibrated today.
pub fn table_for(pollutant: Pollutant) -> Option<&'static [BreakpointBracket]> {
    match pollutant {
        Pollutant::Pm25 => Some(&PM25_BREAKPOINTS),
        Pollutant::Pm10 => Some(&PM10_BREAKPOINTS),
        _ => None,
    }
}
