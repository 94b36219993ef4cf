//! Feature matrix construction for model inference.
//!
//! Columns are the pollutant kinds in canonical order; the calendar fields
//! (year/month/day/hour) are deliberately excluded. The ordering is part of
//! the model contract and must not change between training and serving.

use ndarray::Array2;

use aqicast_core::Pollutant;
use aqicast_forecast::ForecastRow;

/// Number of feature columns.
pub const FEATURE_COLUMNS: usize = Pollutant::ALL.len();

/// Build an `n × FEATURE_COLUMNS` matrix from forecast rows.
pub fn build_feature_matrix(rows: &[ForecastRow]) -> Array2<f32> {
    let mut matrix = Array2::zeros((rows.len(), FEATURE_COLUMNS));
    for (i, row) in rows.iter().enumerate() {
        for (j, pollutant) in Pollutant::ALL.iter().enumerate() {
            matrix[[i, j]] = row.reading.concentration(*pollutant) as f32;
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqicast_core::PollutantReading;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    #[test]
    fn test_matrix_shape_and_order() {
        let mut concentrations = BTreeMap::new();
        concentrations.insert(Pollutant::Pm25, 12.5);
        concentrations.insert(Pollutant::Toluene, 3.0);
        let reading = PollutantReading::new(
            NaiveDate::from_ymd_opt(2026, 8, 27).unwrap(),
            12,
            concentrations,
        )
        .unwrap();
        let rows = vec![ForecastRow { offset: 0, reading }];

        let matrix = build_feature_matrix(&rows);
        assert_eq!(matrix.shape(), &[1, FEATURE_COLUMNS]);
        // PM2.5 is the first column, Toluene the last.
        assert_eq!(matrix[[0, 0]], 12.5);
        assert_eq!(matrix[[0, FEATURE_COLUMNS - 1]], 3.0);
        // Unset pollutants read as zero.
        assert_eq!(matrix[[0, 4]], 0.0);
    }

    #[test]
    fn test_empty_rows() {
        let matrix = build_feature_matrix(&[]);
        assert_eq!(matrix.shape(), &[0, FEATURE_COLUMNS]);
    }
}
