//! Response-shape tests — validates that the wire format matches what the
//! dashboard frontend expects from the forecast API.

use aqicast_runtime::{DayPrediction, PredictRequest, PredictResponse};

/// The predict response serializes as `{predictions: [{date, predicted_aqi,
/// pm25, pm10, details}]}` with a dash-separated date.
#[test]
fn test_predict_response_shape() {
    let response = PredictResponse {
        predictions: vec![DayPrediction {
            date: "2026-08-27".into(),
            predicted_aqi: Some(87.5),
            pm25: 35.2,
            pm10: 80.1,
            details: serde_json::json!({}),
        }],
    };

    let json = serde_json::to_value(&response).unwrap();
    assert!(json["predictions"].is_array());

    let day = &json["predictions"][0];
    assert_eq!(day["date"], "2026-08-27");
    assert!(day["predicted_aqi"].is_number());
    assert!(day["pm25"].is_number());
    assert!(day["pm10"].is_number());
    assert!(day["details"].is_object());
}

/// An undefined index serializes as JSON null, never as NaN or a string.
#[test]
fn test_undefined_index_is_null() {
    let day = DayPrediction {
        date: "2026-08-27".into(),
        predicted_aqi: None,
        pm25: 0.0,
        pm10: 0.0,
        details: serde_json::json!({}),
    };
    let json = serde_json::to_value(&day).unwrap();
    assert!(json["predicted_aqi"].is_null());
}

/// Requests deserialize from both input modes.
#[test]
fn test_request_deserialization() {
    let by_coords: PredictRequest =
        serde_json::from_value(serde_json::json!({"lat": 28.6, "lon": 77.2, "days": 5})).unwrap();
    assert_eq!(by_coords.lat, Some(28.6));
    assert_eq!(by_coords.days, Some(5));
    assert!(by_coords.base_input.is_none());

    let by_input: PredictRequest = serde_json::from_value(serde_json::json!({
        "base_input": {"PM2.5": 30.0, "Year": 2026, "Month": 8, "Day": 27}
    }))
    .unwrap();
    assert!(by_input.base_input.is_some());
    assert!(by_input.days.is_none());
}

/// Error responses carry a human-readable message under `error`.
#[test]
fn test_error_response_shape() {
    let body = serde_json::json!({"error": "Provide lat/lon or base_input"});
    assert!(body["error"].is_string());
}
