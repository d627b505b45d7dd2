//! Client for the external calorie prediction service.

use serde::{Deserialize, Serialize};

use crate::http_client;

const MAX_PREDICT_RESPONSE_BYTES: usize = 256 * 1024;

/// The seven physiological/activity measurements sent to the service.
///
/// Field names on the wire match the service contract exactly
/// (`Gender`, `Age`, ... `Body_Temp`), all numeric.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// 1 = laki-laki, 0 = perempuan.
    #[serde(rename = "Gender")]
    pub gender: f64,
    /// Years.
    #[serde(rename = "Age")]
    pub age: f64,
    /// Centimeters.
    #[serde(rename = "Height")]
    pub height: f64,
    /// Kilograms.
    #[serde(rename = "Weight")]
    pub weight: f64,
    /// Exercise duration in minutes.
    #[serde(rename = "Duration")]
    pub duration: f64,
    /// Beats per minute.
    #[serde(rename = "Heart_Rate")]
    pub heart_rate: f64,
    /// Degrees Celsius.
    #[serde(rename = "Body_Temp")]
    pub body_temp: f64,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            gender: 1.0,
            age: 25.0,
            height: 170.0,
            weight: 65.0,
            duration: 30.0,
            heart_rate: 120.0,
            body_temp: 37.0,
        }
    }
}

/// A calorie estimate plus an echo of the input that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct PredictionResult {
    /// Estimated calories burned.
    pub predicted_calories: f64,
    /// The input the service used for this estimate.
    pub input_data: PredictionInput,
}

/// Errors produced by the prediction call.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The service answered with a non-2xx status. All statuses are
    /// treated uniformly; only the code is surfaced.
    #[error("Prediction request failed (HTTP {0})")]
    Status(u16),
    /// The request never completed (DNS, connect, timeout, ...).
    #[error("HTTP error: {0}")]
    Transport(String),
    /// The response body was not a valid prediction payload.
    #[error("Invalid response: {0}")]
    Json(String),
}

/// POST the input to `{base_url}/predict` and parse the returned estimate.
///
/// Blocking; callers run this on a background thread.
pub fn predict(base_url: &str, input: &PredictionInput) -> Result<PredictionResult, PredictError> {
    let url = format!("{}/predict", base_url.trim_end_matches('/'));
    let request = http_client::agent()
        .post(&url)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match request.send_json(input) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _response)) => {
            return Err(PredictError::Status(code));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let body = read_body_limited(response)?;
    parse_prediction_response(&body)
}

fn read_body_limited(response: ureq::Response) -> Result<String, PredictError> {
    let bytes = http_client::read_response_bytes(response, MAX_PREDICT_RESPONSE_BYTES)
        .map_err(|err| PredictError::Json(err.to_string()))?;
    String::from_utf8(bytes).map_err(|err| PredictError::Json(err.to_string()))
}

fn parse_prediction_response(body: &str) -> Result<PredictionResult, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::Json("Empty response body".to_string()));
    }
    serde_json::from_str(trimmed).map_err(|err| PredictError::Json(format!("{err}: {trimmed}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_service_field_names() {
        let value = serde_json::to_value(PredictionInput::default()).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "Gender",
            "Age",
            "Height",
            "Weight",
            "Duration",
            "Heart_Rate",
            "Body_Temp",
        ] {
            assert!(object.contains_key(key), "missing wire key {key}");
        }
        assert_eq!(object.len(), 7);
    }

    #[test]
    fn parses_successful_response() {
        let body = r#"{
            "predicted_calories": 245.7,
            "input_data": {
                "Gender": 1, "Age": 25, "Height": 170, "Weight": 65,
                "Duration": 30, "Heart_Rate": 120, "Body_Temp": 37.0
            }
        }"#;
        let result = parse_prediction_response(body).unwrap();
        assert_eq!(result.predicted_calories, 245.7);
        assert_eq!(result.input_data.age, 25.0);
    }

    #[test]
    fn rejects_empty_body() {
        let err = parse_prediction_response("  ").unwrap_err();
        assert!(matches!(err, PredictError::Json(_)));
    }

    #[test]
    fn rejects_body_missing_estimate() {
        let err = parse_prediction_response(r#"{ "input_data": null }"#).unwrap_err();
        assert!(matches!(err, PredictError::Json(_)));
    }

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(
            PredictError::Status(500).to_string(),
            "Prediction request failed (HTTP 500)"
        );
    }
}
