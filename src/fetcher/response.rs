//! Wire format of `GET /api/data/{station}/{date}` and its classification into a
//! [`FetchOutcome`].

use crate::fetcher::error::FetchError;
use crate::types::forecast_series::ForecastSeries;
use crate::types::time_of_day::TimeOfDay;
use log::warn;
use reqwest::StatusCode;
use serde::Deserialize;

/// Successful body. Every field is optional because an empty-day reply may carry
/// only `message`.
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ForecastBody {
    #[serde(default)]
    pub station: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub timestamps: Option<Vec<String>>,
    #[serde(default)]
    pub predictions: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of a non-2xx reply.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
}

/// Result of a well-formed forecast request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The day has a usable prediction series.
    Data(ForecastSeries),
    /// The backend answered but has nothing to show. Carries its message, if any.
    Empty(Option<String>),
}

impl FetchOutcome {
    pub fn series(&self) -> Option<&ForecastSeries> {
        match self {
            FetchOutcome::Data(series) => Some(series),
            FetchOutcome::Empty(_) => None,
        }
    }

    pub fn into_series(self) -> Option<ForecastSeries> {
        match self {
            FetchOutcome::Data(series) => Some(series),
            FetchOutcome::Empty(_) => None,
        }
    }
}

/// Turns status code and raw body into an outcome or error.
pub(crate) fn classify(
    url: &str,
    status: StatusCode,
    body: &[u8],
) -> Result<FetchOutcome, FetchError> {
    if !status.is_success() {
        // A missing or unreadable error body still yields a Remote error
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.is_empty());
        warn!("HTTP error for {}: {} ({:?})", url, status, message);
        return Err(FetchError::Remote {
            url: url.to_string(),
            status,
            message,
        });
    }

    let body: ForecastBody =
        serde_json::from_slice(body).map_err(|source| FetchError::MalformedResponse {
            url: url.to_string(),
            source,
        })?;

    into_outcome(body)
}

fn into_outcome(body: ForecastBody) -> Result<FetchOutcome, FetchError> {
    let message = body.message.filter(|m| !m.is_empty());
    let timestamps = match body.timestamps {
        Some(timestamps) if message.is_none() && !timestamps.is_empty() => timestamps,
        _ => return Ok(FetchOutcome::Empty(message)),
    };

    let timestamps = timestamps
        .into_iter()
        .map(|value| TimeOfDay::parse(&value).ok_or(FetchError::InvalidTimestamp { value }))
        .collect::<Result<Vec<_>, _>>()?;

    let predictions = body.predictions.unwrap_or_default();
    if predictions.len() != timestamps.len() {
        warn!(
            "Prediction count ({}) does not match timestamp count ({}) for station {:?} on {:?}",
            predictions.len(),
            timestamps.len(),
            body.station,
            body.date
        );
    }

    Ok(FetchOutcome::Data(ForecastSeries::from_columns(
        timestamps,
        predictions,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://localhost/api/data/A1/2024-06-01";

    #[test]
    fn test_classify_series() {
        let body = br#"{
            "station": "A1",
            "date": "2024-06-01",
            "timestamps": ["08:00:00", "12:00:00", "16:00:00"],
            "predictions": [1.5, null, 3.256]
        }"#;
        let outcome = classify(URL, StatusCode::OK, body).unwrap();
        let series = outcome.series().expect("expected a series");
        assert_eq!(series.len(), 3);
        assert_eq!(
            series.values().collect::<Vec<_>>(),
            vec![Some(1.5), None, Some(3.256)]
        );
    }

    #[test]
    fn test_classify_empty_timestamps() {
        let body = br#"{"timestamps":[],"predictions":[]}"#;
        assert_eq!(
            classify(URL, StatusCode::OK, body).unwrap(),
            FetchOutcome::Empty(None)
        );
    }

    #[test]
    fn test_classify_message_marks_empty_even_with_data() {
        let body = br#"{"timestamps":["08:00:00"],"predictions":[1.0],"message":"no data for A1"}"#;
        assert_eq!(
            classify(URL, StatusCode::OK, body).unwrap(),
            FetchOutcome::Empty(Some("no data for A1".to_string()))
        );
    }

    #[test]
    fn test_classify_missing_timestamps_is_empty() {
        assert_eq!(
            classify(URL, StatusCode::OK, b"{}").unwrap(),
            FetchOutcome::Empty(None)
        );
    }

    #[test]
    fn test_classify_remote_error_with_message() {
        let err = classify(URL, StatusCode::NOT_FOUND, br#"{"error":"invalid station"}"#)
            .unwrap_err();
        match err {
            FetchError::Remote { status, message, .. } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message.as_deref(), Some("invalid station"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_classify_remote_error_with_html_body() {
        let err = classify(URL, StatusCode::INTERNAL_SERVER_ERROR, b"<html>oops</html>")
            .unwrap_err();
        assert!(matches!(err, FetchError::Remote { message: None, .. }));
    }

    #[test]
    fn test_classify_malformed_json() {
        let err = classify(URL, StatusCode::OK, b"not json").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
    }

    #[test]
    fn test_classify_bad_timestamp() {
        let body = br#"{"timestamps":["8 o'clock"],"predictions":[1.0]}"#;
        let err = classify(URL, StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, FetchError::InvalidTimestamp { value } if value == "8 o'clock"));
    }
}
