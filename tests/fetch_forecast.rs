use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use pv_forecast::{
    DisplayUpdate, FetchError, FetchOutcome, FixedClock, ForecastClient, ForecastDisplay,
    ForecastError, RecordingSurface, RequestParams,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

const DATA_ROUTE: &str = "/api/data/{station}/{date}";

fn scenario_body() -> Value {
    json!({
        "station": "A1",
        "date": "2024-06-01",
        "timestamps": ["08:00:00", "12:00:00", "16:00:00"],
        "predictions": [1.5, null, 3.256],
    })
}

/// Canned answer for the data route; every request's `(station, date)` goes to `seen`.
#[derive(Clone)]
struct Backend {
    status: StatusCode,
    body: Value,
    seen: mpsc::UnboundedSender<(String, String)>,
}

async fn forecast_data(
    State(backend): State<Backend>,
    Path((station, date)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    let _ = backend.seen.send((station, date));
    (backend.status, Json(backend.body))
}

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{}", addr)
}

async fn serve_json(
    status: StatusCode,
    body: Value,
) -> (String, mpsc::UnboundedReceiver<(String, String)>) {
    let (seen, requests) = mpsc::unbounded_channel();
    let router = Router::new()
        .route(DATA_ROUTE, get(forecast_data))
        .with_state(Backend { status, body, seen });
    (serve(router).await, requests)
}

fn client(base_url: &str, hour: u32) -> ForecastClient {
    let now = NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap();
    ForecastClient::builder()
        .base_url(base_url)
        .clock(Arc::new(FixedClock(now)))
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_fetch_series_hits_templated_endpoint() -> Result<(), ForecastError> {
    let (base_url, mut requests) = serve_json(StatusCode::OK, scenario_body()).await;

    let outcome = client(&base_url, 10)
        .forecast()
        .station("A1")
        .date("2024-06-01")
        .call()
        .await?;

    let series = outcome.series().expect("expected data");
    assert_eq!(series.len(), 3);
    assert_eq!(
        requests.recv().await,
        Some(("A1".to_string(), "2024-06-01".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn test_view_for_today_before_noon() -> Result<(), ForecastError> {
    let (base_url, _requests) = serve_json(StatusCode::OK, scenario_body()).await;

    let view = client(&base_url, 10)
        .view()
        .station("A1")
        .date("2024-06-01")
        .call()
        .await?
        .expect("expected a view model");

    assert_eq!(view.highlight_index, Some(1));
    assert_eq!(view.next_timestamp, "12:00:00");
    assert_eq!(view.next_value_text, "N/A MW");
    Ok(())
}

#[tokio::test]
async fn test_empty_day_is_not_an_error() -> Result<(), ForecastError> {
    let message = "Station 'A1' has no predictions on '2024-06-01'";
    let body = json!({
        "station": "A1",
        "date": "2024-06-01",
        "timestamps": [],
        "predictions": [],
        "message": message,
    });
    let (base_url, _requests) = serve_json(StatusCode::OK, body).await;

    let outcome = client(&base_url, 10)
        .forecast()
        .station("A1")
        .date("2024-06-01")
        .call()
        .await?;

    assert_eq!(outcome, FetchOutcome::Empty(Some(message.to_string())));
    Ok(())
}

#[tokio::test]
async fn test_remote_error_carries_status_and_message() {
    let body = json!({ "error": "Invalid station ID" });
    let (base_url, _requests) = serve_json(StatusCode::NOT_FOUND, body).await;

    let err = client(&base_url, 10)
        .fetch(&RequestParams::new("ZZ", "2024-06-01"))
        .await
        .unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
    assert_eq!(
        err.to_string(),
        "Failed to fetch data (404): Invalid station ID"
    );
}

#[tokio::test]
async fn test_malformed_body_is_reported() {
    let router = Router::new().route(DATA_ROUTE, get(|| async { "<html>maintenance</html>" }));
    let base_url = serve(router).await;

    let err = client(&base_url, 10)
        .fetch(&RequestParams::new("A1", "2024-06-01"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nobody listens on
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let err = client(&format!("http://{}", addr), 10)
        .fetch(&RequestParams::new("A1", "2024-06-01"))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Transport(..)));
}

#[tokio::test]
async fn test_display_update_renders_latest_selection() {
    let (base_url, _requests) = serve_json(StatusCode::OK, scenario_body()).await;
    let client = client(&base_url, 20);
    let mut display = ForecastDisplay::new(RecordingSurface::new(), client.unit());

    let update = display
        .update(&client, &RequestParams::new("A1", "2024-06-01"))
        .await;

    assert_eq!(
        update,
        DisplayUpdate::Rendered {
            highlight_index: Some(2)
        }
    );
    assert_eq!(display.next_value_text(), "3.26 MW");
    assert_eq!(display.surface().rendered().len(), 1);
}

#[tokio::test]
async fn test_display_update_with_blank_date_skips_network() {
    let (base_url, mut requests) = serve_json(StatusCode::OK, scenario_body()).await;
    let client = client(&base_url, 10);
    let mut display = ForecastDisplay::new(RecordingSurface::new(), client.unit());

    let update = display.update(&client, &RequestParams::new("A1", "")).await;

    assert_eq!(update, DisplayUpdate::Invalid);
    assert_eq!(display.message(), pv_forecast::INVALID_SELECTION_MESSAGE);
    assert!(display.surface().rendered().is_empty());
    assert!(requests.try_recv().is_err());
}
