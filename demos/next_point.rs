//! demos/next_point.rs
//!
//! Fetches one day of predictions and prints the chart data together with the
//! highlighted "next" prediction point.
//!
//! To run this demo against a local backend:
//! cargo run --example next_point -- http://localhost:5000 <station> <YYYY-MM-DD>

use chrono::Local;
use pv_forecast::{DisplayUpdate, ForecastClient, ForecastDisplay, RecordingSurface, RequestParams};
use std::env;
use std::error::Error;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let base_url = args.next().unwrap_or_else(|| "http://localhost:5000".to_string());
    let station = args.next().unwrap_or_default();
    let date = args
        .next()
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

    let client = ForecastClient::builder()
        .base_url(&base_url)
        .timeout(Duration::from_secs(15))
        .build()?;

    let mut display = ForecastDisplay::new(RecordingSurface::new(), client.unit());
    let params = RequestParams::new(station, date);

    match display.update(&client, &params).await {
        DisplayUpdate::Rendered { .. } => {
            if let Some(chart) = display.surface().last_rendered() {
                println!("{}", chart.title);
                for i in 0..chart.len() {
                    let marker = if chart.highlight_index == Some(i) { "->" } else { "  " };
                    println!("{} {}  {}", marker, chart.labels[i], chart.tooltip_label(i));
                }
            }
            println!(
                "\nNext prediction: {}  {}",
                display.next_timestamp(),
                display.next_value_text()
            );
        }
        DisplayUpdate::Stale => {}
        _ => println!("{}", display.message()),
    }

    Ok(())
}
