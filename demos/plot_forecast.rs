//! demos/plot_forecast.rs
//!
//! Renders a day of predictions with `plotlars`, drawing the highlighted "next"
//! point as a separate marker series.
//!
//! To run this demo:
//! cargo run --example plot_forecast --features plotting -- http://localhost:5000 <station> <YYYY-MM-DD>

use chrono::Local;
use plotlars::{Legend, Line, Plot, Rgb, Shape, Text, TimeSeriesPlot};
use polars::prelude::*;
use pv_forecast::{
    ChartData, ChartSurface, DisplayError, DisplayUpdate, ForecastClient, ForecastDisplay,
    RequestParams,
};
use std::env;
use std::error::Error;

/// Opens each chart in the browser. A browser tab cannot be closed from here, so
/// releasing a chart only forgets its title.
struct BrowserSurface;

struct BrowserChart {
    title: String,
}

impl ChartSurface for BrowserSurface {
    type Chart = BrowserChart;

    fn render(&mut self, data: &ChartData) -> Result<BrowserChart, DisplayError> {
        let next: Vec<Option<f64>> = data
            .values
            .iter()
            .enumerate()
            .map(|(i, v)| if data.highlight_index == Some(i) { *v } else { None })
            .collect();

        let frame = df!(
            "time" => &data.labels,
            "prediction" => &data.values,
            "next" => &next,
        )
        .map_err(|e| DisplayError::Render(e.to_string()))?;

        TimeSeriesPlot::builder()
            .data(&frame)
            .x("time")
            .y("prediction")
            .additional_series(vec!["next"])
            .size(8)
            .colors(vec![Rgb(255, 99, 132), Rgb(255, 0, 0)])
            .lines(vec![Line::Solid, Line::Dot])
            .with_shape(true)
            .shapes(vec![Shape::Circle, Shape::Diamond])
            .plot_title(Text::from(data.title.as_str()).size(16))
            .legend(&Legend::new().x(0.05).y(0.95))
            .x_title(Text::from(data.x_axis_title))
            .y_title(Text::from(data.y_axis_title.as_str()))
            .build()
            .plot();

        Ok(BrowserChart {
            title: data.title.clone(),
        })
    }

    fn release(&mut self, chart: BrowserChart) {
        println!("Replacing chart '{}'", chart.title);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let base_url = args.next().unwrap_or_else(|| "http://localhost:5000".to_string());
    let station = args.next().unwrap_or_default();
    let date = args
        .next()
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());

    let client = ForecastClient::builder().base_url(&base_url).build()?;
    let mut display = ForecastDisplay::new(BrowserSurface, client.unit());

    match display.update(&client, &RequestParams::new(station, date)).await {
        DisplayUpdate::Rendered { .. } => println!(
            "Next prediction: {}  {}",
            display.next_timestamp(),
            display.next_value_text()
        ),
        _ => println!("{}", display.message()),
    }

    Ok(())
}
