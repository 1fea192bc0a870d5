//! Chart-ready data derived from a [`ViewModel`]: axis labels, values, per-point
//! styling that emphasises the highlighted point, and the texts around the plot.

use crate::view_model::{two_decimals, ViewModel, MISSING_VALUE_TEXT};

pub const SERIES_LABEL: &str = "Prediction";
pub const HIGHLIGHT_COLOR: &str = "red";
pub const HIGHLIGHT_BORDER_COLOR: &str = "darkred";
pub const DEFAULT_POINT_COLOR: &str = "rgba(255, 99, 132, 0.6)";
pub const DEFAULT_BORDER_COLOR: &str = "rgb(255, 99, 132)";
pub const FILL_COLOR: &str = "rgba(255, 99, 132, 0.1)";
pub const X_AXIS_TITLE: &str = "Time (HH:MM:SS)";

/// Marker styling for a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    pub radius: f64,
    pub hover_radius: f64,
    pub border_width: f64,
    pub background_color: &'static str,
    pub border_color: &'static str,
}

impl PointStyle {
    pub const HIGHLIGHT: PointStyle = PointStyle {
        radius: 5.0,
        hover_radius: 7.0,
        border_width: 2.0,
        background_color: HIGHLIGHT_COLOR,
        border_color: HIGHLIGHT_BORDER_COLOR,
    };

    pub const DEFAULT: PointStyle = PointStyle {
        radius: 2.0,
        hover_radius: 4.0,
        border_width: 1.0,
        background_color: DEFAULT_POINT_COLOR,
        border_color: DEFAULT_BORDER_COLOR,
    };
}

/// Everything a line-chart surface needs to draw one day of predictions.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub series_label: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub points: Vec<PointStyle>,
    pub line_color: &'static str,
    pub fill_color: &'static str,
    pub highlight_index: Option<usize>,
    pub x_axis_title: &'static str,
    pub y_axis_title: String,
    pub unit: String,
}

impl ChartData {
    /// `station_label` is the human-readable station name used in the title.
    pub fn from_view_model(
        view_model: &ViewModel,
        station_label: &str,
        iso_date: &str,
        unit: &str,
    ) -> Self {
        let series = &view_model.series;
        let points = (0..series.len())
            .map(|i| {
                if view_model.is_highlighted(i) {
                    PointStyle::HIGHLIGHT
                } else {
                    PointStyle::DEFAULT
                }
            })
            .collect();

        Self {
            title: format!("{} - {} - Predicted power", station_label, iso_date),
            series_label: SERIES_LABEL,
            labels: series.timestamps().map(|t| t.to_string()).collect(),
            values: series.values().collect(),
            points,
            line_color: DEFAULT_BORDER_COLOR,
            fill_color: FILL_COLOR,
            highlight_index: view_model.highlight_index,
            x_axis_title: X_AXIS_TITLE,
            y_axis_title: format!("Predicted power ({})", unit),
            unit: unit.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Tooltip line for the point at `index`; the value part is left out when the
    /// prediction is missing.
    pub fn tooltip_label(&self, index: usize) -> String {
        match self.values.get(index).copied().flatten() {
            Some(v) => format!("{}: {} {}", self.series_label, two_decimals(v), self.unit),
            None => format!("{}: ", self.series_label),
        }
    }

    /// Highlighted `(label, value text)`, if any.
    pub fn highlighted(&self) -> Option<(&str, String)> {
        let index = self.highlight_index?;
        let label = self.labels.get(index)?;
        let value = match self.values.get(index).copied().flatten() {
            Some(v) => two_decimals(v),
            None => MISSING_VALUE_TEXT.to_string(),
        };
        Some((label.as_str(), value))
    }
}
