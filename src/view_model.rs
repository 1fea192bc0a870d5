//! Display-ready summary of the highlighted "next" prediction point.

use crate::types::forecast_series::ForecastSeries;

/// Unit suffix used when none is configured.
pub const DEFAULT_UNIT: &str = "MW";
/// Shown in place of a timestamp when no point is highlighted.
pub const PLACEHOLDER_TIMESTAMP: &str = "--:--:--";
/// Shown in place of a value when no point is highlighted.
pub const PLACEHOLDER_VALUE: &str = "---";
/// Shown for a highlighted point whose prediction is missing.
pub const MISSING_VALUE_TEXT: &str = "N/A";

/// Derived, immutable view of one fetched series.
///
/// A new `ViewModel` is built for every fetch and replaced as a whole by the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub highlight_index: Option<usize>,
    pub next_timestamp: String,
    pub next_value_text: String,
    pub series: ForecastSeries,
}

impl ViewModel {
    /// Builds the next-point texts for `highlight_index`.
    ///
    /// An index of `None`, or one past the end of the series, yields the placeholders
    /// `"--:--:--"` and `"--- {unit}"`.
    ///
    /// ```
    /// use pv_forecast::{ForecastSeries, TimeOfDay, ViewModel};
    ///
    /// let series = ForecastSeries::from_columns(
    ///     vec![TimeOfDay::parse("12:00:00").unwrap()],
    ///     vec![Some(3.0)],
    /// );
    /// let view = ViewModel::build(series, Some(0), "MW");
    /// assert_eq!(view.next_timestamp, "12:00:00");
    /// assert_eq!(view.next_value_text, "3.00 MW");
    /// ```
    pub fn build(series: ForecastSeries, highlight_index: Option<usize>, unit: &str) -> Self {
        let highlighted = highlight_index.and_then(|i| series.get(i).map(|p| (i, *p)));
        match highlighted {
            Some((index, point)) => Self {
                highlight_index: Some(index),
                next_timestamp: point.timestamp.to_string(),
                next_value_text: format!("{} {}", format_value(point.value), unit),
                series,
            },
            None => Self {
                highlight_index: None,
                next_timestamp: PLACEHOLDER_TIMESTAMP.to_string(),
                next_value_text: placeholder_value_text(unit),
                series,
            },
        }
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight_index == Some(index)
    }
}

/// `"--- {unit}"`
pub fn placeholder_value_text(unit: &str) -> String {
    format!("{} {}", PLACEHOLDER_VALUE, unit)
}

/// Two decimals, or `"N/A"` for a missing or non-finite value.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => two_decimals(v),
        _ => MISSING_VALUE_TEXT.to_string(),
    }
}

/// Formats `value` with two decimals, rounding exact halves away from zero.
///
/// ```
/// use pv_forecast::two_decimals;
///
/// assert_eq!(two_decimals(0.125), "0.13");
/// assert_eq!(two_decimals(-0.125), "-0.13");
/// assert_eq!(two_decimals(1.005), "1.00");
/// ```
pub fn two_decimals(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    // `{:.2}` breaks exact ties towards even; only the digits after the cents can tell.
    let exact = format!("{:.30}", value.abs());
    let is_tie = exact
        .split_once('.')
        .is_some_and(|(_, frac)| frac[2..].trim_end_matches('0') == "5");
    if !is_tie {
        return rounded;
    }

    let cents = (value.abs() * 100.0).floor() as u64 + 1;
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, cents / 100, cents % 100)
}
