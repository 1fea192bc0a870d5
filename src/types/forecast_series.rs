//! The prediction series for one station on one calendar day.

use crate::types::time_of_day::TimeOfDay;

/// A single predicted value at a time of day. `value` is `None` when the backend
/// reported `null` (or nothing) for that slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    pub timestamp: TimeOfDay,
    pub value: Option<f64>,
}

/// Ordered `(timestamp, value)` pairs for a single day.
///
/// Insertion order is chronological order. Timestamps are expected to be
/// non-decreasing; this is assumed and not verified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    pub fn new(points: Vec<ForecastPoint>) -> Self {
        Self { points }
    }

    /// Zips parallel timestamp and value columns.
    ///
    /// Slots without a value become `None`; values beyond the last timestamp are ignored.
    pub fn from_columns(timestamps: Vec<TimeOfDay>, values: Vec<Option<f64>>) -> Self {
        let mut values = values.into_iter();
        let points = timestamps
            .into_iter()
            .map(|timestamp| ForecastPoint {
                timestamp,
                value: values.next().flatten(),
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&ForecastPoint> {
        self.points.get(index)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn timestamps(&self) -> impl Iterator<Item = TimeOfDay> + '_ {
        self.points.iter().map(|p| p.timestamp)
    }

    pub fn values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.points.iter().map(|p| p.value)
    }
}
