//! Picks the prediction point that should be highlighted as "next".

use crate::types::forecast_series::ForecastSeries;
use crate::types::time_of_day::TimeOfDay;
use chrono::NaiveDate;
use std::cmp::Ordering;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// How the requested day relates to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayRelation {
    Past,
    Today,
    Future,
}

impl DayRelation {
    /// Compares a requested `YYYY-MM-DD` date with today.
    ///
    /// Dates that do not parse are compared as strings against today's `YYYY-MM-DD`
    /// rendering, so a zero-padded ISO date still orders correctly.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use pv_forecast::DayRelation;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// assert_eq!(DayRelation::between("2024-06-01", today), DayRelation::Today);
    /// assert_eq!(DayRelation::between("2024-06-02", today), DayRelation::Future);
    /// assert_eq!(DayRelation::between("2024-05-31", today), DayRelation::Past);
    /// ```
    pub fn between(requested: &str, today: NaiveDate) -> Self {
        let ordering = match NaiveDate::parse_from_str(requested.trim(), DATE_FORMAT) {
            Ok(date) => date.cmp(&today),
            Err(_) => requested.cmp(today.format(DATE_FORMAT).to_string().as_str()),
        };
        match ordering {
            Ordering::Less => DayRelation::Past,
            Ordering::Equal => DayRelation::Today,
            Ordering::Greater => DayRelation::Future,
        }
    }
}

/// Index of the point to highlight, or `None` when nothing is "next".
///
/// Returns the first point strictly after `now`. When every point is at or before
/// `now`, the fallback depends on the day: the last point for today, the first
/// point for a future day, nothing for a past day.
pub fn select_next_index(
    series: &ForecastSeries,
    now: TimeOfDay,
    relation: DayRelation,
) -> Option<usize> {
    if series.is_empty() {
        return None;
    }
    if let Some(index) = series.timestamps().position(|t| t > now) {
        return Some(index);
    }
    match relation {
        DayRelation::Today => Some(series.len() - 1),
        DayRelation::Future => Some(0),
        DayRelation::Past => None,
    }
}

/// [`select_next_index`] with the day relation derived from the requested date string.
pub fn select_next_index_for_dates(
    series: &ForecastSeries,
    now: TimeOfDay,
    requested_date: &str,
    today: NaiveDate,
) -> Option<usize> {
    select_next_index(series, now, DayRelation::between(requested_date, today))
}
