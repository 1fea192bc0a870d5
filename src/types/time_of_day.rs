//! Wall-clock time of day with second precision.
//!
//! The backend reports prediction timestamps as zero-padded `HH:MM:SS` strings. Comparing
//! those strings lexically happens to match chronological order, but only as long as every
//! value stays zero-padded. [`TimeOfDay`] parses them into a real time value so ordering no
//! longer depends on formatting.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

const TIME_FORMAT: &str = "%H:%M:%S";

/// A time of day truncated to whole seconds.
///
/// Ordering is chronological and identical to the lexical ordering of the
/// zero-padded `HH:MM:SS` rendering.
///
/// # Examples
///
/// ```
/// use pv_forecast::TimeOfDay;
///
/// let morning: TimeOfDay = "08:00:00".parse().unwrap();
/// let noon: TimeOfDay = "12:00:00".parse().unwrap();
/// assert!(morning < noon);
/// assert_eq!(noon.to_string(), "12:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Builds a `TimeOfDay` from hour, minute and second, returning `None` when out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Wraps a `NaiveTime`, dropping any sub-second part.
    pub fn from_time(time: NaiveTime) -> Self {
        Self(time.with_nanosecond(0).unwrap_or(time))
    }

    /// The time-of-day part of a local date-time.
    pub fn of(datetime: NaiveDateTime) -> Self {
        Self::from_time(datetime.time())
    }

    /// Parses a `HH:MM:SS` string.
    pub fn parse(value: &str) -> Option<Self> {
        NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
            .ok()
            .map(Self::from_time)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveTime::parse_from_str(s.trim(), TIME_FORMAT).map(Self::from_time)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}
