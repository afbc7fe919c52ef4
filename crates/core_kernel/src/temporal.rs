//! Calendar handling and upstream date normalization
//!
//! Payment windowing works at day granularity: a due date and "today" are
//! both truncated to midnight before comparison, and the far edge of a
//! window extends to the last instant of its final day so the boundary day
//! is inclusive.
//!
//! The policy admin system delivers timestamps in two shapes: an ISO-8601
//! string, or a `[year, month, day, hour, minute, second, nanosecond]`
//! component array with optional trailing elements. [`DateInput`] accepts
//! both and normalizes to one internal value; anything that is not a real
//! calendar date collapses to `None` rather than an error.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Label rendered when a timestamp failed normalization
pub const DATE_UNAVAILABLE: &str = "Date not available";

/// Timezone wrapper for policy jurisdictions
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tz::from_str(&s)
            .map(Timezone)
            .map_err(|_| serde::de::Error::custom(format!("Invalid timezone: {}", s)))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the calendar date at this timezone for a UTC instant
    ///
    /// This is the "today" that callers hand to the windowing functions.
    pub fn local_date(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.0).date_naive()
    }

    /// Gets the start of day (00:00:00) in this timezone as UTC
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        date.and_time(NaiveTime::MIN)
            .and_local_timezone(self.0)
            .earliest()
            .expect("date has no local midnight")
            .with_timezone(&Utc)
    }

    /// Gets the end of day (23:59:59.999) in this timezone as UTC
    pub fn end_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        end_of_day(date)
            .and_local_timezone(self.0)
            .earliest()
            .expect("date has no local end of day")
            .with_timezone(&Utc)
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

/// Truncates a date to its first instant (00:00:00)
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Extends a date to its last instant at millisecond precision (23:59:59.999)
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is always a valid time")
}

/// Whole days from `from` to `to`; negative when `to` is in the past
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// A forward-looking day range, inclusive at both ends
///
/// `DayWindow::forward(today, 20)` spans today and the following 20 calendar
/// days. Membership is decided at day granularity; the start/end instants are
/// exposed for callers that need the exact boundary timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl DayWindow {
    /// Creates a window covering `start` plus the next `days` calendar days
    pub fn forward(start: NaiveDate, days: u32) -> Self {
        Self {
            start,
            end: start + Duration::days(i64::from(days)),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` falls inside the window, boundary days included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// First instant of the window (start day at 00:00:00)
    pub fn start_instant(&self) -> NaiveDateTime {
        start_of_day(self.start)
    }

    /// Last instant of the window (end day at 23:59:59.999)
    pub fn end_instant(&self) -> NaiveDateTime {
        end_of_day(self.end)
    }
}

/// A timestamp as the upstream API delivers it
///
/// Either an ISO-8601 string or a component array
/// `[year, month, day, hour?, minute?, second?, nanosecond?]` with months
/// 1-based. Unrecognized JSON shapes land in the catch-all variant and
/// normalize to `None` instead of failing the enclosing payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Iso(String),
    Components(Vec<i64>),
    Other(serde_json::Value),
}

impl DateInput {
    /// Collapses either upstream shape to one timestamp
    ///
    /// Returns `None` for empty strings, impossible calendar dates
    /// (e.g. February 30th), truncated component arrays, and non-date JSON.
    /// Never panics.
    pub fn normalize(&self) -> Option<NaiveDateTime> {
        match self {
            DateInput::Iso(s) => parse_iso(s),
            DateInput::Components(parts) => from_components(parts),
            DateInput::Other(_) => None,
        }
    }
}

fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    // Offset-carrying timestamps keep their wall-clock reading.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    s.parse::<NaiveDate>().ok().map(start_of_day)
}

fn from_components(parts: &[i64]) -> Option<NaiveDateTime> {
    if parts.len() < 3 {
        return None;
    }
    let year = i32::try_from(parts[0]).ok()?;
    let month = u32::try_from(parts[1]).ok()?;
    let day = u32::try_from(parts[2]).ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let part = |idx: usize| -> Option<u32> { u32::try_from(*parts.get(idx).unwrap_or(&0)).ok() };
    let hour = part(3)?;
    let minute = part(4)?;
    let second = part(5)?;
    // The seventh element is a nanosecond count, chrono's native sub-second
    // unit, so it passes through unconverted.
    let nano = part(6)?;

    date.and_hms_nano_opt(hour, minute, second, nano)
}

/// Serde adapter for `Option<NaiveDateTime>` fields fed by either upstream
/// date shape
///
/// Deserialization is lenient: a malformed or missing value becomes `None`
/// instead of failing the payload. Serialization emits an ISO-8601 string.
pub mod flexible_datetime {
    use super::{DateInput, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<DateInput>::deserialize(deserializer)?;
        Ok(raw.and_then(|input| input.normalize()))
    }
}

/// Formats a normalized timestamp as a calendar date, or the fallback label
pub fn display_date(value: Option<NaiveDateTime>) -> String {
    match value {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => DATE_UNAVAILABLE.to_string(),
    }
}
