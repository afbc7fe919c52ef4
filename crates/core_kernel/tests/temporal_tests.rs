//! Tests for calendar handling and upstream date normalization

use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;

use core_kernel::temporal::{self, flexible_datetime};
use core_kernel::{days_between, DateInput, DayWindow};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_days_between_signs() {
    assert_eq!(days_between(date(2025, 1, 1), date(2025, 1, 4)), 3);
    assert_eq!(days_between(date(2025, 1, 4), date(2025, 1, 1)), -3);
    assert_eq!(days_between(date(2025, 1, 1), date(2025, 1, 1)), 0);
}

#[test]
fn test_window_spans_month_boundary() {
    let window = DayWindow::forward(date(2025, 1, 25), 10);
    assert_eq!(window.end(), date(2025, 2, 4));
    assert!(window.contains(date(2025, 2, 1)));
    assert!(!window.contains(date(2025, 2, 5)));
}

#[test]
fn test_rfc3339_with_offset_keeps_wall_clock() {
    let input = DateInput::Iso("2025-03-15T10:30:00+05:30".to_string());
    let expected = date(2025, 3, 15).and_hms_opt(10, 30, 0).unwrap();
    assert_eq!(input.normalize(), Some(expected));
}

#[test]
fn test_component_tuple_with_nanoseconds() {
    // Sub-second component is a nanosecond count: 123_000_000 ns = 123 ms.
    let input = DateInput::Components(vec![2025, 3, 15, 10, 30, 0, 123_000_000]);
    let expected = date(2025, 3, 15)
        .and_hms_milli_opt(10, 30, 0, 123)
        .unwrap();
    assert_eq!(input.normalize(), Some(expected));
}

#[test]
fn test_component_tuple_rejects_negative_parts() {
    let input = DateInput::Components(vec![2025, -3, 15]);
    assert_eq!(input.normalize(), None);
}

#[derive(Debug, Deserialize)]
struct Stamped {
    #[serde(default, with = "flexible_datetime")]
    at: Option<NaiveDateTime>,
}

#[test]
fn test_lenient_field_accepts_both_shapes() {
    let from_iso: Stamped = serde_json::from_str(r#"{"at": "2025-01-05T08:00:00"}"#).unwrap();
    assert_eq!(
        from_iso.at,
        Some(date(2025, 1, 5).and_hms_opt(8, 0, 0).unwrap())
    );

    let from_tuple: Stamped = serde_json::from_str(r#"{"at": [2025, 1, 5, 8, 0, 0]}"#).unwrap();
    assert_eq!(from_tuple.at, from_iso.at);
}

#[test]
fn test_lenient_field_degrades_instead_of_failing() {
    let garbage: Stamped = serde_json::from_str(r#"{"at": "not-a-date"}"#).unwrap();
    assert_eq!(garbage.at, None);

    let wrong_shape: Stamped = serde_json::from_str(r#"{"at": {"y": 2025}}"#).unwrap();
    assert_eq!(wrong_shape.at, None);

    let missing: Stamped = serde_json::from_str(r#"{}"#).unwrap();
    assert_eq!(missing.at, None);

    let null: Stamped = serde_json::from_str(r#"{"at": null}"#).unwrap();
    assert_eq!(null.at, None);
}

#[test]
fn test_end_of_day_precision() {
    let eod = temporal::end_of_day(date(2025, 1, 1));
    assert_eq!(eod.format("%H:%M:%S%.3f").to_string(), "23:59:59.999");
}

#[test]
fn test_timezone_serde() {
    let tz: core_kernel::Timezone = serde_json::from_str("\"America/New_York\"").unwrap();
    assert_eq!(serde_json::to_string(&tz).unwrap(), "\"America/New_York\"");
    assert!(serde_json::from_str::<core_kernel::Timezone>("\"Mars/Olympus\"").is_err());
}
