//! Property-based tests for date and runtime formatting
//!
//! Tests invariants:
//! - Non-positive runtimes are "no data"
//! - Runtime output parses back to the input minute count
//! - Valid calendar dates render as "YYYY년 MM월 DD일"
//! - Text without digits never parses as a date

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use crate::formatting::{format_display_date, format_runtime_minutes, NO_RUNTIME, UNKNOWN_DATE};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate a valid calendar date between years 1000 and 9999
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1000i32..=9999, 1u32..=366).prop_filter_map("valid ordinal", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

/// Reverse of the runtime layout, for round-trip checks
fn parse_runtime(text: &str) -> Option<i64> {
    let mut total = 0i64;
    for part in text.split(' ') {
        if let Some(hours) = part.strip_suffix('h') {
            total += hours.parse::<i64>().ok()? * 60;
        } else if let Some(mins) = part.strip_suffix('m') {
            total += mins.parse::<i64>().ok()?;
        } else {
            return None;
        }
    }
    Some(total)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: zero and negative runtimes are "no data"
    #[test]
    fn prop_non_positive_runtime_is_no_data(minutes in i64::MIN..=0) {
        prop_assert_eq!(format_runtime_minutes(minutes), NO_RUNTIME);
    }

    /// Property: formatted runtime round-trips to the same minute count
    #[test]
    fn prop_runtime_round_trips(minutes in 1i64..100_000) {
        let text = format_runtime_minutes(minutes);
        prop_assert_eq!(parse_runtime(&text), Some(minutes), "runtime text {:?}", text);
    }

    /// Property: the minutes part is always below 60 and never zero
    #[test]
    fn prop_runtime_parts_are_normalized(minutes in 1i64..100_000) {
        let text = format_runtime_minutes(minutes);
        for part in text.split(' ') {
            if let Some(mins) = part.strip_suffix('m') {
                let mins: i64 = mins.parse().unwrap();
                prop_assert!((1..60).contains(&mins));
            }
        }
    }

    /// Property: valid ISO dates render with padded month and day
    #[test]
    fn prop_iso_date_layout(date in arb_date()) {
        let iso = date.format("%Y-%m-%d").to_string();
        let expected = format!("{:04}년 {:02}월 {:02}일", date.year(), date.month(), date.day());
        prop_assert_eq!(format_display_date(iso.as_str()), expected.clone());
        prop_assert_eq!(format_display_date(date), expected);
    }

    /// Property: strings with no digits are never dates
    #[test]
    fn prop_text_without_digits_is_unknown(text in "[a-zA-Z :/.-]{0,24}") {
        prop_assert_eq!(format_display_date(text.as_str()), UNKNOWN_DATE);
    }
}
