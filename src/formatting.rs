//! Formatting utilities for display

use std::borrow::Cow;

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Shown when a release date is missing or unparseable.
pub const UNKNOWN_DATE: &str = "미정";

/// Shown when a runtime is missing or not positive.
pub const NO_RUNTIME: &str = "정보 없음";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Date-times with an offset that RFC 3339 parsing rejects: minutes-only
/// times and offsets without a colon.
const OFFSET_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
];

/// A date-like value accepted by [`format_display_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Missing,
    Text(&'a str),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl DateInput<'_> {
    /// Resolve to a calendar date in the local timezone.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        match *self {
            DateInput::Missing => None,
            DateInput::Text(text) => parse_calendar_date(text),
            DateInput::Date(date) => Some(date),
            DateInput::DateTime(date_time) => Some(date_time.date()),
        }
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(text: &'a str) -> Self {
        DateInput::Text(text)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(text: &'a String) -> Self {
        DateInput::Text(text.as_str())
    }
}

impl From<NaiveDate> for DateInput<'_> {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<NaiveDateTime> for DateInput<'_> {
    fn from(date_time: NaiveDateTime) -> Self {
        DateInput::DateTime(date_time)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput<'_> {
    fn from(date_time: DateTime<Tz>) -> Self {
        DateInput::DateTime(date_time.with_timezone(&Local).naive_local())
    }
}

impl<'a, T: Into<DateInput<'a>>> From<Option<T>> for DateInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(DateInput::Missing, Into::into)
    }
}

fn parse_offset_date_time(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt);
    }
    let zulu = text.strip_suffix('Z').or_else(|| text.strip_suffix('z'));
    let text: Cow<'_, str> = match zulu {
        Some(rest) => Cow::Owned(format!("{rest}+00:00")),
        None => Cow::Borrowed(text),
    };
    OFFSET_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&text, fmt).ok())
}

/// `YYYY-MM` and `YYYY`, taken as the first day of the month or year.
fn parse_reduced_precision(text: &str) -> Option<NaiveDate> {
    let (year, month) = text.split_once('-').unwrap_or((text, "01"));
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Parse a date or date-time string into a local calendar date.
///
/// Date-only strings are taken as-is. Strings carrying an offset are
/// converted to local time first; naive date-times are local wall-clock.
fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(dt) = parse_offset_date_time(text) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| parse_reduced_precision(text))
}

/// Format a date as "YYYY년 MM월 DD일", or "미정" when missing or invalid
pub fn format_display_date<'a>(date: impl Into<DateInput<'a>>) -> String {
    let input = date.into();
    match input.calendar_date() {
        Some(date) => format!(
            "{:04}년 {:02}월 {:02}일",
            date.year(),
            date.month(),
            date.day()
        ),
        None => {
            if input != DateInput::Missing {
                log::debug!("Unparseable display date: {input:?}");
            }
            UNKNOWN_DATE.to_string()
        }
    }
}

/// Format a runtime in minutes as "Xh Ym", or "정보 없음" when missing or not positive
pub fn format_runtime_minutes(minutes: impl Into<Option<i64>>) -> String {
    let minutes = match minutes.into() {
        Some(minutes) if minutes > 0 => minutes,
        _ => return NO_RUNTIME.to_string(),
    };

    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours == 0 {
        format!("{}m", mins)
    } else if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, mins)
    }
}
