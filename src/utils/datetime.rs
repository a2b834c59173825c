//! Date and time utility functions
//!
//! Calendar helpers shared by the parser and the formatter: epoch day
//! counts, ordinal dates and the zone-less input layouts.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::constants::{DATETIME_SPACE_FORMAT, DATETIME_T_FORMAT, DATE_FORMAT};
use crate::error::ParseError;
use crate::instant::EPOCH;

/// Whole days elapsed between the epoch and `utc`, truncated toward zero.
#[must_use]
pub fn epoch_days(utc: DateTime<Utc>) -> i64 {
    (utc - EPOCH).num_days()
}

/// The UTC midnight that starts the given epoch day.
///
/// Returns `None` when the day lies outside chrono's representable range.
#[must_use]
pub fn from_epoch_days(days: i64) -> Option<DateTime<Utc>> {
    let delta = Duration::try_days(days)?;
    EPOCH.checked_add_signed(delta)
}

/// Number of days in `year`.
#[must_use]
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_ymd_opt(year, 2, 29).is_some() {
        366
    } else {
        365
    }
}

/// Format a date as `YYYY-DDD`.
#[must_use]
pub fn format_ordinal<D: Datelike>(d: &D) -> String {
    format!("{}-{:03}", d.year(), d.ordinal())
}

/// Parse an ordinal date (`YYYY-DDD`).
///
/// Returns `None` when the input does not have the ordinal shape (four
/// digit year, `-`, three or more digit day), so other layouts can be
/// tried. An input with that shape but a day outside the year is an error;
/// it never rolls over into the following year.
pub fn parse_ordinal(s: &str) -> Option<Result<NaiveDate, ParseError>> {
    let (year_str, day_str) = s.split_once('-')?;
    if year_str.len() != 4 || day_str.len() < 3 {
        return None;
    }
    if !year_str.bytes().chain(day_str.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = year_str.parse().ok()?;
    let max = days_in_year(year);
    // Longer than u32 is certainly out of range
    let day: u32 = day_str.parse().unwrap_or(u32::MAX);

    if day == 0 || day > max {
        return Some(Err(ParseError::InvalidOrdinalDay { year, day, max }));
    }

    NaiveDate::from_yo_opt(year, day).map(Ok)
}

/// Parse a date-only input (`YYYY-MM-DD`) as midnight.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Parse `YYYY-MM-DDTHH:MM:SS`.
#[must_use]
pub fn parse_datetime_t(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_T_FORMAT).ok()
}

/// Parse `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn parse_datetime_space(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_SPACE_FORMAT).ok()
}
