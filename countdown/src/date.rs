//! Civil dates for the countdown target.
//!
//! The date input control produces `YYYY-MM-DD`. Parsing is stricter than
//! chrono's own format parser: exactly that shape, all-digit fields, naming a
//! real calendar date. Conversion to epoch milliseconds counts signed days
//! since 1970-01-01, so the target lands on the date's local midnight once
//! the browser's UTC offset is applied.

use chrono::NaiveDate;
use thiserror::Error;

use crate::consts::{MS_PER_DAY, MS_PER_MINUTE};

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Why a submitted date string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The form was submitted without a date.
    #[error("no date selected")]
    Missing,
    /// Input does not have the `YYYY-MM-DD` shape.
    #[error("malformed date {0:?}, expected YYYY-MM-DD")]
    Malformed(String),
    /// Right shape, but the fields name no real calendar date.
    #[error("no such calendar date: {0}")]
    OutOfRange(String),
}

/// Parse a strict `YYYY-MM-DD` string.
///
/// chrono's `%Y-%m-%d` accepts unpadded fields, so the shape is checked here
/// first; calendar validity (month and day ranges, leap years) is
/// [`NaiveDate::from_ymd_opt`]'s call.
///
/// # Errors
///
/// [`DateError::Missing`] for an empty string, [`DateError::Malformed`] when
/// the shape is wrong, [`DateError::OutOfRange`] when the shape is right but
/// the fields name no real date (month 13, February 30).
pub fn parse(input: &str) -> Result<NaiveDate, DateError> {
    if input.is_empty() {
        return Err(DateError::Missing);
    }
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(DateError::Malformed(input.to_owned()));
    }
    let (Some(year), Some(month), Some(day)) = (
        parse_digits(&bytes[0..4]),
        parse_digits(&bytes[5..7]),
        parse_digits(&bytes[8..10]),
    ) else {
        return Err(DateError::Malformed(input.to_owned()));
    };
    // The field width bounds the year below 10_000.
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| DateError::OutOfRange(input.to_owned()))
}

/// Epoch milliseconds of `date`'s local midnight.
///
/// `utc_offset_min` follows the JS `getTimezoneOffset` convention: positive
/// west of UTC, negative east.
#[must_use]
pub fn local_midnight_ms(date: NaiveDate, utc_offset_min: i64) -> i64 {
    // NaiveDate::default() is 1970-01-01.
    let days = date.signed_duration_since(NaiveDate::default()).num_days();
    days * MS_PER_DAY + utc_offset_min * MS_PER_MINUTE
}

/// Parse a fixed-width run of ASCII digits.
fn parse_digits(field: &[u8]) -> Option<u32> {
    let mut value: u32 = 0;
    for &byte in field {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value * 10 + u32::from(byte - b'0');
    }
    Some(value)
}
