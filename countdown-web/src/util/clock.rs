//! Wall-clock reads for the countdown page.
//!
//! Everything is epoch milliseconds to match the math in the `countdown`
//! crate. Hydrate builds read the browser clock; other builds fall back to
//! `chrono` at UTC so components stay renderable in SSR and native tests.

#[cfg(feature = "hydrate")]
use chrono::Datelike;
use chrono::NaiveDate;

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in epoch milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Today's date as `YYYY-MM-DD`, for the date input's `min` attribute.
#[must_use]
pub fn today_iso() -> String {
    today().to_string()
}

/// UTC offset in minutes at local midnight of `date` (positive west of UTC,
/// the JS `getTimezoneOffset` convention).
///
/// Resolved per target date, not from today, so a DST transition between now
/// and the target still lands the countdown on that date's own midnight.
#[must_use]
pub fn utc_offset_minutes_for(date: NaiveDate) -> i64 {
    #[cfg(feature = "hydrate")]
    {
        let js = js_sys::Date::new_with_year_month_day(
            date.year() as u32,
            date.month() as i32 - 1,
            date.day() as i32,
        );
        // new Date(y, m, d) reads years 0 through 99 as 1900 + y; setFullYear
        // takes the year literally.
        js.set_full_year(date.year() as u32);
        js.get_timezone_offset() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = date;
        0
    }
}

fn today() -> NaiveDate {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        // getMonth is zero-based.
        NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        chrono::Local::now().date_naive()
    }
}
