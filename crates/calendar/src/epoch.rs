//! Day indices counted from the 1900-01-01 epoch.

use chrono::{Days, NaiveDate};

use crate::error::CalendarError;

/// Calendar year of the epoch (day index 0).
pub const BASE_YEAR: i32 = 1900;

/// Returns the epoch date, 1900-01-01, which is day index 0.
pub fn base_date() -> NaiveDate {
    // Safety: 1900-01-01 is a valid proleptic Gregorian date.
    NaiveDate::from_ymd_opt(BASE_YEAR, 1, 1).expect("1900-01-01 is always valid")
}

/// Converts a day index into a calendar date.
///
/// # Errors
///
/// Returns [`CalendarError::IndexOutOfRange`] when the index lands outside
/// the range chrono can represent.
pub fn idx_to_date(idx: i64) -> Result<NaiveDate, CalendarError> {
    let base = base_date();
    let shifted = if idx >= 0 {
        base.checked_add_days(Days::new(idx.unsigned_abs()))
    } else {
        base.checked_sub_days(Days::new(idx.unsigned_abs()))
    };
    shifted.ok_or(CalendarError::IndexOutOfRange { idx })
}

/// Converts a calendar date into its day index.
pub fn date_to_idx(date: NaiveDate) -> i64 {
    date.signed_duration_since(base_date()).num_days()
}

/// Builds a day index from year, month and day.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDate`] if the triple is not a real date.
pub fn idx_from_ymd(year: i32, month: u32, day: u32) -> Result<i64, CalendarError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(date_to_idx)
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

/// Day index of the day containing a fractional time.
///
/// Forecast times are real numbers; the owning day is the floor.
pub fn day_of(t: f64) -> i64 {
    t.floor() as i64
}
