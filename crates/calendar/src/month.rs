//! Calendar months addressed by day index.

use chrono::{Datelike, NaiveDate};

use crate::epoch::{date_to_idx, idx_to_date};
use crate::error::CalendarError;

/// A calendar month in the proleptic Gregorian calendar.
///
/// Months order chronologically, so they can key a `BTreeMap` of monthly
/// buckets directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Creates a new `Month`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// Returns the month containing day index `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::IndexOutOfRange`] for unrepresentable indices.
    pub fn of_idx(idx: i64) -> Result<Self, CalendarError> {
        let date = idx_to_date(idx)?;
        Ok(Self {
            year: date.year(),
            month: date.month(),
        })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month number (1..=12).
    pub fn month(self) -> u32 {
        self.month
    }

    /// Months elapsed since January of year 0; consecutive months differ by one.
    pub fn ordinal(self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Returns the following month.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Day index of the first day of the month.
    pub fn first_idx(self) -> i64 {
        date_to_idx(self.first_date())
    }

    /// Day index of the last day of the month.
    pub fn last_idx(self) -> i64 {
        self.next().first_idx() - 1
    }

    /// Number of days in the month.
    pub fn n_days(self) -> i64 {
        self.next().first_idx() - self.first_idx()
    }

    fn first_date(self) -> NaiveDate {
        // Safety: `year`/`month` were validated on construction and day 1 always exists.
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("day 1 of a valid month")
    }
}

/// Day index of the first day of the month containing `idx`.
///
/// # Errors
///
/// Returns [`CalendarError::IndexOutOfRange`] for unrepresentable indices.
pub fn month_start_idx(idx: i64) -> Result<i64, CalendarError> {
    Ok(Month::of_idx(idx)?.first_idx())
}

/// Day index of the last day of the month containing `idx`.
///
/// # Errors
///
/// Returns [`CalendarError::IndexOutOfRange`] for unrepresentable indices.
pub fn month_end_idx(idx: i64) -> Result<i64, CalendarError> {
    Ok(Month::of_idx(idx)?.last_idx())
}

/// Number of days in the month containing `idx`.
///
/// # Errors
///
/// Returns [`CalendarError::IndexOutOfRange`] for unrepresentable indices.
pub fn days_in_month(idx: i64) -> Result<i64, CalendarError> {
    Ok(Month::of_idx(idx)?.n_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::idx_from_ymd;

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            Month::new(2000, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            Month::new(2000, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn of_idx_epoch() {
        let m = Month::of_idx(0).unwrap();
        assert_eq!((m.year(), m.month()), (1900, 1));
        assert_eq!(m.first_idx(), 0);
        assert_eq!(m.last_idx(), 30);
        assert_eq!(m.n_days(), 31);
    }

    #[test]
    fn leap_february() {
        let feb_2020 = Month::new(2020, 2).unwrap();
        assert_eq!(feb_2020.n_days(), 29);
        let feb_1900 = Month::new(1900, 2).unwrap();
        assert_eq!(feb_1900.n_days(), 28);
        let feb_2000 = Month::new(2000, 2).unwrap();
        assert_eq!(feb_2000.n_days(), 29);
    }

    #[test]
    fn next_wraps_year() {
        let dec = Month::new(2019, 12).unwrap();
        assert_eq!(dec.next(), Month::new(2020, 1).unwrap());
        assert_eq!(dec.next().ordinal() - dec.ordinal(), 1);
    }

    #[test]
    fn boundaries_from_mid_month() {
        let mid = idx_from_ymd(2021, 4, 15).unwrap();
        assert_eq!(month_start_idx(mid).unwrap(), idx_from_ymd(2021, 4, 1).unwrap());
        assert_eq!(month_end_idx(mid).unwrap(), idx_from_ymd(2021, 4, 30).unwrap());
        assert_eq!(days_in_month(mid).unwrap(), 30);
    }

    #[test]
    fn ordering_is_chronological() {
        let a = Month::new(1999, 12).unwrap();
        let b = Month::new(2000, 1).unwrap();
        assert!(a < b);
    }
}
