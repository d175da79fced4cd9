//! Daily grids spanning whole calendar months.

use crate::error::CalendarError;
use crate::month::Month;

/// Generates every day index from the first day of `first`'s month through
/// the last day of `last`'s month.
///
/// `first` and `last` are day indices; only the months that contain them
/// matter. Returns an empty grid when `last` falls in an earlier month than
/// `first`.
///
/// # Errors
///
/// Returns [`CalendarError::IndexOutOfRange`] for unrepresentable indices.
///
/// # Example
///
/// ```
/// use wellcast_calendar::{idx_from_ymd, month_day_grid};
///
/// let jan_15 = idx_from_ymd(2020, 1, 15).unwrap();
/// let feb_03 = idx_from_ymd(2020, 2, 3).unwrap();
/// let grid = month_day_grid(jan_15, feb_03).unwrap();
/// assert_eq!(grid.len(), 31 + 29);
/// ```
pub fn month_day_grid(first: i64, last: i64) -> Result<Vec<i64>, CalendarError> {
    let start = Month::of_idx(first)?.first_idx();
    let end = Month::of_idx(last)?.last_idx();
    if end < start {
        return Ok(Vec::new());
    }
    Ok((start..=end).collect())
}

/// Generates `n_months` consecutive months starting at `start`.
pub fn month_sequence(start: Month, n_months: usize) -> Vec<Month> {
    let mut months = Vec::with_capacity(n_months);
    if n_months == 0 {
        return months;
    }
    months.push(start);
    let mut current = start;
    for _ in 1..n_months {
        current = current.next();
        months.push(current);
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::idx_from_ymd;

    #[test]
    fn grid_single_month() {
        let d = idx_from_ymd(2021, 6, 10).unwrap();
        let grid = month_day_grid(d, d).unwrap();
        assert_eq!(grid.len(), 30);
        assert_eq!(grid[0], idx_from_ymd(2021, 6, 1).unwrap());
        assert_eq!(*grid.last().unwrap(), idx_from_ymd(2021, 6, 30).unwrap());
    }

    #[test]
    fn grid_reversed_is_empty() {
        let a = idx_from_ymd(2021, 6, 10).unwrap();
        let b = idx_from_ymd(2021, 5, 10).unwrap();
        assert!(month_day_grid(a, b).unwrap().is_empty());
    }

    #[test]
    fn grid_is_contiguous() {
        let a = idx_from_ymd(2019, 11, 20).unwrap();
        let b = idx_from_ymd(2020, 3, 2).unwrap();
        let grid = month_day_grid(a, b).unwrap();
        assert_eq!(grid.len(), 30 + 31 + 31 + 29 + 31);
        for w in grid.windows(2) {
            assert_eq!(w[1] - w[0], 1);
        }
    }

    #[test]
    fn sequence_empty() {
        let start = Month::new(2000, 1).unwrap();
        assert!(month_sequence(start, 0).is_empty());
    }

    #[test]
    fn sequence_crosses_year() {
        let start = Month::new(2000, 11).unwrap();
        let months = month_sequence(start, 4);
        assert_eq!(months.len(), 4);
        assert_eq!(months[2], Month::new(2001, 1).unwrap());
        assert_eq!(months[3], Month::new(2001, 2).unwrap());
    }
}
