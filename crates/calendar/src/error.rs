//! Error types for the wellcast-calendar crate.

/// Error type for all fallible operations in the wellcast-calendar crate.
///
/// This enum covers invalid calendar components and day indices that
/// cannot be represented as a proleptic Gregorian date.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a year/month/day triple does not name a real date.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// Calendar year.
        year: i32,
        /// Calendar month.
        month: u32,
        /// Day within the month.
        day: u32,
    },

    /// Returned when a day index falls outside the range chrono can represent.
    #[error("day index {idx} is outside the representable date range")]
    IndexOutOfRange {
        /// The offending day index.
        idx: i64,
    },

    /// Returned when histogram bin edges are not strictly increasing.
    #[error("bin edges must be strictly increasing (edge {position} is {value})")]
    UnsortedBins {
        /// Position of the first out-of-order edge.
        position: usize,
        /// Value of that edge.
        value: f64,
    },
}
