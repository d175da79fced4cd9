//! Error types for the wellcast-forecast crate.

use wellcast_calendar::CalendarError;
use wellcast_segment::SegmentError;

/// Error type for all fallible operations in the wellcast-forecast crate.
///
/// "Nothing to forecast" situations (no segments, no base phase) are not
/// errors; they fall back to the historical cumulative.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    /// Returned when production rows are not in ascending index order.
    #[error("production rows must be sorted by index (row {row} has index {idx} after {prev})")]
    UnsortedProduction {
        /// Position of the first out-of-order row.
        row: usize,
        /// Index of that row.
        idx: f64,
        /// Index of the row before it.
        prev: f64,
    },

    /// Returned when bucket edges are not strictly increasing.
    #[error("bucket edges must be strictly increasing (edge {position} is {edge} after {prev})")]
    UnsortedEdges {
        /// Position of the first offending edge.
        position: usize,
        /// Value of that edge.
        edge: f64,
        /// Value of the edge before it.
        prev: f64,
    },

    /// Returned when paired inputs have different lengths.
    #[error("length mismatch: expected {expected}, got {got}")]
    LengthMismatch {
        /// Length of the reference input.
        expected: usize,
        /// Length of the mismatched input.
        got: usize,
    },

    /// Returned when the ratio sampling interval is below one day.
    #[error("ratio interval must be at least 1 day, got {interval}")]
    InvalidRatioInterval {
        /// The invalid interval.
        interval: u32,
    },

    /// Returned when a shut-in ends before it starts or its multiplier is
    /// not a finite non-negative number.
    #[error("invalid shut-in [{start_idx}, {end_idx}] with multiplier {multiplier}")]
    InvalidShutIn {
        /// Shut-in start.
        start_idx: f64,
        /// Shut-in end.
        end_idx: f64,
        /// Rate multiplier after the shut-in.
        multiplier: f64,
    },

    /// Calendar conversion error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Segment error.
    #[error(transparent)]
    Segment(#[from] SegmentError),
}
