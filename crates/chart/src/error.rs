//! Error types for the wellcast-chart crate.

use wellcast_calendar::CalendarError;
use wellcast_forecast::ForecastError;
use wellcast_segment::SegmentError;

/// Error type for all fallible operations in the wellcast-chart crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// Returned when the configuration selects no phase.
    #[error("chart needs at least one phase")]
    NoPhases,

    /// Returned when a ratio column uses a phase the chart does not include.
    #[error("ratio column {column} needs phase {phase}, which is not charted")]
    RatioPhaseMissing {
        /// The ratio column, e.g. `gas/oil`.
        column: String,
        /// The missing phase.
        phase: String,
    },

    /// Returned when a forecast segment fails validation.
    #[error("invalid {phase} forecast segment {position}: {source}")]
    InvalidSegment {
        /// Phase whose forecast is invalid.
        phase: String,
        /// Position of the segment in its sequence.
        position: usize,
        /// Underlying validation error.
        source: SegmentError,
    },

    /// Returned when the chart cannot be rendered to JSON.
    #[error("serialization failed: {reason}")]
    Serialization {
        /// Description of the serialization failure.
        reason: String,
    },

    /// Calendar conversion error.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Forecast computation error.
    #[error(transparent)]
    Forecast(#[from] ForecastError),
}
