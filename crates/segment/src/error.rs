//! Error types for the wellcast-segment crate.

/// Error type for all fallible operations in the wellcast-segment crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SegmentError {
    /// Returned when a cut index does not leave both halves non-empty.
    #[error("cut index {idx} outside [{min}, {max}] for segment [{start_idx}, {end_idx}]",
        min = start_idx + 1.0, max = end_idx)]
    CutOutOfRange {
        /// The requested cut index.
        idx: f64,
        /// Start index of the segment being cut.
        start_idx: f64,
        /// End index of the segment being cut.
        end_idx: f64,
    },

    /// Returned when a segment ends before it starts.
    #[error("segment ends before it starts: start_idx={start_idx}, end_idx={end_idx}")]
    InvalidRange {
        /// Start index.
        start_idx: f64,
        /// End index.
        end_idx: f64,
    },

    /// Returned when a segment field holds NaN or infinity.
    #[error("non-finite value in {field}")]
    NonFiniteField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// Curve solver error.
    #[error(transparent)]
    Curve(#[from] wellcast_curve::CurveError),
}
