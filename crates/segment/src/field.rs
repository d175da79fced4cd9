//! Names of the numeric fields a segment exposes to sequence transforms.

/// A numeric segment field that sequence-level transforms may rewrite.
///
/// Rate scaling multiplies every field a segment lists in
/// [`SegmentModel::rate_scaled_fields`](crate::SegmentModel::rate_scaled_fields);
/// time shifting adds an offset to every field in
/// [`SegmentModel::idx_shift_fields`](crate::SegmentModel::idx_shift_fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// First day of the segment.
    StartIdx,
    /// Last day of the segment.
    EndIdx,
    /// Hyperbolic-to-exponential switch index.
    SwIdx,
    /// Rate at `start_idx`.
    QStart,
    /// Rate at `end_idx`.
    QEnd,
    /// Rate at the switch.
    QSw,
    /// Constant rate of a flat segment.
    C,
    /// Slope of a linear segment.
    K,
}

impl Field {
    /// Field name as it appears in a segment record.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::StartIdx => "start_idx",
            Field::EndIdx => "end_idx",
            Field::SwIdx => "sw_idx",
            Field::QStart => "q_start",
            Field::QEnd => "q_end",
            Field::QSw => "q_sw",
            Field::C => "c",
            Field::K => "k",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rate fields shared by every producing segment.
pub(crate) const RATE_FIELDS: &[Field] = &[Field::QStart, Field::QEnd];

/// Index fields shared by every segment.
pub(crate) const IDX_FIELDS: &[Field] = &[Field::StartIdx, Field::EndIdx];
