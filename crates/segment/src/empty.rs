//! Non-producing segments used for gaps and shut-in windows.

use serde::{Deserialize, Serialize};

use crate::error::SegmentError;
use crate::field::{Field, IDX_FIELDS};
use crate::model::{SegmentModel, check_cut};

/// A segment with zero rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Empty {
    /// First day.
    pub start_idx: f64,
    /// Last day.
    pub end_idx: f64,
}

impl Empty {
    /// Builds an empty segment over `[start_idx, end_idx]`.
    pub fn new(start_idx: f64, end_idx: f64) -> Self {
        Self { start_idx, end_idx }
    }

    /// Splits into `[start_idx, idx - 1]` and `[idx, end_idx]`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::CutOutOfRange`] if either part would be empty.
    pub fn split(&self, idx: f64) -> Result<(Self, Self), SegmentError> {
        check_cut(idx, self.start_idx, self.end_idx)?;
        Ok((
            Self::new(self.start_idx, idx - 1.0),
            Self::new(idx, self.end_idx),
        ))
    }
}

impl SegmentModel for Empty {
    fn start_idx(&self) -> f64 {
        self.start_idx
    }

    fn end_idx(&self) -> f64 {
        self.end_idx
    }

    fn q_start(&self) -> f64 {
        0.0
    }

    fn q_end(&self) -> f64 {
        0.0
    }

    fn predict_at(&self, _t: f64) -> f64 {
        0.0
    }

    fn integral(&self, _left: f64, _right: f64) -> f64 {
        0.0
    }

    /// Any volume request resolves at `left`.
    fn inverse_integral(&self, _volume: f64, left: f64) -> f64 {
        left
    }

    fn slope_at(&self, _t: f64) -> f64 {
        0.0
    }

    fn rate_scaled_fields(&self) -> &'static [Field] {
        &[]
    }

    fn idx_shift_fields(&self) -> &'static [Field] {
        IDX_FIELDS
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut f64> {
        match field {
            Field::StartIdx => Some(&mut self.start_idx),
            Field::EndIdx => Some(&mut self.end_idx),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_nothing() {
        let seg = Empty::new(0.0, 10.0);
        assert_eq!(seg.predict(&[0.0, 5.0, 10.0]), vec![0.0; 3]);
        assert_eq!(seg.integral(0.0, 10.0), 0.0);
        assert_eq!(seg.inverse_integral(0.0, 3.0), 3.0);
        assert_eq!(seg.inverse_integral(250.0, 3.0), 3.0);
    }

    #[test]
    fn scaling_is_noop() {
        let mut seg = Empty::new(0.0, 10.0);
        seg.scale_rates(3.0);
        assert_eq!(seg, Empty::new(0.0, 10.0));
    }
}
