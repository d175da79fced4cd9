//! Constant-rate segments.

use serde::{Deserialize, Serialize};

use crate::error::SegmentError;
use crate::field::{Field, IDX_FIELDS};
use crate::model::{SegmentModel, check_cut};

/// A segment producing at a constant rate `c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flat {
    /// First day.
    pub start_idx: f64,
    /// Last day.
    pub end_idx: f64,
    /// Rate at `start_idx` (always `c`).
    pub q_start: f64,
    /// Rate at `end_idx` (always `c`).
    pub q_end: f64,
    /// The constant rate.
    pub c: f64,
}

impl Flat {
    /// Builds a flat segment at rate `q_start`.
    pub fn fill(start_idx: f64, end_idx: f64, q_start: f64) -> Self {
        Self {
            start_idx,
            end_idx,
            q_start,
            q_end: q_start,
            c: q_start,
        }
    }

    /// Splits into `[start_idx, idx - 1]` and `[idx, end_idx]`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::CutOutOfRange`] if either part would be empty.
    pub fn split(&self, idx: f64) -> Result<(Self, Self), SegmentError> {
        check_cut(idx, self.start_idx, self.end_idx)?;
        // c stays authoritative even if q_start drifted from it.
        Ok((
            Self::fill(self.start_idx, idx - 1.0, self.c),
            Self::fill(idx, self.end_idx, self.c),
        ))
    }
}

impl SegmentModel for Flat {
    fn start_idx(&self) -> f64 {
        self.start_idx
    }

    fn end_idx(&self) -> f64 {
        self.end_idx
    }

    fn q_start(&self) -> f64 {
        self.q_start
    }

    fn q_end(&self) -> f64 {
        self.q_end
    }

    fn predict_at(&self, _t: f64) -> f64 {
        self.c
    }

    fn integral(&self, left: f64, right: f64) -> f64 {
        self.c * (right - left)
    }

    fn inverse_integral(&self, volume: f64, left: f64) -> f64 {
        left + volume / self.c
    }

    fn slope_at(&self, _t: f64) -> f64 {
        0.0
    }

    fn rate_scaled_fields(&self) -> &'static [Field] {
        &[Field::QStart, Field::QEnd, Field::C]
    }

    fn idx_shift_fields(&self) -> &'static [Field] {
        IDX_FIELDS
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut f64> {
        match field {
            Field::StartIdx => Some(&mut self.start_idx),
            Field::EndIdx => Some(&mut self.end_idx),
            Field::QStart => Some(&mut self.q_start),
            Field::QEnd => Some(&mut self.q_end),
            Field::C => Some(&mut self.c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn integral_is_rate_times_length() {
        let seg = Flat::fill(0.0, 30.0, 100.0);
        assert_relative_eq!(seg.integral(0.0, 30.0), 3000.0);
    }

    #[test]
    fn inverse_integral_halfway() {
        let seg = Flat::fill(0.0, 30.0, 100.0);
        assert_relative_eq!(seg.inverse_integral(1500.0, 0.0), 15.0);
    }

    #[test]
    fn predict_is_constant() {
        let seg = Flat::fill(0.0, 30.0, 100.0);
        assert_eq!(seg.predict(&[0.0, 31.0, 123.0]), vec![100.0, 100.0, 100.0]);
        assert_eq!(seg.slope(&[5.0]), vec![0.0]);
    }

    #[test]
    fn split_at_ten() {
        let seg = Flat::fill(0.0, 30.0, 100.0);
        let (a, b) = seg.split(10.0).unwrap();
        assert_eq!((a.start_idx, a.end_idx), (0.0, 9.0));
        assert_eq!((b.start_idx, b.end_idx), (10.0, 30.0));
        assert_eq!(a.c, 100.0);
        assert_eq!(b.q_start, 100.0);
    }

    #[test]
    fn split_at_start_rejected() {
        let seg = Flat::fill(0.0, 30.0, 100.0);
        assert!(seg.split(0.0).is_err());
        assert!(seg.split(31.0).is_err());
        assert!(seg.split(30.0).is_ok());
    }

    #[test]
    fn scale_touches_c() {
        let mut seg = Flat::fill(0.0, 30.0, 100.0);
        seg.scale_rates(0.5);
        assert_eq!((seg.q_start, seg.q_end, seg.c), (50.0, 50.0, 50.0));
        seg.shift_idx(7.0);
        assert_eq!((seg.start_idx, seg.end_idx), (7.0, 37.0));
    }
}
