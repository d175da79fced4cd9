//! Hyperbolic (Arps) decline and incline segments.

use serde::{Deserialize, Serialize};
use wellcast_curve::{
    arps_d_eff_to_d, arps_d_to_d_eff, arps_get_d, arps_get_d_delta, clamp_b, integral_arps,
    inverse_integral_arps, pred_arps, slope_arps,
};

use crate::error::SegmentError;
use crate::field::{Field, IDX_FIELDS, RATE_FIELDS};
use crate::model::{SegmentModel, check_cut};

/// An Arps segment, `q0 * (1 + b D (t - start_idx))^(-1/b)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arps {
    /// First day.
    pub start_idx: f64,
    /// Last day.
    pub end_idx: f64,
    /// Rate at `start_idx`.
    pub q_start: f64,
    /// Rate at `end_idx`.
    pub q_end: f64,
    /// Hyperbolic exponent.
    pub b: f64,
    /// Secant-effective annual decline at `start_idx`.
    #[serde(rename = "D_eff")]
    pub d_eff: f64,
    /// Nominal decline per day at `start_idx`.
    #[serde(rename = "D")]
    pub d: f64,
}

impl Arps {
    /// Builds a segment from its effective annual decline.
    ///
    /// `b` is clamped away from 0 and 1 first, so `q_end` and every later
    /// evaluation use the same exponent.
    pub fn fill(start_idx: f64, end_idx: f64, q_start: f64, b: f64, d_eff: f64) -> Self {
        let b = clamp_b(b);
        let d = arps_d_eff_to_d(d_eff, b);
        Self {
            start_idx,
            end_idx,
            q_start,
            q_end: pred_arps(end_idx, start_idx, q_start, d, b),
            b,
            d_eff,
            d,
        }
    }

    /// Builds a segment through `(start_idx, q_start)` and `(end_idx, q_end)`.
    pub fn fill_from_q_end(start_idx: f64, end_idx: f64, q_start: f64, q_end: f64, b: f64) -> Self {
        let b = clamp_b(b);
        let d = arps_get_d(start_idx, q_start, end_idx, q_end, b);
        Self {
            start_idx,
            end_idx,
            q_start,
            q_end,
            b,
            d_eff: arps_d_to_d_eff(d, b),
            d,
        }
    }

    /// Splits into `[start_idx, idx - 1]` and `[idx, end_idx]`.
    ///
    /// The second half starts further down the curve, so its `D` and
    /// `D_eff` are re-derived at `idx`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::CutOutOfRange`] if either part would be empty.
    pub fn split(&self, idx: f64) -> Result<(Self, Self), SegmentError> {
        check_cut(idx, self.start_idx, self.end_idx)?;
        let first = Self {
            end_idx: idx - 1.0,
            q_end: self.predict_at(idx - 1.0),
            ..*self
        };
        let d = arps_get_d_delta(self.d, self.b, idx - self.start_idx);
        let second = Self {
            start_idx: idx,
            q_start: self.predict_at(idx),
            d,
            d_eff: arps_d_to_d_eff(d, self.b),
            ..*self
        };
        Ok((first, second))
    }
}

impl SegmentModel for Arps {
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

    fn predict_at(&self, t: f64) -> f64 {
        pred_arps(t, self.start_idx, self.q_start, self.d, self.b)
    }

    fn integral(&self, left: f64, right: f64) -> f64 {
        integral_arps(left, right, self.start_idx, self.q_start, self.d, self.b)
    }

    fn inverse_integral(&self, volume: f64, left: f64) -> f64 {
        inverse_integral_arps(volume, left, self.start_idx, self.q_start, self.d, self.b)
    }

    fn slope_at(&self, t: f64) -> f64 {
        slope_arps(t, self.start_idx, self.q_start, self.d, self.b)
    }

    fn rate_scaled_fields(&self) -> &'static [Field] {
        RATE_FIELDS
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
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wellcast_curve::{B_ONE_SUB, B_ZERO_SUB, DAYS_IN_YEAR};

    #[test]
    fn fill_reference_well() {
        let seg = Arps::fill(0.0, 365.0, 1200.0, 2.0, 0.5);
        assert_relative_eq!(seg.d, 1.5 / DAYS_IN_YEAR, max_relative = 1e-12);
        assert_eq!(seg.q_end, pred_arps(365.0, 0.0, 1200.0, seg.d, 2.0));
        assert!(seg.q_end > 0.0 && seg.q_end < 1200.0);
    }

    #[test]
    fn fill_clamps_b() {
        assert_eq!(Arps::fill(0.0, 10.0, 1.0, 1.0, 0.3).b, B_ONE_SUB);
        assert_eq!(Arps::fill(0.0, 10.0, 1.0, 0.0, 0.3).b, B_ZERO_SUB);
    }

    #[test]
    fn fill_from_q_end_matches_fill() {
        let seg = Arps::fill(10.0, 1000.0, 900.0, 1.3, 0.6);
        let back = Arps::fill_from_q_end(10.0, 1000.0, 900.0, seg.q_end, 1.3);
        assert_relative_eq!(back.d, seg.d, max_relative = 1e-10);
        assert_relative_eq!(back.d_eff, 0.6, max_relative = 1e-9);
    }

    #[test]
    fn split_rederives_decline() {
        let seg = Arps::fill(0.0, 3650.0, 1000.0, 0.9, 0.7);
        let (a, b) = seg.split(400.0).unwrap();
        assert_eq!(a.d, seg.d);
        assert!(b.d < seg.d);
        assert!(b.d_eff < seg.d_eff);
        for t in [400.0, 1000.0, 3650.0] {
            assert_relative_eq!(b.predict_at(t), seg.predict_at(t), max_relative = 1e-10);
        }
        assert_relative_eq!(a.q_end, seg.predict_at(399.0));
    }

    #[test]
    fn slope_negative_on_decline() {
        let seg = Arps::fill(0.0, 365.0, 500.0, 1.5, 0.6);
        assert!(seg.slope(&[0.0, 100.0, 365.0]).iter().all(|&s| s < 0.0));
    }
}
