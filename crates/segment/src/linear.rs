//! Straight-line segments.

use serde::{Deserialize, Serialize};
use wellcast_curve::{
    integral_linear, inverse_integral_linear, linear_d_eff_to_k, linear_get_k, linear_k_to_d_eff,
    pred_linear,
};

use crate::error::SegmentError;
use crate::field::{Field, IDX_FIELDS};
use crate::model::{SegmentModel, check_cut};

/// A linear segment, `k (t - start_idx) + q_start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Linear {
    /// First day.
    pub start_idx: f64,
    /// Last day.
    pub end_idx: f64,
    /// Rate at `start_idx`.
    pub q_start: f64,
    /// Rate at `end_idx`.
    pub q_end: f64,
    /// Annual decline relative to `q_start`.
    #[serde(rename = "D_eff")]
    pub d_eff: f64,
    /// Rate change per day.
    pub k: f64,
}

impl Linear {
    /// Builds a segment from its effective annual decline.
    pub fn fill(start_idx: f64, end_idx: f64, q_start: f64, d_eff: f64) -> Self {
        let k = linear_d_eff_to_k(d_eff, q_start);
        Self {
            start_idx,
            end_idx,
            q_start,
            q_end: pred_linear(end_idx, start_idx, q_start, k),
            d_eff,
            k,
        }
    }

    /// Builds a segment through `(start_idx, q_start)` and `(end_idx, q_end)`.
    pub fn fill_from_q_end(start_idx: f64, end_idx: f64, q_start: f64, q_end: f64) -> Self {
        let k = linear_get_k(start_idx, q_start, end_idx, q_end);
        Self {
            start_idx,
            end_idx,
            q_start,
            q_end,
            d_eff: linear_k_to_d_eff(k, q_start),
            k,
        }
    }

    /// Splits into `[start_idx, idx - 1]` and `[idx, end_idx]`.
    ///
    /// `k` is kept; the second half's `D_eff` is re-expressed against its
    /// own starting rate.
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
        let q_start = self.predict_at(idx);
        let second = Self {
            start_idx: idx,
            q_start,
            d_eff: linear_k_to_d_eff(self.k, q_start),
            ..*self
        };
        Ok((first, second))
    }
}

impl SegmentModel for Linear {
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
        pred_linear(t, self.start_idx, self.q_start, self.k)
    }

    fn integral(&self, left: f64, right: f64) -> f64 {
        integral_linear(left, right, self.start_idx, self.q_start, self.k)
    }

    fn inverse_integral(&self, volume: f64, left: f64) -> f64 {
        inverse_integral_linear(volume, left, self.start_idx, self.q_start, self.k)
    }

    fn slope_at(&self, _t: f64) -> f64 {
        self.k
    }

    fn rate_scaled_fields(&self) -> &'static [Field] {
        &[Field::QStart, Field::QEnd, Field::K]
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
            Field::K => Some(&mut self.k),
            _ => None,
        }
    }
}
