//! Exponential decline and incline segments.

use serde::{Deserialize, Serialize};
use wellcast_curve::{
    exp_d_eff_to_d, exp_d_to_d_eff, exp_get_d, integral_exp, inverse_integral_exp, pred_exp,
    slope_exp,
};

use crate::error::SegmentError;
use crate::field::{Field, IDX_FIELDS, RATE_FIELDS};
use crate::model::{SegmentModel, check_cut};

/// An exponential segment, `q0 * exp(-D (t - start_idx))`.
///
/// Declining segments have `D > 0`, inclining ones `D < 0`; both are stored
/// in this struct and told apart by the [`Segment`](crate::Segment) variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Exponential {
    /// First day.
    pub start_idx: f64,
    /// Last day.
    pub end_idx: f64,
    /// Rate at `start_idx`.
    pub q_start: f64,
    /// Rate at `end_idx`.
    pub q_end: f64,
    /// Effective annual decline.
    #[serde(rename = "D_eff")]
    pub d_eff: f64,
    /// Nominal decline per day.
    #[serde(rename = "D")]
    pub d: f64,
}

impl Exponential {
    /// Builds a segment from its effective annual decline.
    pub fn fill(start_idx: f64, end_idx: f64, q_start: f64, d_eff: f64) -> Self {
        let d = exp_d_eff_to_d(d_eff);
        Self {
            start_idx,
            end_idx,
            q_start,
            q_end: pred_exp(end_idx, start_idx, q_start, d),
            d_eff,
            d,
        }
    }

    /// Builds a segment through `(start_idx, q_start)` and `(end_idx, q_end)`.
    pub fn fill_from_q_end(start_idx: f64, end_idx: f64, q_start: f64, q_end: f64) -> Self {
        let d = exp_get_d(start_idx, q_start, end_idx, q_end);
        Self {
            start_idx,
            end_idx,
            q_start,
            q_end,
            d_eff: exp_d_to_d_eff(d),
            d,
        }
    }

    /// Splits into `[start_idx, idx - 1]` and `[idx, end_idx]`.
    ///
    /// Both halves keep the same decline; only the boundary rates change.
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
        let second = Self {
            start_idx: idx,
            q_start: self.predict_at(idx),
            ..*self
        };
        Ok((first, second))
    }
}

impl SegmentModel for Exponential {
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
        pred_exp(t, self.start_idx, self.q_start, self.d)
    }

    fn integral(&self, left: f64, right: f64) -> f64 {
        integral_exp(left, right, self.start_idx, self.q_start, self.d)
    }

    fn inverse_integral(&self, volume: f64, left: f64) -> f64 {
        inverse_integral_exp(volume, left, self.start_idx, self.q_start, self.d)
    }

    fn slope_at(&self, t: f64) -> f64 {
        slope_exp(t, self.start_idx, self.q_start, self.d)
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
