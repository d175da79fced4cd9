//! The capability set every segment variant implements.

use crate::field::Field;

/// Prediction, integration and field introspection for one segment.
///
/// Times are day indices (`f64` so callers can evaluate between days).
/// The scalar methods are required; the slice versions map them.
pub trait SegmentModel {
    /// First day covered by the segment.
    fn start_idx(&self) -> f64;

    /// Last day covered by the segment.
    fn end_idx(&self) -> f64;

    /// Rate at `start_idx`.
    fn q_start(&self) -> f64;

    /// Rate at `end_idx`.
    fn q_end(&self) -> f64;

    /// Rate at `t`.
    fn predict_at(&self, t: f64) -> f64;

    /// Volume produced between `left` and `right`.
    fn integral(&self, left: f64, right: f64) -> f64;

    /// Time at which the volume produced since `left` reaches `volume`.
    fn inverse_integral(&self, volume: f64, left: f64) -> f64;

    /// Rate derivative at `t`.
    fn slope_at(&self, t: f64) -> f64;

    /// Fields multiplied when the segment's rates are scaled.
    fn rate_scaled_fields(&self) -> &'static [Field];

    /// Fields offset when the segment is moved in time.
    fn idx_shift_fields(&self) -> &'static [Field];

    /// Mutable access to a named field, `None` if the segment lacks it.
    fn field_mut(&mut self, field: Field) -> Option<&mut f64>;

    /// Rates at each of `t`.
    fn predict(&self, t: &[f64]) -> Vec<f64> {
        t.iter().map(|&x| self.predict_at(x)).collect()
    }

    /// Pairwise [`integral`](Self::integral) over `left[i]..right[i]`.
    fn arr_integral(&self, left: &[f64], right: &[f64]) -> Vec<f64> {
        left.iter()
            .zip(right)
            .map(|(&l, &r)| self.integral(l, r))
            .collect()
    }

    /// Pairwise [`inverse_integral`](Self::inverse_integral).
    fn arr_inverse_integral(&self, volume: &[f64], left: &[f64]) -> Vec<f64> {
        volume
            .iter()
            .zip(left)
            .map(|(&v, &l)| self.inverse_integral(v, l))
            .collect()
    }

    /// Rate derivatives at each of `t`.
    fn slope(&self, t: &[f64]) -> Vec<f64> {
        t.iter().map(|&x| self.slope_at(x)).collect()
    }

    /// Multiplies every rate field by `factor`.
    fn scale_rates(&mut self, factor: f64) {
        for &f in self.rate_scaled_fields() {
            if let Some(v) = self.field_mut(f) {
                *v *= factor;
            }
        }
    }

    /// Adds `delta` to every index field.
    fn shift_idx(&mut self, delta: f64) {
        for &f in self.idx_shift_fields() {
            if let Some(v) = self.field_mut(f) {
                *v += delta;
            }
        }
    }

    /// True when `t` lies inside `[start_idx, end_idx]`.
    fn contains(&self, t: f64) -> bool {
        self.start_idx() <= t && t <= self.end_idx()
    }
}

/// Checks that `idx` splits `[start_idx, end_idx]` into two non-empty parts.
pub(crate) fn check_cut(idx: f64, start_idx: f64, end_idx: f64) -> Result<(), crate::SegmentError> {
    if idx < start_idx + 1.0 || idx > end_idx {
        return Err(crate::SegmentError::CutOutOfRange {
            idx,
            start_idx,
            end_idx,
        });
    }
    Ok(())
}
