//! Arps segments that switch to exponential decline.

use serde::{Deserialize, Serialize};
use wellcast_curve::{
    SwitchPoint, arps_d_eff_to_d, arps_d_to_d_eff, arps_get_d_delta, arps_modified_get_d, arps_sw,
    clamp_b, integral_arps, integral_exp, inverse_integral_arps, inverse_integral_exp,
    pred_arps_modified, slope_arps, slope_exp,
};

use crate::arps::Arps;
use crate::error::SegmentError;
use crate::exponential::Exponential;
use crate::field::Field;
use crate::model::{SegmentModel, check_cut};
use crate::segment::Segment;

/// An Arps curve that turns exponential once its decline reaches
/// `target_D_eff_sw`.
///
/// `sw_idx` may lie before `start_idx` (the segment is exponential
/// throughout) or past `end_idx` (the segment is pure Arps).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArpsModified {
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
    /// Requested switch decline, as an exponential effective decline.
    #[serde(rename = "target_D_eff_sw")]
    pub target_d_eff_sw: f64,
    /// Arps effective decline the curve has at `sw_idx`.
    #[serde(rename = "realized_D_eff_sw")]
    pub realized_d_eff_sw: f64,
    /// Switch index.
    pub sw_idx: f64,
    /// Rate at the switch.
    pub q_sw: f64,
    /// Effective decline of the exponential tail.
    #[serde(rename = "D_exp_eff")]
    pub d_exp_eff: f64,
    /// Nominal decline of the exponential tail.
    #[serde(rename = "D_exp")]
    pub d_exp: f64,
}

impl ArpsModified {
    /// Builds a segment from its effective annual decline and switch target.
    pub fn fill(
        start_idx: f64,
        end_idx: f64,
        q_start: f64,
        b: f64,
        d_eff: f64,
        target_d_eff_sw: f64,
    ) -> Self {
        let b = clamp_b(b);
        let d = arps_d_eff_to_d(d_eff, b);
        Self::with_decline(start_idx, end_idx, q_start, b, d, d_eff, target_d_eff_sw)
    }

    /// Builds a segment through `(start_idx, q_start)` and `(end_idx, q_end)`.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::Curve`] when no modified Arps curve with this
    /// `b` and switch target passes through both points.
    pub fn fill_from_q_end(
        start_idx: f64,
        end_idx: f64,
        q_start: f64,
        q_end: f64,
        b: f64,
        target_d_eff_sw: f64,
    ) -> Result<Self, SegmentError> {
        let b = clamp_b(b);
        let d = arps_modified_get_d(start_idx, q_start, end_idx, q_end, b, target_d_eff_sw)?;
        let mut seg = Self::with_decline(
            start_idx,
            end_idx,
            q_start,
            b,
            d,
            arps_d_to_d_eff(d, b),
            target_d_eff_sw,
        );
        seg.q_end = q_end;
        Ok(seg)
    }

    fn with_decline(
        start_idx: f64,
        end_idx: f64,
        q_start: f64,
        b: f64,
        d: f64,
        d_eff: f64,
        target_d_eff_sw: f64,
    ) -> Self {
        let sw = arps_sw(
            q_start,
            b,
            d,
            target_d_eff_sw,
            start_idx,
            start_idx,
            end_idx,
            false,
        );
        Self {
            start_idx,
            end_idx,
            q_start,
            q_end: pred_arps_modified(end_idx, start_idx, q_start, d, b, &sw),
            b,
            d_eff,
            d,
            target_d_eff_sw,
            realized_d_eff_sw: sw.realized_d_eff_sw,
            sw_idx: sw.sw_idx,
            q_sw: sw.q_sw,
            d_exp_eff: sw.d_exp_eff,
            d_exp: sw.d_exp,
        }
    }

    /// The switch parameters as a curve-level [`SwitchPoint`].
    pub fn switch_point(&self) -> SwitchPoint {
        SwitchPoint {
            sw_idx: self.sw_idx,
            q_sw: self.q_sw,
            realized_d_eff_sw: self.realized_d_eff_sw,
            d_exp: self.d_exp,
            d_exp_eff: self.d_exp_eff,
        }
    }

    /// Splits into `[start_idx, idx - 1]` and `[idx, end_idx]`.
    ///
    /// The halves change type depending on where the switch falls:
    ///
    /// | Switch position | First | Second |
    /// |-----------------|-------|--------|
    /// | `idx <= sw_idx` | `Arps` | `ArpsModified` |
    /// | `idx - 1 <= sw_idx < idx` | `Arps` | `ExpDec` |
    /// | `sw_idx < idx - 1` | `ArpsModified` | `ExpDec` |
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::CutOutOfRange`] if either part would be empty.
    pub fn split(&self, idx: f64) -> Result<(Segment, Segment), SegmentError> {
        check_cut(idx, self.start_idx, self.end_idx)?;
        let q_before = self.predict_at(idx - 1.0);
        let q_at = self.predict_at(idx);

        let first = if idx - 1.0 <= self.sw_idx {
            Segment::Arps(Arps {
                start_idx: self.start_idx,
                end_idx: idx - 1.0,
                q_start: self.q_start,
                q_end: q_before,
                b: self.b,
                d_eff: self.d_eff,
                d: self.d,
            })
        } else {
            Segment::ArpsModified(Self {
                end_idx: idx - 1.0,
                q_end: q_before,
                ..*self
            })
        };

        let second = if idx <= self.sw_idx {
            let d = arps_get_d_delta(self.d, self.b, idx - self.start_idx);
            Segment::ArpsModified(Self {
                start_idx: idx,
                q_start: q_at,
                d,
                d_eff: arps_d_to_d_eff(d, self.b),
                ..*self
            })
        } else {
            Segment::ExpDec(Exponential {
                start_idx: idx,
                end_idx: self.end_idx,
                q_start: q_at,
                q_end: self.q_end,
                d_eff: self.d_exp_eff,
                d: self.d_exp,
            })
        };

        Ok((first, second))
    }
}

impl SegmentModel for ArpsModified {
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
        pred_arps_modified(
            t,
            self.start_idx,
            self.q_start,
            self.d,
            self.b,
            &self.switch_point(),
        )
    }

    fn integral(&self, left: f64, right: f64) -> f64 {
        let sw = self.sw_idx;
        let arps = |l: f64, r: f64| integral_arps(l, r, self.start_idx, self.q_start, self.d, self.b);
        let exp = |l: f64, r: f64| integral_exp(l, r, sw, self.q_sw, self.d_exp);
        if right <= sw {
            arps(left, right)
        } else if left >= sw {
            exp(left, right)
        } else {
            arps(left, sw) + exp(sw, right)
        }
    }

    fn inverse_integral(&self, volume: f64, left: f64) -> f64 {
        let sw = self.sw_idx;
        if left < sw {
            let arps_volume = integral_arps(left, sw, self.start_idx, self.q_start, self.d, self.b);
            if volume <= arps_volume {
                return inverse_integral_arps(
                    volume,
                    left,
                    self.start_idx,
                    self.q_start,
                    self.d,
                    self.b,
                );
            }
            return inverse_integral_exp(volume - arps_volume, sw, sw, self.q_sw, self.d_exp);
        }
        inverse_integral_exp(volume, left, sw, self.q_sw, self.d_exp)
    }

    fn slope_at(&self, t: f64) -> f64 {
        if t <= self.sw_idx {
            slope_arps(t, self.start_idx, self.q_start, self.d, self.b)
        } else {
            slope_exp(t, self.sw_idx, self.q_sw, self.d_exp)
        }
    }

    fn rate_scaled_fields(&self) -> &'static [Field] {
        &[Field::QStart, Field::QEnd, Field::QSw]
    }

    fn idx_shift_fields(&self) -> &'static [Field] {
        &[Field::StartIdx, Field::EndIdx, Field::SwIdx]
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut f64> {
        match field {
            Field::StartIdx => Some(&mut self.start_idx),
            Field::EndIdx => Some(&mut self.end_idx),
            Field::SwIdx => Some(&mut self.sw_idx),
            Field::QStart => Some(&mut self.q_start),
            Field::QEnd => Some(&mut self.q_end),
            Field::QSw => Some(&mut self.q_sw),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use wellcast_curve::NEVER_SWITCH_OFFSET;

    fn switching() -> ArpsModified {
        ArpsModified::fill(0.0, 3650.0, 1000.0, 1.5, 0.8, 0.08)
    }

    #[test]
    fn fill_places_switch_inside() {
        let seg = switching();
        assert!(seg.sw_idx > 0.0 && seg.sw_idx < 3650.0);
        assert_relative_eq!(seg.d_exp_eff, 0.08, max_relative = 1e-9);
        assert_eq!(seg.q_end, seg.predict_at(3650.0));
    }

    #[test]
    fn zero_target_never_switches() {
        let seg = ArpsModified::fill(0.0, 3650.0, 1000.0, 1.5, 0.8, 0.0);
        assert_eq!(seg.sw_idx, 3650.0 + NEVER_SWITCH_OFFSET);
        let pure = Arps::fill(0.0, 3650.0, 1000.0, 1.5, 0.8);
        assert_relative_eq!(seg.q_end, pure.q_end, max_relative = 1e-12);
    }

    #[test]
    fn predict_continuous_across_switch() {
        let seg = switching();
        let sw = seg.sw_idx;
        assert_relative_eq!(seg.predict_at(sw), seg.q_sw, max_relative = 1e-12);
        assert_relative_eq!(seg.predict_at(sw + 1e-9), seg.q_sw, max_relative = 1e-9);
    }

    #[test]
    fn integral_splits_at_switch() {
        let seg = switching();
        let sw = seg.sw_idx;
        let whole = seg.integral(0.0, 3650.0);
        let parts = seg.integral(0.0, sw) + seg.integral(sw, 3650.0);
        assert_relative_eq!(whole, parts, max_relative = 1e-12);
    }

    #[test]
    fn inverse_integral_both_regimes() {
        let seg = switching();
        for right in [100.0, seg.sw_idx - 1.0, seg.sw_idx + 10.0, 3650.0] {
            let v = seg.integral(5.0, right);
            assert_relative_eq!(seg.inverse_integral(v, 5.0), right, max_relative = 1e-6);
        }
    }

    #[test]
    fn split_before_switch() {
        let seg = switching();
        let idx = seg.sw_idx.floor() - 100.0;
        let (a, b) = seg.split(idx).unwrap();
        assert!(matches!(a, Segment::Arps(_)));
        let Segment::ArpsModified(b) = b else {
            panic!("expected arps_modified, got {b:?}");
        };
        assert_eq!(b.sw_idx, seg.sw_idx);
        assert_relative_eq!(b.predict_at(3000.0), seg.predict_at(3000.0), max_relative = 1e-10);
    }

    #[test]
    fn split_at_switch() {
        let seg = switching();
        let idx = seg.sw_idx.floor() + 1.0;
        let (a, b) = seg.split(idx).unwrap();
        assert!(matches!(a, Segment::Arps(_)));
        let Segment::ExpDec(b) = b else {
            panic!("expected exp_dec, got {b:?}");
        };
        assert_eq!(b.d, seg.d_exp);
        assert_eq!(b.d_eff, seg.d_exp_eff);
        assert_relative_eq!(b.q_start, seg.predict_at(idx));
    }

    #[test]
    fn split_after_switch() {
        let seg = switching();
        let idx = seg.sw_idx.floor() + 100.0;
        let (a, b) = seg.split(idx).unwrap();
        let Segment::ArpsModified(a) = a else {
            panic!("expected arps_modified, got {a:?}");
        };
        assert_eq!(a.end_idx, idx - 1.0);
        assert!(matches!(b, Segment::ExpDec(_)));
        assert_relative_eq!(b.predict_at(3650.0), seg.q_end, max_relative = 1e-10);
    }

    #[test]
    fn fill_from_q_end_recovers_decline() {
        let seg = switching();
        let back =
            ArpsModified::fill_from_q_end(0.0, 3650.0, 1000.0, seg.q_end, 1.5, 0.08).unwrap();
        assert_relative_eq!(back.d, seg.d, max_relative = 1e-6);
        assert_relative_eq!(back.sw_idx, seg.sw_idx, max_relative = 1e-4);
    }

    #[test]
    fn fill_from_q_end_rejects_impossible_end() {
        let result = ArpsModified::fill_from_q_end(0.0, 3650.0, 1000.0, 2000.0, 1.5, 0.08);
        assert!(matches!(result, Err(SegmentError::Curve(_))));
    }

    #[test]
    fn shift_moves_switch() {
        let mut seg = switching();
        let sw = seg.sw_idx;
        seg.shift_idx(50.0);
        assert_eq!(seg.sw_idx, sw + 50.0);
    }
}
