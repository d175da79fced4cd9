//! The closed set of segment variants.

use serde::{Deserialize, Serialize};

use crate::arps::Arps;
use crate::arps_modified::ArpsModified;
use crate::empty::Empty;
use crate::error::SegmentError;
use crate::exponential::Exponential;
use crate::field::Field;
use crate::flat::Flat;
use crate::linear::Linear;
use crate::model::SegmentModel;

/// One piece of a piecewise production-rate curve.
///
/// Serialized as a flat record tagged by `name`:
///
/// ```
/// use wellcast_segment::{Segment, SegmentModel};
///
/// let seg: Segment = serde_json::from_str(
///     r#"{"name":"flat","start_idx":0,"end_idx":30,"q_start":100,"q_end":100,"c":100}"#,
/// ).unwrap();
/// assert_eq!(seg.integral(0.0, 30.0), 3000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Segment {
    /// Constant rate.
    Flat(Flat),
    /// Zero rate.
    Empty(Empty),
    /// Exponential decline.
    ExpDec(Exponential),
    /// Exponential incline (negative `D`).
    ExpInc(Exponential),
    /// Hyperbolic decline.
    Arps(Arps),
    /// Hyperbolic incline (negative `D`).
    ArpsInc(Arps),
    /// Hyperbolic decline switching to exponential.
    ArpsModified(ArpsModified),
    /// Straight line.
    Linear(Linear),
}

/// Variant discriminator of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Flat,
    Empty,
    ExpDec,
    ExpInc,
    Arps,
    ArpsInc,
    ArpsModified,
    Linear,
}

impl SegmentKind {
    /// The `name` tag used in segment records.
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::Flat => "flat",
            SegmentKind::Empty => "empty",
            SegmentKind::ExpDec => "exp_dec",
            SegmentKind::ExpInc => "exp_inc",
            SegmentKind::Arps => "arps",
            SegmentKind::ArpsInc => "arps_inc",
            SegmentKind::ArpsModified => "arps_modified",
            SegmentKind::Linear => "linear",
        }
    }
}

impl std::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! dispatch {
    ($seg:expr, $s:ident => $body:expr) => {
        match $seg {
            Segment::Flat($s) => $body,
            Segment::Empty($s) => $body,
            Segment::ExpDec($s) | Segment::ExpInc($s) => $body,
            Segment::Arps($s) | Segment::ArpsInc($s) => $body,
            Segment::ArpsModified($s) => $body,
            Segment::Linear($s) => $body,
        }
    };
}

impl Segment {
    /// Variant discriminator.
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Flat(_) => SegmentKind::Flat,
            Segment::Empty(_) => SegmentKind::Empty,
            Segment::ExpDec(_) => SegmentKind::ExpDec,
            Segment::ExpInc(_) => SegmentKind::ExpInc,
            Segment::Arps(_) => SegmentKind::Arps,
            Segment::ArpsInc(_) => SegmentKind::ArpsInc,
            Segment::ArpsModified(_) => SegmentKind::ArpsModified,
            Segment::Linear(_) => SegmentKind::Linear,
        }
    }

    /// True for empty segments and flat segments at zero rate.
    pub fn is_non_producing(&self) -> bool {
        match self {
            Segment::Empty(_) => true,
            Segment::Flat(f) => f.q_start == 0.0,
            _ => false,
        }
    }

    /// Splits at `idx` into `[start_idx, idx - 1]` and `[idx, end_idx]`.
    ///
    /// Boundary rates are taken from this segment's prediction at `idx - 1`
    /// and `idx`. Modified Arps segments may split into halves of a
    /// different variant; see [`ArpsModified::split`].
    ///
    /// # Errors
    ///
    /// Returns [`SegmentError::CutOutOfRange`] unless
    /// `start_idx + 1 <= idx <= end_idx`.
    pub fn cut(&self, idx: f64) -> Result<(Segment, Segment), SegmentError> {
        match self {
            Segment::Flat(s) => s.split(idx).map(|(a, b)| (Segment::Flat(a), Segment::Flat(b))),
            Segment::Empty(s) => s
                .split(idx)
                .map(|(a, b)| (Segment::Empty(a), Segment::Empty(b))),
            Segment::ExpDec(s) => s
                .split(idx)
                .map(|(a, b)| (Segment::ExpDec(a), Segment::ExpDec(b))),
            Segment::ExpInc(s) => s
                .split(idx)
                .map(|(a, b)| (Segment::ExpInc(a), Segment::ExpInc(b))),
            Segment::Arps(s) => s.split(idx).map(|(a, b)| (Segment::Arps(a), Segment::Arps(b))),
            Segment::ArpsInc(s) => s
                .split(idx)
                .map(|(a, b)| (Segment::ArpsInc(a), Segment::ArpsInc(b))),
            Segment::ArpsModified(s) => s.split(idx),
            Segment::Linear(s) => s
                .split(idx)
                .map(|(a, b)| (Segment::Linear(a), Segment::Linear(b))),
        }
    }

    /// Copy of this segment with every rate field multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Segment {
        let mut out = *self;
        out.scale_rates(factor);
        out
    }

    /// Copy of this segment moved `delta` days later.
    pub fn shifted(&self, delta: f64) -> Segment {
        let mut out = *self;
        out.shift_idx(delta);
        out
    }

    /// Checks that the segment is well formed.
    ///
    /// # Errors
    ///
    /// - [`SegmentError::InvalidRange`] if `end_idx < start_idx`.
    /// - [`SegmentError::NonFiniteField`] if an index or rate field is NaN
    ///   or infinite. `sw_idx` is checked too; its never-switch sentinel
    ///   is finite.
    pub fn validate(&self) -> Result<(), SegmentError> {
        let mut copy = *self;
        let fields = self.idx_shift_fields().iter().chain(self.rate_scaled_fields());
        for &field in fields {
            let finite = copy.field_mut(field).is_none_or(|v| v.is_finite());
            if !finite {
                return Err(SegmentError::NonFiniteField {
                    field: field.as_str(),
                });
            }
        }
        if self.end_idx() < self.start_idx() {
            return Err(SegmentError::InvalidRange {
                start_idx: self.start_idx(),
                end_idx: self.end_idx(),
            });
        }
        Ok(())
    }
}

impl SegmentModel for Segment {
    fn start_idx(&self) -> f64 {
        dispatch!(self, s => s.start_idx())
    }

    fn end_idx(&self) -> f64 {
        dispatch!(self, s => s.end_idx())
    }

    fn q_start(&self) -> f64 {
        dispatch!(self, s => s.q_start())
    }

    fn q_end(&self) -> f64 {
        dispatch!(self, s => s.q_end())
    }

    fn predict_at(&self, t: f64) -> f64 {
        dispatch!(self, s => s.predict_at(t))
    }

    fn integral(&self, left: f64, right: f64) -> f64 {
        dispatch!(self, s => s.integral(left, right))
    }

    fn inverse_integral(&self, volume: f64, left: f64) -> f64 {
        dispatch!(self, s => s.inverse_integral(volume, left))
    }

    fn slope_at(&self, t: f64) -> f64 {
        dispatch!(self, s => s.slope_at(t))
    }

    fn rate_scaled_fields(&self) -> &'static [Field] {
        dispatch!(self, s => s.rate_scaled_fields())
    }

    fn idx_shift_fields(&self) -> &'static [Field] {
        dispatch!(self, s => s.idx_shift_fields())
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut f64> {
        dispatch!(self, s => s.field_mut(field))
    }
}

impl From<Flat> for Segment {
    fn from(s: Flat) -> Self {
        Segment::Flat(s)
    }
}

impl From<Empty> for Segment {
    fn from(s: Empty) -> Self {
        Segment::Empty(s)
    }
}

impl From<ArpsModified> for Segment {
    fn from(s: ArpsModified) -> Self {
        Segment::ArpsModified(s)
    }
}

impl From<Linear> for Segment {
    fn from(s: Linear) -> Self {
        Segment::Linear(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        let seg = Segment::ExpInc(Exponential::fill(0.0, 10.0, 1.0, -0.1));
        assert_eq!(seg.kind(), SegmentKind::ExpInc);
        assert_eq!(seg.kind().to_string(), "exp_inc");
    }

    #[test]
    fn cut_keeps_incline_variant() {
        let seg = Segment::ExpInc(Exponential::fill(0.0, 100.0, 10.0, -0.3));
        let (a, b) = seg.cut(40.0).unwrap();
        assert_eq!(a.kind(), SegmentKind::ExpInc);
        assert_eq!(b.kind(), SegmentKind::ExpInc);

        let seg = Segment::ArpsInc(Arps::fill(0.0, 100.0, 10.0, 0.5, -0.3));
        let (a, b) = seg.cut(40.0).unwrap();
        assert_eq!((a.kind(), b.kind()), (SegmentKind::ArpsInc, SegmentKind::ArpsInc));
    }

    #[test]
    fn cut_does_not_touch_original() {
        let seg = Segment::Flat(Flat::fill(0.0, 31.0, 123.0));
        let before = seg;
        let _ = seg.cut(10.0).unwrap();
        assert_eq!(seg, before);
    }

    #[test]
    fn non_producing() {
        assert!(Segment::Empty(Empty::new(0.0, 1.0)).is_non_producing());
        assert!(Segment::Flat(Flat::fill(0.0, 1.0, 0.0)).is_non_producing());
        assert!(!Segment::Flat(Flat::fill(0.0, 1.0, 2.0)).is_non_producing());
    }

    #[test]
    fn scaled_and_shifted_are_copies() {
        let seg = Segment::ArpsModified(ArpsModified::fill(0.0, 3650.0, 1000.0, 1.5, 0.8, 0.08));
        let scaled = seg.scaled(0.5);
        let shifted = seg.shifted(10.0);
        let Segment::ArpsModified(orig) = seg else {
            unreachable!()
        };
        let Segment::ArpsModified(s) = scaled else {
            panic!("variant changed")
        };
        assert_eq!(s.q_sw, orig.q_sw * 0.5);
        assert_eq!(s.d, orig.d);
        assert_eq!(shifted.start_idx(), 10.0);
        assert_eq!(seg.start_idx(), 0.0);
    }

    #[test]
    fn validate_rejects_bad_segments() {
        let ok = Segment::Flat(Flat::fill(0.0, 10.0, 1.0));
        assert!(ok.validate().is_ok());

        let backwards = Segment::Empty(Empty::new(10.0, 0.0));
        assert!(matches!(
            backwards.validate(),
            Err(SegmentError::InvalidRange { .. })
        ));

        let nan = Segment::Flat(Flat::fill(0.0, 10.0, f64::NAN));
        assert_eq!(
            nan.validate(),
            Err(SegmentError::NonFiniteField { field: "q_start" })
        );
    }
}
