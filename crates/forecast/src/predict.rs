//! Point predictions over a segment sequence.

use wellcast_segment::{Segment, SegmentModel};

/// Rate of the sequence at each of `times`; `fill` where no segment applies.
///
/// Segments are not checked for overlap. When several contain a time the
/// last one in list order wins.
pub fn predict(times: &[f64], segments: &[Segment], fill: f64) -> Vec<f64> {
    times
        .iter()
        .map(|&t| predict_one(t, segments, fill))
        .collect()
}

pub(crate) fn predict_one(t: f64, segments: &[Segment], fill: f64) -> f64 {
    segments
        .iter()
        .rev()
        .find(|s| s.contains(t))
        .map_or(fill, |s| s.predict_at(t))
}

/// Rate of a ratio phase: `ratio(t) * base(t)`, zero outside either sequence.
pub fn predict_time_ratio(times: &[f64], ratio: &[Segment], base: &[Segment]) -> Vec<f64> {
    times.iter().map(|&t| ratio_one(t, ratio, base)).collect()
}

pub(crate) fn ratio_one(t: f64, ratio: &[Segment], base: &[Segment]) -> f64 {
    predict_one(t, ratio, 0.0) * predict_one(t, base, 0.0)
}

/// Daily volumes for every day index in `left..=right`.
///
/// Returns an empty vector when `right < left`.
pub fn predict_daily_volumes(left: i64, right: i64, segments: &[Segment]) -> Vec<f64> {
    (left..=right)
        .map(|d| predict_one(d as f64, segments, 0.0))
        .collect()
}
