//! Collapsing runs of non-producing segments.

use wellcast_segment::{Empty, Segment, SegmentModel};

/// Replaces each run of consecutive empty or zero-rate flat segments with
/// one empty segment spanning the run. Producing segments are kept as is.
pub fn merge_empty(segments: &[Segment]) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    for seg in segments {
        if !seg.is_non_producing() {
            out.push(*seg);
            continue;
        }
        match out.last_mut() {
            Some(Segment::Empty(prev)) => prev.end_idx = prev.end_idx.max(seg.end_idx()),
            _ => out.push(Segment::Empty(Empty::new(seg.start_idx(), seg.end_idx()))),
        }
    }
    out
}
