//! Minimal segment inputs and the `fill` step that completes them.

use serde::{Deserialize, Serialize};

use crate::arps::Arps;
use crate::arps_modified::ArpsModified;
use crate::empty::Empty;
use crate::exponential::Exponential;
use crate::flat::Flat;
use crate::linear::Linear;
use crate::segment::Segment;

/// The independent inputs of each segment variant.
///
/// Records carry the same `name` tags as [`Segment`]. [`fill`](Self::fill)
/// derives `q_end`, `D` and the switch fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum SegmentParams {
    Flat {
        start_idx: f64,
        end_idx: f64,
        q_start: f64,
    },
    Empty {
        start_idx: f64,
        end_idx: f64,
    },
    ExpDec {
        start_idx: f64,
        end_idx: f64,
        q_start: f64,
        #[serde(rename = "D_eff")]
        d_eff: f64,
    },
    ExpInc {
        start_idx: f64,
        end_idx: f64,
        q_start: f64,
        #[serde(rename = "D_eff")]
        d_eff: f64,
    },
    Arps {
        start_idx: f64,
        end_idx: f64,
        q_start: f64,
        b: f64,
        #[serde(rename = "D_eff")]
        d_eff: f64,
    },
    ArpsInc {
        start_idx: f64,
        end_idx: f64,
        q_start: f64,
        b: f64,
        #[serde(rename = "D_eff")]
        d_eff: f64,
    },
    ArpsModified {
        start_idx: f64,
        end_idx: f64,
        q_start: f64,
        b: f64,
        #[serde(rename = "D_eff")]
        d_eff: f64,
        #[serde(rename = "target_D_eff_sw")]
        target_d_eff_sw: f64,
    },
    Linear {
        start_idx: f64,
        end_idx: f64,
        q_start: f64,
        #[serde(rename = "D_eff")]
        d_eff: f64,
    },
}

impl SegmentParams {
    /// Builds the complete segment.
    pub fn fill(&self) -> Segment {
        match *self {
            SegmentParams::Flat {
                start_idx,
                end_idx,
                q_start,
            } => Segment::Flat(Flat::fill(start_idx, end_idx, q_start)),
            SegmentParams::Empty { start_idx, end_idx } => {
                Segment::Empty(Empty::new(start_idx, end_idx))
            }
            SegmentParams::ExpDec {
                start_idx,
                end_idx,
                q_start,
                d_eff,
            } => Segment::ExpDec(Exponential::fill(start_idx, end_idx, q_start, d_eff)),
            SegmentParams::ExpInc {
                start_idx,
                end_idx,
                q_start,
                d_eff,
            } => Segment::ExpInc(Exponential::fill(start_idx, end_idx, q_start, d_eff)),
            SegmentParams::Arps {
                start_idx,
                end_idx,
                q_start,
                b,
                d_eff,
            } => Segment::Arps(Arps::fill(start_idx, end_idx, q_start, b, d_eff)),
            SegmentParams::ArpsInc {
                start_idx,
                end_idx,
                q_start,
                b,
                d_eff,
            } => Segment::ArpsInc(Arps::fill(start_idx, end_idx, q_start, b, d_eff)),
            SegmentParams::ArpsModified {
                start_idx,
                end_idx,
                q_start,
                b,
                d_eff,
                target_d_eff_sw,
            } => Segment::ArpsModified(ArpsModified::fill(
                start_idx,
                end_idx,
                q_start,
                b,
                d_eff,
                target_d_eff_sw,
            )),
            SegmentParams::Linear {
                start_idx,
                end_idx,
                q_start,
                d_eff,
            } => Segment::Linear(Linear::fill(start_idx, end_idx, q_start, d_eff)),
        }
    }
}
