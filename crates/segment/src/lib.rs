//! # wellcast-segment
//!
//! Decline-curve segments: one piece of a well's production-rate curve over
//! a closed day range `[start_idx, end_idx]`.
//!
//! A [`Segment`] is a closed sum over the supported curve shapes. Every
//! variant implements [`SegmentModel`] (predict, integrate, invert the
//! integral, slope, and the field lists used by rate scaling and time
//! shifting). Segments are plain `Copy` values: [`Segment::cut`] and the
//! `fill` constructors return new segments and never modify their input.
//!
//! ## Variants
//!
//! | `name` | Struct | Rate |
//! |--------|--------|------|
//! | `flat` | [`Flat`] | `c` |
//! | `empty` | [`Empty`] | `0` |
//! | `exp_dec`, `exp_inc` | [`Exponential`] | `q0 exp(-D (t - t0))` |
//! | `arps`, `arps_inc` | [`Arps`] | `q0 (1 + b D (t - t0))^(-1/b)` |
//! | `arps_modified` | [`ArpsModified`] | Arps until `sw_idx`, exponential after |
//! | `linear` | [`Linear`] | `k (t - t0) + q0` |
//!
//! ## Quick Start
//!
//! ```
//! use wellcast_segment::{SegmentModel, SegmentParams};
//!
//! let seg = SegmentParams::Arps {
//!     start_idx: 0.0,
//!     end_idx: 365.0,
//!     q_start: 1200.0,
//!     b: 2.0,
//!     d_eff: 0.5,
//! }
//! .fill();
//!
//! let (first, second) = seg.cut(100.0).unwrap();
//! assert_eq!(first.end_idx() + 1.0, second.start_idx());
//! assert_eq!(second.q_start(), seg.predict_at(100.0));
//! ```

mod arps;
mod arps_modified;
mod empty;
mod error;
mod exponential;
mod field;
mod flat;
mod linear;
mod model;
mod params;
mod segment;

pub use arps::Arps;
pub use arps_modified::ArpsModified;
pub use empty::Empty;
pub use error::SegmentError;
pub use exponential::Exponential;
pub use field::Field;
pub use flat::Flat;
pub use linear::Linear;
pub use model::SegmentModel;
pub use params::SegmentParams;
pub use segment::{Segment, SegmentKind};
