//! Shut-in windows spliced into a forecast.

use serde::{Deserialize, Serialize};
use tracing::debug;
use wellcast_segment::{Empty, Segment, SegmentModel};

use crate::error::ForecastError;
use crate::options::ForecastOptions;

fn default_multiplier() -> f64 {
    1.0
}

/// A period of forced zero production followed by an optional rate change.
///
/// The forecast that would have started inside the window is delayed until
/// after it. Segments after the window are multiplied by `multiplier`,
/// until `scale_post_shut_in_end_idx` if given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShutIn {
    /// First shut-in day.
    pub start_idx: f64,
    /// Last shut-in day.
    pub end_idx: f64,
    /// Rate multiplier after the window.
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
    /// Day from which the multiplier no longer applies, in the positions
    /// the segments have after the delay.
    #[serde(default)]
    pub scale_post_shut_in_end_idx: Option<f64>,
}

impl ShutIn {
    /// A shut-in over `[start_idx, end_idx]` that leaves later rates unchanged.
    pub fn new(start_idx: f64, end_idx: f64) -> Self {
        Self {
            start_idx,
            end_idx,
            multiplier: 1.0,
            scale_post_shut_in_end_idx: None,
        }
    }

    /// Sets the post-window rate multiplier.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the day from which the multiplier stops applying.
    pub fn with_scale_post_shut_in_end_idx(mut self, idx: f64) -> Self {
        self.scale_post_shut_in_end_idx = Some(idx);
        self
    }

    /// Number of days in the window.
    pub fn len_days(&self) -> f64 {
        self.end_idx - self.start_idx + 1.0
    }

    /// Validates this shut-in.
    ///
    /// Returns an error if the window ends before it starts or the
    /// multiplier is negative or non-finite.
    pub fn validate(&self) -> Result<(), ForecastError> {
        let bad_window =
            self.start_idx.is_nan() || self.end_idx.is_nan() || self.end_idx < self.start_idx;
        let bad_multiplier = !self.multiplier.is_finite() || self.multiplier < 0.0;
        if bad_window || bad_multiplier {
            return Err(ForecastError::InvalidShutIn {
                start_idx: self.start_idx,
                end_idx: self.end_idx,
                multiplier: self.multiplier,
            });
        }
        Ok(())
    }
}

/// Copy of `segments` with every rate field multiplied by `factor`.
pub fn scale_segments_q(segments: &[Segment], factor: f64) -> Vec<Segment> {
    segments.iter().map(|s| s.scaled(factor)).collect()
}

/// Copy of `segments` moved `delta` days later.
pub fn shift_segments_idx(segments: &[Segment], delta: f64) -> Vec<Segment> {
    segments.iter().map(|s| s.shifted(delta)).collect()
}

/// Unscaled segments with the multiplier each one will finally get.
///
/// Cutting and shifting commute with rate scaling, so multipliers are
/// tracked separately and applied once at the end.
struct Spliced {
    segments: Vec<Segment>,
    multipliers: Vec<f64>,
}

impl Spliced {
    fn new(segments: &[Segment]) -> Self {
        Self {
            segments: segments.to_vec(),
            multipliers: vec![1.0; segments.len()],
        }
    }

    /// Segment containing `start`, else the first starting inside the window.
    fn locate(&self, start: f64, end: f64) -> Option<usize> {
        self.segments
            .iter()
            .position(|s| s.contains(start))
            .or_else(|| {
                self.segments
                    .iter()
                    .position(|s| start <= s.start_idx() && s.start_idx() <= end)
            })
    }

    /// Cuts segment `k` at `idx`, both halves keeping its multiplier.
    fn split(&mut self, k: usize, idx: f64) -> Result<(), ForecastError> {
        let (first, second) = self.segments[k].cut(idx)?;
        self.segments[k] = first;
        self.segments.insert(k + 1, second);
        self.multipliers.insert(k + 1, self.multipliers[k]);
        Ok(())
    }

    /// Index of the first segment from `from` on that starts at or after
    /// `idx`, cutting a segment that straddles it.
    fn boundary(&mut self, idx: f64, from: usize) -> Result<usize, ForecastError> {
        for k in from..self.segments.len() {
            let seg = self.segments[k];
            if idx <= seg.start_idx() {
                return Ok(k);
            }
            if idx <= seg.end_idx() {
                self.split(k, idx)?;
                return Ok(k + 1);
            }
        }
        debug!(idx, "rescale boundary past the end of the forecast");
        Ok(self.segments.len())
    }

    fn add(&mut self, shutin: &ShutIn, stack_multiplier: bool) -> Result<(), ForecastError> {
        let (start, end) = (shutin.start_idx, shutin.end_idx);
        let Some(found) = self.locate(start, end) else {
            debug!(start, end, "shut-in overlaps no segment, skipped");
            return Ok(());
        };

        let mut first_moved = found;
        if self.segments[found].start_idx() < start {
            self.split(found, start)?;
            first_moved = found + 1;
        }

        let delta = end + 1.0 - self.segments[first_moved].start_idx();
        for seg in &mut self.segments[first_moved..] {
            seg.shift_idx(delta);
        }
        self.segments
            .insert(first_moved, Segment::Empty(Empty::new(start, end)));
        self.multipliers.insert(first_moved, 1.0);

        let after = first_moved + 1;
        let restore_from = match shutin.scale_post_shut_in_end_idx {
            Some(idx) => self.boundary(idx, after)?,
            None => self.segments.len(),
        };
        for m in &mut self.multipliers[after..restore_from] {
            *m = if stack_multiplier {
                *m + shutin.multiplier - 1.0
            } else {
                shutin.multiplier
            };
        }
        Ok(())
    }

    fn finish(self) -> Vec<Segment> {
        self.segments
            .into_iter()
            .zip(self.multipliers)
            .map(|(s, m)| if m == 1.0 { s } else { s.scaled(m) })
            .collect()
    }
}

/// Splices `shutins` into a copy of `segments`, in list order.
///
/// For each shut-in `[s, e]`:
///
/// 1. the segment containing `s` (or else the first one starting inside the
///    window) is located; a shut-in touching no segment is skipped;
/// 2. that segment is cut at `s` if it starts earlier;
/// 3. it and everything after it move later so they resume at `e + 1`,
///    and an empty segment fills `[s, e]`;
/// 4. the moved segments get the shut-in multiplier (added to their
///    current one minus one when `options.stack_multiplier()` is set, replacing it
///    otherwise), except from `scale_post_shut_in_end_idx` on, where the
///    segment is cut and the previous multiplier kept.
///
/// Each shut-in is read against positions already moved by the ones
/// before it.
///
/// # Errors
///
/// - [`ForecastError::InvalidShutIn`] for a malformed shut-in.
/// - [`ForecastError::Segment`] if a cut falls on a non-integer index
///   inside a segment's first day.
#[tracing::instrument(skip_all, fields(n_shutins = shutins.len(), n_segments = segments.len()))]
pub fn apply_shutin(
    shutins: &[ShutIn],
    segments: &[Segment],
    options: &ForecastOptions,
) -> Result<Vec<Segment>, ForecastError> {
    let mut spliced = Spliced::new(segments);
    for shutin in shutins {
        shutin.validate()?;
        spliced.add(shutin, options.stack_multiplier())?;
    }
    Ok(spliced.finish())
}
