//! EUR for phases forecast as a ratio of another phase.

use tracing::debug;
use wellcast_segment::{Segment, SegmentModel};

use crate::error::ForecastError;
use crate::eur::History;
use crate::options::RatioEurMethod;
use crate::predict::ratio_one;

/// First index where both sequences are defined, `None` if either is empty.
pub(crate) fn ratio_left(ratio: &[Segment], base: &[Segment]) -> Option<f64> {
    let r = ratio.first()?.start_idx();
    let b = base.first()?.start_idx();
    Some(r.max(b))
}

/// Exact ratio EUR: the sum of `ratio * base` on every day from the
/// forecast start through `right_idx`.
///
/// Without ratio or base segments the historical cumulative is returned.
///
/// # Errors
///
/// Returns [`ForecastError::Calendar`] if the forecast start cannot be
/// resolved.
pub fn ratio_eur(
    history: &History,
    right_idx: f64,
    ratio: &[Segment],
    base: &[Segment],
) -> Result<f64, ForecastError> {
    let Some(left) = ratio_left(ratio, base) else {
        debug!("ratio forecast without segments, returning history");
        return Ok(history.cum_data);
    };
    let t_start = history.forecast_start(left)?;
    let first = t_start.ceil() as i64;
    let last = right_idx.floor() as i64;
    let forecast: f64 = (first..=last)
        .map(|d| ratio_one(d as f64, ratio, base))
        .sum();
    Ok(history.cum_data + forecast)
}

fn sampled(
    history: &History,
    right_idx: f64,
    ratio: &[Segment],
    base: &[Segment],
    interval: u32,
    full_weight: bool,
) -> Result<f64, ForecastError> {
    if interval < 1 {
        return Err(ForecastError::InvalidRatioInterval { interval });
    }
    let Some(left) = ratio_left(ratio, base) else {
        debug!("ratio forecast without segments, returning history");
        return Ok(history.cum_data);
    };
    let step = f64::from(interval);
    let mut t = history.forecast_start(left)?.ceil();
    let mut forecast = 0.0;
    while t <= right_idx {
        let weight = if full_weight {
            step
        } else {
            step.min(right_idx - t + 1.0)
        };
        forecast += ratio_one(t, ratio, base) * weight;
        t += step;
    }
    Ok(history.cum_data + forecast)
}

/// Sampled ratio EUR: the rate every `interval` days from the forecast
/// start, each sample standing for the days up to the next one. The last
/// sample only counts the days left before `right_idx`.
///
/// BEWARE OF USE, RESULTS ARE INACCURATE.
///
/// # Errors
///
/// - [`ForecastError::InvalidRatioInterval`] if `interval` is zero.
/// - [`ForecastError::Calendar`] if the forecast start cannot be resolved.
pub fn ratio_eur_interval(
    history: &History,
    right_idx: f64,
    ratio: &[Segment],
    base: &[Segment],
    interval: u32,
) -> Result<f64, ForecastError> {
    sampled(history, right_idx, ratio, base, interval, false)
}

/// Like [`ratio_eur_interval`] but every sample, the last included, is
/// weighted by the full interval.
///
/// BEWARE OF USE, RESULTS ARE INACCURATE. Overshoots by up to
/// `interval - 1` days of production.
///
/// # Errors
///
/// - [`ForecastError::InvalidRatioInterval`] if `interval` is zero.
/// - [`ForecastError::Calendar`] if the forecast start cannot be resolved.
pub fn ratio_eur_interval_old(
    history: &History,
    right_idx: f64,
    ratio: &[Segment],
    base: &[Segment],
    interval: u32,
) -> Result<f64, ForecastError> {
    sampled(history, right_idx, ratio, base, interval, true)
}

/// Ratio EUR with the chosen algorithm.
///
/// # Errors
///
/// See the individual algorithms.
pub fn ratio_eur_by(
    method: RatioEurMethod,
    history: &History,
    right_idx: f64,
    ratio: &[Segment],
    base: &[Segment],
    interval: u32,
) -> Result<f64, ForecastError> {
    match method {
        RatioEurMethod::Exact => ratio_eur(history, right_idx, ratio, base),
        RatioEurMethod::Interval => ratio_eur_interval(history, right_idx, ratio, base, interval),
        RatioEurMethod::IntervalOld => {
            ratio_eur_interval_old(history, right_idx, ratio, base, interval)
        }
    }
}
