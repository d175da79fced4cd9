//! Estimated ultimate recovery for rate forecasts.
//!
//! All three algorithms add the forecast volume from the day after the
//! last production (or `left_idx`, whichever is later) through
//! `right_idx` to the historical cumulative.

use tracing::warn;
use wellcast_calendar::{day_of, month_end_idx};
use wellcast_segment::{Segment, SegmentModel};

use crate::error::ForecastError;
use crate::options::{DataFreq, EurMethod};
use crate::predict::predict_one;

/// Historical production summarised for EUR calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct History {
    /// Cumulative historical volume.
    pub cum_data: f64,
    /// Index of the last production row, `None` without production.
    pub end_data_idx: Option<f64>,
    /// Granularity of the production rows.
    pub data_freq: DataFreq,
}

impl History {
    /// History ending at `end_data_idx` with cumulative `cum_data`.
    pub fn new(cum_data: f64, end_data_idx: f64, data_freq: DataFreq) -> Self {
        Self {
            cum_data,
            end_data_idx: Some(end_data_idx),
            data_freq,
        }
    }

    /// A well with no production.
    pub fn none() -> Self {
        Self {
            cum_data: 0.0,
            end_data_idx: None,
            data_freq: DataFreq::Daily,
        }
    }

    /// First day the forecast contributes to EUR.
    ///
    /// For monthly data the last row stands for its whole month, so the
    /// forecast starts the day after that month ends.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::Calendar`] if the last row's month cannot be
    /// resolved.
    pub fn forecast_start(&self, left_idx: f64) -> Result<f64, ForecastError> {
        let Some(end) = self.end_data_idx else {
            return Ok(left_idx);
        };
        let after = match self.data_freq {
            DataFreq::Daily => end + 1.0,
            DataFreq::Monthly => (month_end_idx(day_of(end))? + 1) as f64,
        };
        Ok(left_idx.max(after))
    }
}

/// Overlap of each segment with `[t_start, right]`.
fn pieces(
    segments: &[Segment],
    t_start: f64,
    right: f64,
) -> impl Iterator<Item = (&Segment, f64, f64)> {
    segments.iter().filter_map(move |s| {
        let l = s.start_idx().max(t_start);
        let r = s.end_idx().min(right);
        (l <= r).then_some((s, l, r))
    })
}

fn finish(history: &History, forecast: f64, method: &str) -> f64 {
    if !forecast.is_finite() {
        warn!(method, forecast, "non-finite forecast volume in EUR");
    }
    history.cum_data + forecast
}

/// Approximate EUR: per segment, `predict(l) + integral(l + 0.5, r + 0.5)`.
///
/// BEWARE OF USE, RESULTS ARE INACCURATE. The half-day shifted integral
/// only matches the daily sum for flat segments. Kept as is because
/// downstream reports depend on these exact values.
///
/// # Errors
///
/// Returns [`ForecastError::Calendar`] if the forecast start cannot be
/// resolved.
pub fn eur(
    history: &History,
    left_idx: f64,
    right_idx: f64,
    segments: &[Segment],
) -> Result<f64, ForecastError> {
    let t_start = history.forecast_start(left_idx)?;
    let forecast: f64 = pieces(segments, t_start, right_idx)
        .map(|(s, l, r)| s.predict_at(l) + s.integral(l + 0.5, r + 0.5))
        .sum();
    Ok(finish(history, forecast, "eur"))
}

/// Approximate EUR: per segment, both end days predicted and the days
/// between integrated over `[l + 0.5, r - 0.5]`.
///
/// BEWARE OF USE, RESULTS ARE INACCURATE.
///
/// # Errors
///
/// Returns [`ForecastError::Calendar`] if the forecast start cannot be
/// resolved.
pub fn eur_self(
    history: &History,
    left_idx: f64,
    right_idx: f64,
    segments: &[Segment],
) -> Result<f64, ForecastError> {
    let t_start = history.forecast_start(left_idx)?;
    let forecast: f64 = pieces(segments, t_start, right_idx)
        .map(|(s, l, r)| {
            if r > l {
                s.predict_at(l) + s.predict_at(r) + s.integral(l + 0.5, r - 0.5)
            } else {
                s.predict_at(l)
            }
        })
        .sum();
    Ok(finish(history, forecast, "eur_self"))
}

/// Exact EUR at daily granularity: the sum of the predicted rate on every
/// day from the forecast start through `right_idx`.
///
/// # Errors
///
/// Returns [`ForecastError::Calendar`] if the forecast start cannot be
/// resolved.
pub fn eur_precise(
    history: &History,
    left_idx: f64,
    right_idx: f64,
    segments: &[Segment],
) -> Result<f64, ForecastError> {
    let t_start = history.forecast_start(left_idx)?;
    let first = t_start.ceil() as i64;
    let last = right_idx.floor() as i64;
    let forecast: f64 = (first..=last)
        .map(|d| predict_one(d as f64, segments, 0.0))
        .sum();
    Ok(finish(history, forecast, "eur_precise"))
}

/// EUR with the chosen algorithm.
///
/// # Errors
///
/// Returns [`ForecastError::Calendar`] if the forecast start cannot be
/// resolved.
pub fn eur_by(
    method: EurMethod,
    history: &History,
    left_idx: f64,
    right_idx: f64,
    segments: &[Segment],
) -> Result<f64, ForecastError> {
    match method {
        EurMethod::Approximate => eur(history, left_idx, right_idx, segments),
        EurMethod::SelfApproximate => eur_self(history, left_idx, right_idx, segments),
        EurMethod::Precise => eur_precise(history, left_idx, right_idx, segments),
    }
}

/// [`eur_by`] evaluated at each of `right_idx`.
///
/// # Errors
///
/// Returns [`ForecastError::Calendar`] if the forecast start cannot be
/// resolved.
pub fn arr_eur(
    method: EurMethod,
    history: &History,
    left_idx: f64,
    right_idx: &[f64],
    segments: &[Segment],
) -> Result<Vec<f64>, ForecastError> {
    right_idx
        .iter()
        .map(|&r| eur_by(method, history, left_idx, r, segments))
        .collect()
}
