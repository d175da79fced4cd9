//! Calendar-month and arbitrary-bucket volume sums.

use tracing::warn;
use wellcast_calendar::{Month, day_of, month_day_grid, weighted_histogram};
use wellcast_segment::Segment;

use crate::error::ForecastError;
use crate::predict::predict;

/// Sums daily volumes into calendar months.
///
/// `days` must be ascending. Returns the first day index of each month
/// present and that month's total. Totals come from one running sum
/// differenced at month boundaries. NaN volumes count as zero.
///
/// # Errors
///
/// - [`ForecastError::LengthMismatch`] if `days` and `volumes` differ in
///   length.
/// - [`ForecastError::Calendar`] for unrepresentable day indices.
pub fn sum_forecast_by_month(
    days: &[i64],
    volumes: &[f64],
) -> Result<(Vec<i64>, Vec<f64>), ForecastError> {
    if days.len() != volumes.len() {
        return Err(ForecastError::LengthMismatch {
            expected: days.len(),
            got: volumes.len(),
        });
    }

    let mut cumsum = Vec::with_capacity(volumes.len());
    let mut running = 0.0;
    let mut n_nan = 0usize;
    for &v in volumes {
        if v.is_nan() {
            n_nan += 1;
        } else {
            running += v;
        }
        cumsum.push(running);
    }
    if n_nan > 0 {
        warn!(n_nan, "NaN daily volumes treated as zero");
    }

    let mut months: Vec<i64> = Vec::new();
    let mut month_last_pos: Vec<usize> = Vec::new();
    for (pos, &d) in days.iter().enumerate() {
        let first = Month::of_idx(d)?.first_idx();
        if months.last() != Some(&first) {
            if !months.is_empty() {
                month_last_pos.push(pos - 1);
            }
            months.push(first);
        }
    }
    if !days.is_empty() {
        month_last_pos.push(days.len() - 1);
    }

    let mut totals = Vec::with_capacity(months.len());
    let mut prev = 0.0;
    for &pos in &month_last_pos {
        totals.push(cumsum[pos] - prev);
        prev = cumsum[pos];
    }
    Ok((months, totals))
}

/// Forecast volume of the calendar month containing each of `times`.
///
/// The daily grid spans whole months from the earliest to the latest
/// requested month.
///
/// # Errors
///
/// Returns [`ForecastError::Calendar`] for unrepresentable day indices.
pub fn predict_monthly_volumes(
    times: &[f64],
    segments: &[Segment],
) -> Result<Vec<f64>, ForecastError> {
    let days: Vec<i64> = times.iter().map(|&t| day_of(t)).collect();
    let (Some(&first), Some(&last)) = (days.iter().min(), days.iter().max()) else {
        return Ok(Vec::new());
    };
    let grid = month_day_grid(first, last)?;
    let grid_t: Vec<f64> = grid.iter().map(|&d| d as f64).collect();
    let daily = predict(&grid_t, segments, 0.0);
    let (months, totals) = sum_forecast_by_month(&grid, &daily)?;

    days.iter()
        .map(|&d| {
            let first = Month::of_idx(d)?.first_idx();
            let pos = months.partition_point(|&m| m < first);
            Ok(totals[pos])
        })
        .collect()
}

/// Forecast volume in each bucket `[edges[i], edges[i + 1])`.
///
/// Days from `edges[0]` up to the last edge are predicted and binned.
/// Fewer than two edges yield no buckets.
///
/// # Errors
///
/// Returns [`ForecastError::UnsortedEdges`] if `edges` is not strictly
/// increasing.
pub fn predict_monthly_volumes_relative(
    edges: &[f64],
    segments: &[Segment],
) -> Result<Vec<f64>, ForecastError> {
    let (Some(&lo), Some(&hi)) = (edges.first(), edges.last()) else {
        return Ok(Vec::new());
    };
    if edges.len() < 2 {
        return Ok(Vec::new());
    }
    if let Some(i) = edges.windows(2).position(|w| w[0].is_nan() || w[1].is_nan() || w[1] <= w[0]) {
        return Err(ForecastError::UnsortedEdges {
            position: i + 1,
            edge: edges[i + 1],
            prev: edges[i],
        });
    }
    let first = lo.floor() as i64;
    let last = hi.ceil() as i64 - 1;
    let days: Vec<f64> = (first..=last).map(|d| d as f64).collect();
    let daily = predict(&days, segments, 0.0);
    Ok(weighted_histogram(&days, &daily, edges)?)
}
