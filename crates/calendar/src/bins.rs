//! Histogram-style binning of day indices.

use crate::error::CalendarError;

/// Returns, for each value, the index of the bin it falls into.
///
/// Bin `i` (1-based) is the half-open interval `[edges[i - 1], edges[i])`.
/// Values below the first edge get 0 and values at or above the last edge
/// get `edges.len()`, matching the usual `digitize` convention.
///
/// # Errors
///
/// Returns [`CalendarError::UnsortedBins`] if `edges` is not strictly
/// increasing.
pub fn digitize(values: &[f64], edges: &[f64]) -> Result<Vec<usize>, CalendarError> {
    check_edges(edges)?;
    Ok(values
        .iter()
        .map(|&v| edges.partition_point(|&e| e <= v))
        .collect())
}

/// Sums `weights` into the bins delimited by `edges`.
///
/// The result has `edges.len() - 1` entries; entry `i` holds the sum of the
/// weights whose value lies in `[edges[i], edges[i + 1])`. Values outside
/// all bins are ignored, NaN weights contribute nothing.
///
/// # Errors
///
/// Returns [`CalendarError::UnsortedBins`] if `edges` is not strictly
/// increasing.
pub fn weighted_histogram(
    values: &[f64],
    weights: &[f64],
    edges: &[f64],
) -> Result<Vec<f64>, CalendarError> {
    let bins = digitize(values, edges)?;
    let n_bins = edges.len().saturating_sub(1);
    let mut out = vec![0.0; n_bins];
    for (&b, &w) in bins.iter().zip(weights.iter()) {
        if b == 0 || b > n_bins || w.is_nan() {
            continue;
        }
        out[b - 1] += w;
    }
    Ok(out)
}

fn check_edges(edges: &[f64]) -> Result<(), CalendarError> {
    for (i, w) in edges.windows(2).enumerate() {
        if w[1].partial_cmp(&w[0]) != Some(std::cmp::Ordering::Greater) {
            return Err(CalendarError::UnsortedBins {
                position: i + 1,
                value: w[1],
            });
        }
    }
    Ok(())
}
