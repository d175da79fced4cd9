//! Serializable chart output.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ChartError;

/// A well chart: one row per time, one column per series.
///
/// Columns are keyed `<phase>` (history), `<phase>_forecast`,
/// `cumsum_<phase>` and `<numerator>/<denominator>` for ratios. Missing
/// values are `None` and render as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// ISO date of each row.
    pub time: Vec<String>,
    /// Days since the first row.
    pub relative_idx: Vec<i64>,
    /// Series by column name.
    #[serde(flatten)]
    pub columns: BTreeMap<String, Vec<Option<f64>>>,
}

impl ChartData {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when the chart has no rows.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// A column by name.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        self.columns.get(name).map(Vec::as_slice)
    }
}

/// Serialize a chart to a JSON string.
pub fn to_json(chart: &ChartData) -> Result<String, ChartError> {
    serde_json::to_string_pretty(chart).map_err(|e| ChartError::Serialization {
        reason: e.to_string(),
    })
}
