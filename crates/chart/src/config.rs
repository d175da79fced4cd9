//! Configuration for chart assembly.

use crate::error::ChartError;
use crate::phase::{Phase, RatioColumn};

/// Which columns a chart carries.
///
/// # Example
///
/// ```
/// use wellcast_chart::{ChartConfig, Phase, RatioColumn};
///
/// let config = ChartConfig::new(vec![Phase::Oil, Phase::Gas])
///     .with_ratios(vec![RatioColumn::GasOil])
///     .with_include_forecast(false);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    phases: Vec<Phase>,
    ratios: Vec<RatioColumn>,
    include_forecast: bool,
}

impl ChartConfig {
    /// Creates a configuration charting `phases`.
    ///
    /// Defaults: no ratio columns, forecast included past the end of
    /// history.
    pub fn new(phases: Vec<Phase>) -> Self {
        Self {
            phases,
            ratios: Vec::new(),
            include_forecast: true,
        }
    }

    /// Sets the derived ratio columns.
    pub fn with_ratios(mut self, ratios: Vec<RatioColumn>) -> Self {
        self.ratios = ratios;
        self
    }

    /// Sets whether the time axis extends over the forecast after history.
    pub fn with_include_forecast(mut self, include_forecast: bool) -> Self {
        self.include_forecast = include_forecast;
        self
    }

    /// Returns the charted phases.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Returns the derived ratio columns.
    pub fn ratios(&self) -> &[RatioColumn] {
        &self.ratios
    }

    /// Returns whether the forecast extends the time axis.
    pub fn include_forecast(&self) -> bool {
        self.include_forecast
    }

    /// Validates this configuration.
    ///
    /// Returns an error if no phase is charted or a ratio column needs a
    /// phase that is not.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.phases.is_empty() {
            return Err(ChartError::NoPhases);
        }
        for ratio in &self.ratios {
            for phase in [ratio.numerator(), ratio.denominator()] {
                if !self.phases.contains(&phase) {
                    return Err(ChartError::RatioPhaseMissing {
                        column: ratio.name(),
                        phase: phase.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(vec![Phase::Oil, Phase::Gas, Phase::Water])
    }
}
