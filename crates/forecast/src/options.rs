//! Options shared by the volume and cumulative calculations.

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Default spacing, in days, of ratio-forecast samples.
pub const RATIO_EUR_INTERVAL: u32 = 30;

/// Granularity of historical production.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataFreq {
    /// One production row per day.
    #[default]
    Daily,
    /// One production row per calendar month; the row index may be any day
    /// inside the month.
    Monthly,
}

/// EUR algorithm for rate forecasts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EurMethod {
    /// [`eur`](crate::eur): one predict plus one integral per segment.
    #[default]
    Approximate,
    /// [`eur_self`](crate::eur_self): predicts both ends, integrates the middle.
    SelfApproximate,
    /// [`eur_precise`](crate::eur_precise): sums every day.
    Precise,
}

/// EUR algorithm for ratio forecasts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioEurMethod {
    /// [`ratio_eur`](crate::ratio_eur): every day.
    Exact,
    /// [`ratio_eur_interval`](crate::ratio_eur_interval): sampled, last
    /// sample weighted by the days it actually covers.
    #[default]
    Interval,
    /// [`ratio_eur_interval_old`](crate::ratio_eur_interval_old): sampled,
    /// every sample weighted by the full interval.
    IntervalOld,
}

/// Options for EUR, cumulative and shut-in calculations.
///
/// # Example
///
/// ```
/// use wellcast_forecast::{DataFreq, EurMethod, ForecastOptions};
///
/// let options = ForecastOptions::new()
///     .with_data_freq(DataFreq::Monthly)
///     .with_eur_method(EurMethod::Precise)
///     .with_stack_multiplier(true);
///
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOptions {
    data_freq: DataFreq,
    eur_method: EurMethod,
    ratio_eur_method: RatioEurMethod,
    ratio_interval: u32,
    stack_multiplier: bool,
}

impl ForecastOptions {
    /// Creates options with the defaults.
    ///
    /// Defaults: daily data, approximate EUR, interval ratio EUR sampled
    /// every [`RATIO_EUR_INTERVAL`] days, shut-in multipliers not stacked.
    pub fn new() -> Self {
        Self {
            data_freq: DataFreq::Daily,
            eur_method: EurMethod::Approximate,
            ratio_eur_method: RatioEurMethod::Interval,
            ratio_interval: RATIO_EUR_INTERVAL,
            stack_multiplier: false,
        }
    }

    /// Sets the production data frequency.
    pub fn with_data_freq(mut self, data_freq: DataFreq) -> Self {
        self.data_freq = data_freq;
        self
    }

    /// Sets the rate-forecast EUR algorithm.
    pub fn with_eur_method(mut self, eur_method: EurMethod) -> Self {
        self.eur_method = eur_method;
        self
    }

    /// Sets the ratio-forecast EUR algorithm.
    pub fn with_ratio_eur_method(mut self, ratio_eur_method: RatioEurMethod) -> Self {
        self.ratio_eur_method = ratio_eur_method;
        self
    }

    /// Sets the ratio sampling interval in days.
    pub fn with_ratio_interval(mut self, ratio_interval: u32) -> Self {
        self.ratio_interval = ratio_interval;
        self
    }

    /// Sets whether successive shut-in multipliers add up.
    pub fn with_stack_multiplier(mut self, stack_multiplier: bool) -> Self {
        self.stack_multiplier = stack_multiplier;
        self
    }

    /// Returns the production data frequency.
    pub fn data_freq(&self) -> DataFreq {
        self.data_freq
    }

    /// Returns the rate-forecast EUR algorithm.
    pub fn eur_method(&self) -> EurMethod {
        self.eur_method
    }

    /// Returns the ratio-forecast EUR algorithm.
    pub fn ratio_eur_method(&self) -> RatioEurMethod {
        self.ratio_eur_method
    }

    /// Returns the ratio sampling interval in days.
    pub fn ratio_interval(&self) -> u32 {
        self.ratio_interval
    }

    /// Returns whether shut-in multipliers stack.
    pub fn stack_multiplier(&self) -> bool {
        self.stack_multiplier
    }

    /// Validates these options.
    ///
    /// Returns an error if the ratio interval is zero.
    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.ratio_interval < 1 {
            return Err(ForecastError::InvalidRatioInterval {
                interval: self.ratio_interval,
            });
        }
        Ok(())
    }
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self::new()
    }
}
