//! Phases, their inputs and the derived ratio columns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wellcast_forecast::DataFreq;
use wellcast_segment::Segment;

/// A produced fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Oil,
    Gas,
    Water,
}

impl Phase {
    /// Column name of the phase.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Oil => "oil",
            Phase::Gas => "gas",
            Phase::Water => "water",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A derived `numerator/denominator` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioColumn {
    /// Gas-oil ratio.
    #[serde(rename = "gas/oil")]
    GasOil,
    /// Condensate yield.
    #[serde(rename = "oil/gas")]
    OilGas,
    /// Water-oil ratio.
    #[serde(rename = "water/oil")]
    WaterOil,
    /// Water-gas ratio.
    #[serde(rename = "water/gas")]
    WaterGas,
    #[serde(rename = "oil/water")]
    OilWater,
    #[serde(rename = "gas/water")]
    GasWater,
}

impl RatioColumn {
    /// Every supported ratio column.
    pub const ALL: [RatioColumn; 6] = [
        RatioColumn::GasOil,
        RatioColumn::OilGas,
        RatioColumn::WaterOil,
        RatioColumn::WaterGas,
        RatioColumn::OilWater,
        RatioColumn::GasWater,
    ];

    /// Phase on top.
    pub fn numerator(self) -> Phase {
        match self {
            RatioColumn::GasOil | RatioColumn::GasWater => Phase::Gas,
            RatioColumn::OilGas | RatioColumn::OilWater => Phase::Oil,
            RatioColumn::WaterOil | RatioColumn::WaterGas => Phase::Water,
        }
    }

    /// Phase underneath.
    pub fn denominator(self) -> Phase {
        match self {
            RatioColumn::GasOil | RatioColumn::WaterOil => Phase::Oil,
            RatioColumn::OilGas | RatioColumn::WaterGas => Phase::Gas,
            RatioColumn::OilWater | RatioColumn::GasWater => Phase::Water,
        }
    }

    /// Column name, e.g. `gas/oil`.
    pub fn name(self) -> String {
        format!("{}/{}", self.numerator(), self.denominator())
    }
}

/// How a phase is forecast.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PhaseForecast {
    /// History only.
    #[default]
    None,
    /// Absolute rate segments.
    Rate {
        /// The rate forecast.
        segments: Vec<Segment>,
    },
    /// Rate of `base` times these ratio segments.
    Ratio {
        /// Phase the ratio applies to; it must have a rate forecast.
        base: Phase,
        /// The ratio forecast.
        segments: Vec<Segment>,
    },
}

impl PhaseForecast {
    /// Segments of this forecast, empty for [`PhaseForecast::None`].
    pub fn segments(&self) -> &[Segment] {
        match self {
            PhaseForecast::None => &[],
            PhaseForecast::Rate { segments } | PhaseForecast::Ratio { segments, .. } => segments,
        }
    }
}

/// History and forecast of one phase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseInput {
    /// `[day index, volume]` rows sorted by index.
    #[serde(default)]
    pub history: Vec<[f64; 2]>,
    /// Forecast of the phase.
    #[serde(default)]
    pub forecast: PhaseForecast,
}

/// Everything known about a well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WellData {
    /// Granularity of every phase's history.
    #[serde(default)]
    pub data_freq: DataFreq,
    /// Inputs per phase.
    pub phases: BTreeMap<Phase, PhaseInput>,
}
