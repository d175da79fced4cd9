//! # wellcast-chart
//!
//! Assembles a well's production history and forecast into one chart:
//! a shared time axis with history, forecast, cumulative and ratio columns,
//! serializable to JSON.
//!
//! ## Quick Start
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use wellcast_chart::{ChartConfig, Phase, PhaseForecast, PhaseInput, WellData, assemble};
//! use wellcast_forecast::{DataFreq, ForecastOptions};
//! use wellcast_segment::{Flat, Segment};
//!
//! let oil = PhaseInput {
//!     history: vec![[100.0, 8.0], [101.0, 9.0]],
//!     forecast: PhaseForecast::Rate {
//!         segments: vec![Segment::Flat(Flat::fill(102.0, 104.0, 10.0))],
//!     },
//! };
//! let well = WellData {
//!     data_freq: DataFreq::Daily,
//!     phases: BTreeMap::from([(Phase::Oil, oil)]),
//! };
//!
//! let chart = assemble(&well, &ChartConfig::new(vec![Phase::Oil]), &ForecastOptions::new()).unwrap();
//! assert_eq!(chart.len(), 5);
//! assert_eq!(chart.column("cumsum_oil").unwrap()[4], Some(47.0));
//! ```

mod assemble;
mod config;
mod error;
mod output;
mod phase;

pub use assemble::assemble;
pub use config::ChartConfig;
pub use error::ChartError;
pub use output::{ChartData, to_json};
pub use phase::{Phase, PhaseForecast, PhaseInput, RatioColumn, WellData};
