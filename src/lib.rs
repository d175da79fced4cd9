//! # wellcast
//!
//! Segment-based decline-curve forecasting for oil and gas wells.
//!
//! The workspace is layered bottom-up:
//!
//! ```mermaid
//! graph LR
//!     calendar --> forecast
//!     curve --> segment --> forecast --> chart
//!     calendar --> chart
//! ```
//!
//! | Crate | Re-exported as | Purpose |
//! |-------|----------------|---------|
//! | `wellcast-calendar` | [`calendar`] | Day indices, calendar months, binning |
//! | `wellcast-curve` | [`curve`] | Closed-form decline math |
//! | `wellcast-segment` | [`segment`] | Forecast segment variants |
//! | `wellcast-forecast` | [`forecast`] | Sequence prediction, EUR, shut-ins |
//! | `wellcast-chart` | [`chart`] | History and forecast chart assembly |
//!
//! This package adds the TOML [`config`] document, its [`convert`]ers into
//! the crate configs, and tracing setup in [`logging`].
//!
//! ## Quick Start
//!
//! ```
//! use wellcast::config::WellcastConfig;
//! use wellcast::convert::build_forecast_options;
//! use wellcast::forecast::cum_from_t;
//! use wellcast::segment::{Flat, Segment};
//!
//! let config = WellcastConfig::from_toml_str("[forecast]\neur_method = \"precise\"").unwrap();
//! let options = build_forecast_options(&config.forecast).unwrap();
//!
//! let segments = [Segment::Flat(Flat::fill(10.0, 19.0, 5.0))];
//! let cum = cum_from_t(&[19.0], &[[9.0, 100.0]], &segments, &options).unwrap();
//! assert_eq!(cum, vec![150.0]);
//! ```

pub mod config;
pub mod convert;
pub mod logging;

pub use wellcast_calendar as calendar;
pub use wellcast_chart as chart;
pub use wellcast_curve as curve;
pub use wellcast_forecast as forecast;
pub use wellcast_segment as segment;
