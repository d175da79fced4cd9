//! # wellcast-forecast
//!
//! Operations over a well's forecast: an ordered, non-overlapping sequence
//! of [`Segment`](wellcast_segment::Segment)s for one phase.
//!
//! Every function takes the sequence by slice and returns new values; the
//! caller's segments are never modified, so one base forecast can feed
//! several projections (with and without shut-ins, say) in the same request.
//!
//! "Nothing to forecast" (no segments, a ratio phase without base) is not
//! an error: the historical cumulative comes back unchanged.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     S["segments"] --> P["predict / predict_time_ratio"]
//!     P --> V["predict_monthly_volumes"]
//!     S --> E["eur / eur_self / eur_precise"]
//!     S --> R["ratio_eur*"]
//!     H["production rows"] --> C["cum_from_t / cum_from_t_ratio"]
//!     E --> C
//!     S --> X["apply_shutin / merge_empty / truncate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use wellcast_forecast::{ForecastOptions, ShutIn, apply_shutin, cum_from_t};
//! use wellcast_segment::{Flat, Segment};
//!
//! let options = ForecastOptions::new();
//! let forecast = vec![Segment::Flat(Flat::fill(0.0, 99.0, 10.0))];
//! let shut = apply_shutin(&[ShutIn::new(20.0, 29.0)], &forecast, &options).unwrap();
//!
//! let cum = cum_from_t(&[29.0, 39.0], &[], &shut, &options).unwrap();
//! assert_eq!(cum, vec![200.0, 300.0]);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `predict` | Point and daily predictions |
//! | `volumes` | Calendar-month and bucket sums |
//! | `eur` | EUR for rate forecasts |
//! | `ratio` | EUR for ratio forecasts |
//! | `cum` | Cumulative volume from history plus forecast |
//! | `merge` | Collapsing non-producing runs |
//! | `shutin` | Shut-in splicing and sequence scaling |
//! | `truncate` | Forecast start/end dates |
//! | `options` | `ForecastOptions` |
//! | `error` | Error types |

mod cum;
mod error;
mod eur;
mod merge;
mod options;
mod predict;
mod ratio;
mod shutin;
mod truncate;
mod volumes;

pub use cum::{cum_from_t, cum_from_t_ratio};
pub use error::ForecastError;
pub use eur::{History, arr_eur, eur, eur_by, eur_precise, eur_self};
pub use merge::merge_empty;
pub use options::{DataFreq, EurMethod, ForecastOptions, RATIO_EUR_INTERVAL, RatioEurMethod};
pub use predict::{predict, predict_daily_volumes, predict_time_ratio};
pub use ratio::{ratio_eur, ratio_eur_by, ratio_eur_interval, ratio_eur_interval_old};
pub use shutin::{ShutIn, apply_shutin, scale_segments_q, shift_segments_idx};
pub use truncate::{
    apply_forecast_end_date, apply_forecast_start_date, truncate_end, truncate_start,
};
pub use volumes::{
    predict_monthly_volumes, predict_monthly_volumes_relative, sum_forecast_by_month,
};
