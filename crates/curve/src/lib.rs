//! # wellcast-curve
//!
//! Closed-form decline-curve math: prediction, slope, definite integral and
//! integral inversion for exponential, Arps (hyperbolic) and linear curves,
//! plus effective-decline conversions and the modified-Arps switch.
//!
//! Every function is pure and takes its parameters explicitly. Time is a
//! day index, rates are per day and `D` is a nominal per-day decline.
//!
//! # Numeric conventions
//!
//! Domain violations (for example a negative base raised to a fractional
//! power once `1 + b*D*(t - t0)` turns negative) produce NaN rather than an
//! error. These functions run inside tight loops over many wells and one
//! bad value must not abort the batch. The flat (`D == 0`, `k == 0`) and
//! harmonic (`b == 1`) branches are selected by exact equality.
//!
//! | Curve | Prediction |
//! |-------|------------|
//! | Exponential | `q0 * exp(-D (t - t0))` |
//! | Arps | `q0 * (1 + b D (t - t0))^(-1/b)` |
//! | Linear | `k (t - t0) + q0` |
//!
//! # Quick start
//!
//! ```
//! use wellcast_curve::{arps_d_eff_to_d, integral_arps, inverse_integral_arps, pred_arps};
//!
//! let d = arps_d_eff_to_d(0.5, 2.0);
//! let q_end = pred_arps(365.0, 0.0, 1200.0, d, 2.0);
//! assert!(q_end < 1200.0);
//!
//! let volume = integral_arps(0.0, 365.0, 0.0, 1200.0, d, 2.0);
//! let t = inverse_integral_arps(volume, 0.0, 0.0, 1200.0, d, 2.0);
//! assert!((t - 365.0).abs() < 1e-6);
//! ```

mod arps;
mod bisect;
mod convert;
mod error;
mod exponential;
mod linear;
mod switch;

pub use arps::{
    B_ONE_SUB, B_ZERO_SUB, arps_get_d, arps_get_d_delta, arps_get_idx_from_d_new,
    arps_get_t_end_from_q_end, clamp_b, integral_arps, inverse_integral_arps, pred_arps,
    slope_arps,
};
pub use bisect::{MAX_BISECT_ITER, bisect};
pub use convert::{
    DAYS_IN_YEAR, arps_d_eff_to_d, arps_d_to_d_eff, exp_d_eff_to_d, exp_d_to_d_eff,
    linear_d_eff_to_k, linear_k_to_d_eff,
};
pub use error::CurveError;
pub use exponential::{
    exp_get_d, exp_get_t_end_from_q_end, integral_exp, inverse_integral_exp, pred_exp, slope_exp,
};
pub use linear::{
    integral_linear, inverse_integral_linear, linear_get_k, linear_get_t_end_from_q_end,
    pred_linear,
};
pub use switch::{
    NEVER_SWITCH_OFFSET, SwitchPoint, arps_modified_get_d, arps_sw, pred_arps_modified,
};
