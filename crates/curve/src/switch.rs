//! Hyperbolic-to-exponential switch for modified Arps curves.
//!
//! A modified Arps curve follows Arps until its instantaneous decline falls
//! to a limit, then continues exponentially from that point.

use crate::arps::{arps_get_d, arps_get_d_delta, arps_get_idx_from_d_new, pred_arps};
use crate::bisect::bisect;
use crate::convert::{arps_d_to_d_eff, exp_d_eff_to_d, exp_d_to_d_eff};
use crate::error::CurveError;
use crate::exponential::pred_exp;

/// Offset past end of life used as the "never switches" sentinel.
pub const NEVER_SWITCH_OFFSET: f64 = 300_000.0;

/// Where and how a modified Arps curve turns exponential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchPoint {
    /// Index of the switch; may lie outside the segment.
    pub sw_idx: f64,
    /// Rate at the switch.
    pub q_sw: f64,
    /// Arps secant-effective decline the curve actually has at the switch.
    pub realized_d_eff_sw: f64,
    /// Nominal decline of the exponential tail.
    pub d_exp: f64,
    /// Effective decline of the exponential tail.
    pub d_exp_eff: f64,
}

/// Locates the switch of an Arps curve with limit decline `d_lim_eff`.
///
/// - `d_lim_eff == 0` means the curve never switches: `sw_idx` is
///   `t_end_life + NEVER_SWITCH_OFFSET`.
/// - If the initial decline is already at or below the limit the switch is
///   at `start_idx`.
/// - Otherwise the switch is where the instantaneous decline equals the
///   limit. With `enforce_sw`, a switch before `end_data_idx` is pushed to
///   `end_data_idx` so the hyperbolic regime spans all historical data.
///
/// The exponential tail never declines slower than the limit.
#[allow(clippy::too_many_arguments)]
pub fn arps_sw(
    q_start: f64,
    b: f64,
    d: f64,
    d_lim_eff: f64,
    start_idx: f64,
    end_data_idx: f64,
    t_end_life: f64,
    enforce_sw: bool,
) -> SwitchPoint {
    let d_lim = exp_d_eff_to_d(d_lim_eff);
    let sw_idx = if d_lim_eff == 0.0 {
        t_end_life + NEVER_SWITCH_OFFSET
    } else if d <= d_lim {
        start_idx
    } else {
        let analytic = arps_get_idx_from_d_new(start_idx, d, d_lim, b);
        if enforce_sw && analytic < end_data_idx {
            end_data_idx
        } else {
            analytic
        }
    };

    let d_sw = arps_get_d_delta(d, b, sw_idx - start_idx);
    let d_exp = d_sw.max(d_lim);
    SwitchPoint {
        sw_idx,
        q_sw: pred_arps(sw_idx, start_idx, q_start, d, b),
        realized_d_eff_sw: arps_d_to_d_eff(d_sw, b),
        d_exp,
        d_exp_eff: exp_d_to_d_eff(d_exp),
    }
}

/// Rate of a modified Arps curve at `t`.
pub fn pred_arps_modified(t: f64, t0: f64, q0: f64, d: f64, b: f64, sw: &SwitchPoint) -> f64 {
    if t <= sw.sw_idx {
        pred_arps(t, t0, q0, d, b)
    } else {
        pred_exp(t, sw.sw_idx, sw.q_sw, sw.d_exp)
    }
}

/// Tolerance on D used when solving for a modified Arps decline.
const GET_D_TOL: f64 = 1e-14;

/// Smallest decline tried as the lower end of the bracket.
const GET_D_FLOOR: f64 = 1e-12;

/// Recovers the initial nominal decline of a modified Arps curve that starts
/// at `(start_idx, q_start)`, reaches `(end_idx, q_end)` and switches at
/// `target_d_eff_sw`.
///
/// There is no closed form once the switch lands inside the segment, so the
/// decline is found by bisection between a near-zero decline and the pure
/// Arps decline through the two points (the switch only steepens the tail).
///
/// # Errors
///
/// Returns [`CurveError::BisectNoSignChange`] when no such curve exists,
/// e.g. `q_end` is above what even a switch at `start_idx` allows.
pub fn arps_modified_get_d(
    start_idx: f64,
    q_start: f64,
    end_idx: f64,
    q_end: f64,
    b: f64,
    target_d_eff_sw: f64,
) -> Result<f64, CurveError> {
    let upper = arps_get_d(start_idx, q_start, end_idx, q_end, b);
    let residual = |d: f64| {
        let sw = arps_sw(
            q_start,
            b,
            d,
            target_d_eff_sw,
            start_idx,
            start_idx,
            end_idx,
            false,
        );
        pred_arps_modified(end_idx, start_idx, q_start, d, b, &sw) - q_end
    };
    bisect(residual, GET_D_FLOOR, upper, GET_D_TOL)
}
