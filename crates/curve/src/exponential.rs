//! Exponential decline: `q(t) = q0 * exp(-D * (t - t0))`.
//!
//! `D > 0` declines, `D < 0` inclines, `D == 0` is flat. The flat case is
//! selected by exact equality so the closed forms never divide by zero.

/// Rate at `t`.
pub fn pred_exp(t: f64, t0: f64, q0: f64, d: f64) -> f64 {
    q0 * (-d * (t - t0)).exp()
}

/// First derivative of the rate at `t`.
pub fn slope_exp(t: f64, t0: f64, q0: f64, d: f64) -> f64 {
    -d * pred_exp(t, t0, q0, d)
}

/// Volume produced between `left` and `right`.
pub fn integral_exp(left: f64, right: f64, t0: f64, q0: f64, d: f64) -> f64 {
    if d == 0.0 {
        return q0 * (right - left);
    }
    q0 / d * ((-d * (left - t0)).exp() - (-d * (right - t0)).exp())
}

/// Time at which the volume produced since `left` reaches `volume`.
///
/// Returns NaN when the curve can never deliver that volume (the decline
/// tail integrates to less than `volume`).
pub fn inverse_integral_exp(volume: f64, left: f64, t0: f64, q0: f64, d: f64) -> f64 {
    if d == 0.0 {
        return left + volume / q0;
    }
    let inner = (-d * (left - t0)).exp() - volume * d / q0;
    t0 - inner.ln() / d
}

/// Decline constant of the exponential through `(t1, q1)` and `(t2, q2)`.
pub fn exp_get_d(t1: f64, q1: f64, t2: f64, q2: f64) -> f64 {
    -(q2 / q1).ln() / (t2 - t1)
}

/// Time at which the curve reaches `q_end`.
pub fn exp_get_t_end_from_q_end(t0: f64, q0: f64, d: f64, q_end: f64) -> f64 {
    t0 - (q_end / q0).ln() / d
}
