//! Linear decline: `q(t) = k * (t - t0) + q0`.

/// Rate at `t`.
pub fn pred_linear(t: f64, t0: f64, q0: f64, k: f64) -> f64 {
    k * (t - t0) + q0
}

/// Volume produced between `left` and `right`.
pub fn integral_linear(left: f64, right: f64, t0: f64, q0: f64, k: f64) -> f64 {
    if k == 0.0 {
        return q0 * (right - left);
    }
    let l = left - t0;
    let r = right - t0;
    k / 2.0 * (r * r - l * l) + q0 * (r - l)
}

/// Time at which the volume produced since `left` reaches `volume`.
///
/// Solves `k/2 x^2 + q0 x - c = 0` for `x = t - t0` taking the `+sqrt` root.
pub fn inverse_integral_linear(volume: f64, left: f64, t0: f64, q0: f64, k: f64) -> f64 {
    if k == 0.0 {
        return left + volume / q0;
    }
    let l = left - t0;
    let c = volume + k / 2.0 * l * l + q0 * l;
    let disc = q0 * q0 + 2.0 * k * c;
    t0 + (-q0 + disc.sqrt()) / k
}

/// Slope of the line through `(t1, q1)` and `(t2, q2)`.
pub fn linear_get_k(t1: f64, q1: f64, t2: f64, q2: f64) -> f64 {
    (q2 - q1) / (t2 - t1)
}

/// Time at which the line reaches `q_end`.
pub fn linear_get_t_end_from_q_end(t0: f64, q0: f64, k: f64, q_end: f64) -> f64 {
    t0 + (q_end - q0) / k
}
