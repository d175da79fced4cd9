//! Arps hyperbolic decline: `q(t) = q0 * (1 + b*D*(t - t0))^(-1/b)`.
//!
//! `b == 1` (harmonic) has its own logarithmic integral and is selected by
//! exact equality. Segment constructors keep `b` off 0 and 1 with
//! [`clamp_b`], so the harmonic branch is only reached by direct callers.
//!
//! When `1 + b*D*(t - t0) <= 0` the power is undefined and the functions
//! return NaN; callers keep `t` inside the curve's domain.

/// Substitute for `b == 1` inside segments.
pub const B_ONE_SUB: f64 = 0.9999999;

/// Substitute for `b == 0` inside segments.
pub const B_ZERO_SUB: f64 = 0.0000001;

/// Keeps `b` away from the `b == 0` and `b == 1` singularities.
pub fn clamp_b(b: f64) -> f64 {
    if (b - 1.0).abs() < B_ZERO_SUB {
        B_ONE_SUB
    } else if b.abs() < B_ZERO_SUB {
        B_ZERO_SUB
    } else {
        b
    }
}

fn base(t: f64, t0: f64, d: f64, b: f64) -> f64 {
    1.0 + b * d * (t - t0)
}

fn pow_or_nan(x: f64, e: f64) -> f64 {
    if x < 0.0 { f64::NAN } else { x.powf(e) }
}

/// Rate at `t`.
pub fn pred_arps(t: f64, t0: f64, q0: f64, d: f64, b: f64) -> f64 {
    q0 * pow_or_nan(base(t, t0, d, b), -1.0 / b)
}

/// First derivative of the rate at `t`.
pub fn slope_arps(t: f64, t0: f64, q0: f64, d: f64, b: f64) -> f64 {
    -d * q0 * pow_or_nan(base(t, t0, d, b), -1.0 / b - 1.0)
}

/// Volume produced between `left` and `right`.
pub fn integral_arps(left: f64, right: f64, t0: f64, q0: f64, d: f64, b: f64) -> f64 {
    if b == 1.0 {
        return q0 / d * (base(right, t0, d, b).ln() - base(left, t0, d, b).ln());
    }
    let q_left = pred_arps(left, t0, q0, d, b);
    let q_right = pred_arps(right, t0, q0, d, b);
    q0.powf(b) / (d * (1.0 - b)) * (q_left.powf(1.0 - b) - q_right.powf(1.0 - b))
}

/// Time at which the volume produced since `left` reaches `volume`.
pub fn inverse_integral_arps(volume: f64, left: f64, t0: f64, q0: f64, d: f64, b: f64) -> f64 {
    if b == 1.0 {
        return t0 + (base(left, t0, d, b) * (volume * d / q0).exp() - 1.0) / d;
    }
    let q_left = pred_arps(left, t0, q0, d, b);
    let q_right_pow = q_left.powf(1.0 - b) - volume * d * (1.0 - b) / q0.powf(b);
    let q_right = pow_or_nan(q_right_pow, 1.0 / (1.0 - b));
    arps_get_t_end_from_q_end(t0, q0, d, b, q_right)
}

/// Nominal decline of the Arps curve through `(t1, q1)` and `(t2, q2)`.
pub fn arps_get_d(t1: f64, q1: f64, t2: f64, q2: f64, b: f64) -> f64 {
    ((q1 / q2).powf(b) - 1.0) / (b * (t2 - t1))
}

/// Instantaneous decline after advancing `delta_t` along the curve.
pub fn arps_get_d_delta(d: f64, b: f64, delta_t: f64) -> f64 {
    d / (1.0 + b * d * delta_t)
}

/// Index at which the instantaneous decline of a curve starting at
/// `start_idx` with decline `d` has fallen to `d_new`.
pub fn arps_get_idx_from_d_new(start_idx: f64, d: f64, d_new: f64, b: f64) -> f64 {
    start_idx + (d / d_new - 1.0) / (b * d)
}

/// Time at which the curve reaches `q_end`.
pub fn arps_get_t_end_from_q_end(t0: f64, q0: f64, d: f64, b: f64, q_end: f64) -> f64 {
    t0 + ((q0 / q_end).powf(b) - 1.0) / (b * d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clamp_b_moves_singular_values() {
        assert_eq!(clamp_b(1.0), B_ONE_SUB);
        assert_eq!(clamp_b(0.0), B_ZERO_SUB);
        assert_eq!(clamp_b(0.5), 0.5);
        assert_eq!(clamp_b(2.0), 2.0);
    }

    #[test]
    fn pred_at_origin_is_q0() {
        assert_relative_eq!(pred_arps(7.0, 7.0, 321.0, 0.01, 1.2), 321.0);
    }

    #[test]
    fn pred_outside_domain_is_nan() {
        // Negative D with positive b reaches a zero base at t = 1 / (b * |D|).
        assert!(pred_arps(300.0, 0.0, 100.0, -0.01, 0.5).is_nan());
    }

    #[test]
    fn slope_matches_finite_difference() {
        let (t0, q0, d, b) = (0.0, 500.0, 0.005, 0.8);
        let h = 1e-5;
        let fd = (pred_arps(50.0 + h, t0, q0, d, b) - pred_arps(50.0 - h, t0, q0, d, b)) / (2.0 * h);
        assert_relative_eq!(slope_arps(50.0, t0, q0, d, b), fd, max_relative = 1e-6);
    }

    #[test]
    fn harmonic_integral_matches_limit() {
        let (t0, q0, d) = (0.0, 1000.0, 0.01);
        let harmonic = integral_arps(0.0, 200.0, t0, q0, d, 1.0);
        let near = integral_arps(0.0, 200.0, t0, q0, d, B_ONE_SUB);
        assert_relative_eq!(harmonic, near, max_relative = 1e-5);
    }

    #[test]
    fn inverse_round_trip_both_branches() {
        for &b in &[0.3, 1.0, 1.7] {
            let (t0, q0, d) = (10.0, 900.0, 0.004);
            let v = integral_arps(40.0, 700.0, t0, q0, d, b);
            assert_relative_eq!(
                inverse_integral_arps(v, 40.0, t0, q0, d, b),
                700.0,
                max_relative = 1e-8
            );
        }
    }

    #[test]
    fn d_delta_matches_two_point_slope() {
        let (d, b) = (0.01, 1.5);
        let d_later = arps_get_d_delta(d, b, 100.0);
        // A curve restarted at t=100 with d_later matches the original.
        let q100 = pred_arps(100.0, 0.0, 1.0, d, b);
        assert_relative_eq!(
            pred_arps(250.0, 100.0, q100, d_later, b),
            pred_arps(250.0, 0.0, 1.0, d, b),
            max_relative = 1e-12
        );
    }

    #[test]
    fn idx_from_d_new_inverts_d_delta() {
        let (d, b) = (0.02, 0.9);
        let t = arps_get_idx_from_d_new(5.0, d, 0.001, b);
        assert_relative_eq!(arps_get_d_delta(d, b, t - 5.0), 0.001, max_relative = 1e-12);
    }

    #[test]
    fn two_point_d_and_t_end() {
        let (q0, d, b) = (400.0, 0.006, 1.1);
        let q2 = pred_arps(90.0, 0.0, q0, d, b);
        assert_relative_eq!(arps_get_d(0.0, q0, 90.0, q2, b), d, max_relative = 1e-12);
        assert_relative_eq!(arps_get_t_end_from_q_end(0.0, q0, d, b, q2), 90.0, max_relative = 1e-12);
    }
}
