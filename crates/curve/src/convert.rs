//! Conversions between effective annual decline and per-day decline constants.
//!
//! User-facing decline is the *effective* annual fraction `D_eff` (the
//! fraction of rate lost over one year). Closed-form curves use a per-day
//! nominal constant. All conversions share [`DAYS_IN_YEAR`].

/// Days per year used by every decline conversion.
pub const DAYS_IN_YEAR: f64 = 365.25;

/// Arps secant-effective decline to nominal per-day `D`.
///
/// `D = ((1 - D_eff)^(-b) - 1) / (b * DAYS_IN_YEAR)`
pub fn arps_d_eff_to_d(d_eff: f64, b: f64) -> f64 {
    ((1.0 - d_eff).powf(-b) - 1.0) / (b * DAYS_IN_YEAR)
}

/// Nominal per-day Arps `D` to secant-effective annual decline.
///
/// `D_eff = 1 - (1 + b * D * DAYS_IN_YEAR)^(-1/b)`
pub fn arps_d_to_d_eff(d: f64, b: f64) -> f64 {
    1.0 - (1.0 + b * d * DAYS_IN_YEAR).powf(-1.0 / b)
}

/// Exponential effective decline to nominal per-day `D`.
///
/// `D = -ln(1 - D_eff) / DAYS_IN_YEAR`
pub fn exp_d_eff_to_d(d_eff: f64) -> f64 {
    -(1.0 - d_eff).ln() / DAYS_IN_YEAR
}

/// Nominal per-day exponential `D` to effective annual decline.
pub fn exp_d_to_d_eff(d: f64) -> f64 {
    1.0 - (-d * DAYS_IN_YEAR).exp()
}

/// Linear effective decline to slope `k` (rate change per day).
///
/// A linear segment loses `D_eff * q_start` over one year.
pub fn linear_d_eff_to_k(d_eff: f64, q_start: f64) -> f64 {
    -d_eff * q_start / DAYS_IN_YEAR
}

/// Linear slope `k` to effective annual decline relative to `q_start`.
pub fn linear_k_to_d_eff(k: f64, q_start: f64) -> f64 {
    -k * DAYS_IN_YEAR / q_start
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arps_known_value() {
        // b = 2, D_eff = 0.5: (0.5^-2 - 1) / 2 = 1.5 per year.
        assert_relative_eq!(arps_d_eff_to_d(0.5, 2.0), 1.5 / DAYS_IN_YEAR, epsilon = 1e-15);
    }

    #[test]
    fn arps_round_trip() {
        for &b in &[0.1, 0.5, 0.9999999, 1.5, 2.0] {
            for &d_eff in &[0.05, 0.3, 0.8] {
                let d = arps_d_eff_to_d(d_eff, b);
                assert_relative_eq!(arps_d_to_d_eff(d, b), d_eff, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn exp_round_trip() {
        for &d_eff in &[-0.5, 0.0, 0.1, 0.6] {
            let d = exp_d_eff_to_d(d_eff);
            assert_relative_eq!(exp_d_to_d_eff(d), d_eff, epsilon = 1e-12);
        }
    }

    #[test]
    fn exp_incline_is_negative() {
        assert!(exp_d_eff_to_d(-0.2) < 0.0);
    }

    #[test]
    fn linear_round_trip() {
        let k = linear_d_eff_to_k(0.25, 400.0);
        assert_relative_eq!(k, -100.0 / DAYS_IN_YEAR);
        assert_relative_eq!(linear_k_to_d_eff(k, 400.0), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn one_year_of_exponential_loses_d_eff() {
        let d = exp_d_eff_to_d(0.3);
        let q = 100.0 * (-d * DAYS_IN_YEAR).exp();
        assert_relative_eq!(q, 70.0, epsilon = 1e-9);
    }
}
