//! Error types for the wellcast-curve crate.

/// Error type for all fallible operations in the wellcast-curve crate.
///
/// Closed-form curve evaluation never fails: domain violations come back as
/// NaN. Only the iterative solvers can reject their inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// Returned when the bisection bracket does not straddle a root.
    #[error("bisection bracket [{a}, {b}] has no sign change (f(a)={fa}, f(b)={fb})")]
    BisectNoSignChange {
        /// Lower end of the bracket.
        a: f64,
        /// Upper end of the bracket.
        b: f64,
        /// Function value at `a`.
        fa: f64,
        /// Function value at `b`.
        fb: f64,
    },
}
