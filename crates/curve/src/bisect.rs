//! Bracketing root finder.

use tracing::debug;

use crate::error::CurveError;

/// Hard cap on bisection iterations.
pub const MAX_BISECT_ITER: usize = 90;

/// Finds a root of `f` in `[a, b]` by bisection.
///
/// Stops when the half-width of the bracket drops below `tol` or after
/// [`MAX_BISECT_ITER`] halvings, whichever comes first, and returns the
/// current midpoint.
///
/// # Errors
///
/// Returns [`CurveError::BisectNoSignChange`] when `f(a)` and `f(b)` do not
/// have opposite signs (including when either is NaN). This means the caller
/// chose a bad bracket and is not a data-quality condition.
pub fn bisect<F>(f: F, a: f64, b: f64, tol: f64) -> Result<f64, CurveError>
where
    F: Fn(f64) -> f64,
{
    let (mut lo, mut hi) = (a, b);
    let mut f_lo = f(lo);
    let f_hi = f(hi);
    if f_lo == 0.0 {
        return Ok(lo);
    }
    if f_hi == 0.0 {
        return Ok(hi);
    }
    if !(f_lo * f_hi < 0.0) {
        return Err(CurveError::BisectNoSignChange {
            a,
            b,
            fa: f_lo,
            fb: f_hi,
        });
    }

    let mut mid = (lo + hi) / 2.0;
    for _ in 0..MAX_BISECT_ITER {
        mid = (lo + hi) / 2.0;
        let f_mid = f(mid);
        if f_mid == 0.0 || (hi - lo) / 2.0 < tol {
            return Ok(mid);
        }
        if (f_mid < 0.0) == (f_lo < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }
    debug!(a, b, mid, width = hi - lo, "bisection hit the iteration cap");
    Ok(mid)
}
