use crate::{Leapfrog, LeapfrogConfig, LeapfrogError, LeapfrogReport, Result};
use ndarray::Array1;

/// Runs a leapfrog optimization on a function.
///
/// This is a convenience wrapper that takes the bounds as `(lower, upper)`
/// pairs, builds the optimizer, and runs it to completion.
///
/// # Arguments
///
/// * `func` - The objective function to minimize, mapping `&Array1<f64>` to `f64`
/// * `bounds` - Vector of (lower, upper) bound pairs for each variable
/// * `config` - Run configuration (use `LeapfrogConfigBuilder` to construct)
///
/// # Returns
///
/// Returns `Ok(LeapfrogReport)` containing the optimization result. Reaching
/// the iteration cap is reported through `status = 1`, not as an error.
///
/// # Errors
///
/// Returns `LeapfrogError::InvalidBounds` if any bound pair has upper < lower,
/// `LeapfrogError::EmptyBounds` if `bounds` is empty, and the configuration
/// errors documented on [`Leapfrog::solve`].
///
/// # Example
///
/// ```rust
/// use leapfrog_opt::{LeapfrogConfigBuilder, minimize};
///
/// let report = minimize(
///     &|x| x[0].powi(2) + x[1].powi(2),
///     &[(-10.0, 10.0), (-10.0, 10.0)],
///     LeapfrogConfigBuilder::new()
///         .maxit(100_000)
///         .tol(1e-3)
///         .seed(42)
///         .build()
///         .expect("invalid config"),
/// ).expect("optimization failed");
///
/// assert!(report.fun < 1e-2);
/// ```
pub fn minimize<F>(
    func: &F,
    bounds: &[(f64, f64)],
    config: LeapfrogConfig,
) -> Result<LeapfrogReport>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    let n = bounds.len();
    let mut lower = Array1::<f64>::zeros(n);
    let mut upper = Array1::<f64>::zeros(n);
    for (i, (lo, hi)) in bounds.iter().enumerate() {
        lower[i] = *lo;
        upper[i] = *hi;
        if hi < lo {
            return Err(LeapfrogError::InvalidBounds {
                index: i,
                lower: *lo,
                upper: *hi,
            });
        }
    }
    let mut lf = Leapfrog::new(func, lower, upper)?;
    *lf.config_mut() = config;
    lf.solve()
}
