use crate::{LeapfrogError, Result};
use rand::Rng;

/// Draws a value from a uniform distribution on `[lower, upper]`.
///
/// Every random draw in a run goes through this function so that the draw
/// order is fixed by the algorithm's traversal order and a seeded run is
/// exactly reproducible.
///
/// # Errors
///
/// Returns `LeapfrogError::InvalidSampleRange` if `lower > upper`.
pub(crate) fn uniform<R: Rng + ?Sized>(lower: f64, upper: f64, rng: &mut R) -> Result<f64> {
    if lower > upper {
        return Err(LeapfrogError::InvalidSampleRange { lower, upper });
    }
    let u: f64 = rng.random::<f64>();
    Ok(lower + u * (upper - lower))
}
