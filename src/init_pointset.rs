use crate::Result;
use crate::enforce_discrete::enforce_discrete;
use crate::sampler::uniform;
use ndarray::{Array1, Array2};
use rand::Rng;

/// Builds the initial point set.
///
/// With no seeded point set (or with `reinitialize` requested) every cell is
/// drawn uniformly within its bounds, row-major over the population and
/// variable-major within a row; that traversal order fixes the RNG stream
/// for reproducible seeded runs. A seeded point set is otherwise copied
/// verbatim. Discrete truncation is applied after every write either way.
pub(crate) fn init_pointset<R: Rng + ?Sized>(
    points: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    mask: &[bool],
    seeded: Option<&Array2<f64>>,
    reinitialize: bool,
    rng: &mut R,
) -> Result<Array2<f64>> {
    let n = lower.len();
    let mut pointset = Array2::<f64>::zeros((points, n));
    for i in 0..points {
        for j in 0..n {
            pointset[(i, j)] = match seeded {
                // Shape checked against (points, n) by the driver.
                Some(ps) if !reinitialize => ps[(i, j)],
                _ => uniform(lower[j], upper[j], rng)?,
            };
            enforce_discrete(&mut pointset, i, j, mask);
        }
    }
    Ok(pointset)
}
