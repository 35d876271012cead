use ndarray::{Array1, Array2};

/// Builds a per-variable boolean mask from a list of discrete indices.
///
/// Index validity is checked by the driver before the run starts.
pub(crate) fn discrete_mask(discrete: &[usize], n: usize) -> Vec<bool> {
    let mut mask = vec![false; n];
    for &j in discrete {
        if j < n {
            mask[j] = true;
        }
    }
    mask
}

/// Truncates `pointset[(row, col)]` toward zero when `col` is discrete.
///
/// Applied immediately after any write to a discrete variable so the
/// invariant "all discrete variables hold integral values" holds
/// continuously, not just at convergence.
pub(crate) fn enforce_discrete(
    pointset: &mut Array2<f64>,
    row: usize,
    col: usize,
    mask: &[bool],
) {
    if mask[col] {
        pointset[(row, col)] = pointset[(row, col)].trunc();
    }
}

/// Nudges each discrete variable's lower bound up to `floor(lower) + 0.999`.
///
/// Truncation toward zero would otherwise under-sample the lowest integer
/// in the interval. The nudge is applied once, to the run's own copy of the
/// bounds; the caller's arrays are never touched.
pub(crate) fn nudge_discrete_bounds(lower: &mut Array1<f64>, mask: &[bool]) {
    for (j, &is_discrete) in mask.iter().enumerate() {
        if is_discrete {
            lower[j] = lower[j].floor() + 0.999;
        }
    }
}
