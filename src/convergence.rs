use crate::ConstraintFn;
use ndarray::{Array1, Array2};

/// Computes the scalar convergence error of the current population.
///
/// The error sums the relative objective spread between the worst and best
/// points and the relative positional spread of every point around the best
/// point. Each norm is floored at `tol` to guard division by values near
/// zero. While any row is infeasible a flat `2 * tol` is added so the run
/// cannot converge on an infeasible population.
pub(crate) fn calculate_convergence(
    pointset: &Array2<f64>,
    objs: &Array1<f64>,
    besti: usize,
    worsti: usize,
    tol: f64,
    constraint: Option<&ConstraintFn>,
) -> f64 {
    let objective_best = objs[besti];
    let objective_worst = objs[worsti];

    let norm = if objective_best.abs() < tol {
        tol
    } else {
        objective_best
    };
    let err_obj = ((objective_worst - objective_best) / norm).abs();

    let mut dist_sum = 0.0;
    let mut constraint_penalty = 0.0;
    for i in 0..pointset.nrows() {
        if let Some(g) = constraint {
            if g(&pointset.row(i).to_owned()) > 0.0 {
                constraint_penalty = 2.0 * tol;
            }
        }
        for j in 0..pointset.ncols() {
            let best_j = pointset[(besti, j)];
            let norm_j = if best_j.abs() < tol { tol } else { best_j };
            dist_sum += ((best_j - pointset[(i, j)]) / norm_j).abs();
        }
    }

    err_obj + dist_sum + constraint_penalty
}
