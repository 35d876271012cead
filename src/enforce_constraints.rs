use crate::ConstraintFn;
use ndarray::{Array1, Array2};

/// Applies the constraint penalty to one row of the point set.
///
/// The constraint function must return a value `<= 0.0` when the point is
/// feasible; a return value `> 0.0` is the violation magnitude. An
/// infeasible row's cached objective is overwritten with `big + g(x)`,
/// where `big` is the largest absolute cached objective in the current
/// population. That keys the penalty to the worst known magnitude, so every
/// infeasible point ranks worse than every feasible one without an
/// externally tuned weight.
///
/// Does nothing when no constraint function is configured.
pub(crate) fn enforce_constraints(
    objs: &mut Array1<f64>,
    pointset: &Array2<f64>,
    row: usize,
    constraint: Option<&ConstraintFn>,
    maxcv: &mut f64,
) {
    let Some(g) = constraint else {
        return;
    };
    let mut big = 0.0;
    for &obj in objs.iter() {
        if obj.abs() > big {
            big = obj.abs();
        }
    }
    let constraint_value = g(&pointset.row(row).to_owned());
    if constraint_value > 0.0 {
        if constraint_value > *maxcv {
            *maxcv = constraint_value;
        }
        objs[row] = big + constraint_value;
    }
}
