use ndarray::Array1;

/// Returns the indices of the minimal and maximal cached objective values.
///
/// Single linear scan with strict comparisons, so ties keep the earliest
/// index found. Must be recomputed after every mutation of a cached value.
pub(crate) fn eval_best_worst(objs: &Array1<f64>) -> (usize, usize) {
    let mut besti = 0usize;
    let mut worsti = 0usize;
    for (i, &val) in objs.iter().enumerate() {
        if val < objs[besti] {
            besti = i;
        }
        if val > objs[worsti] {
            worsti = i;
        }
    }
    (besti, worsti)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_best_and_worst_indices() {
        let objs = array![3.0, -1.0, 7.0, 0.5];
        assert_eq!(eval_best_worst(&objs), (1, 2));
    }

    #[test]
    fn test_ties_keep_earliest_index() {
        let objs = array![2.0, 2.0, 2.0];
        assert_eq!(eval_best_worst(&objs), (0, 0));
    }

    #[test]
    fn test_single_extreme_on_both_ends() {
        let objs = array![5.0, 1.0];
        assert_eq!(eval_best_worst(&objs), (1, 0));
    }
}
