use crate::Result;
use crate::enforce_discrete::enforce_discrete;
use crate::sampler::uniform;
use ndarray::{Array1, Array2};
use rand::Rng;

/// Replaces the worst point by leapfrogging it over the best point.
///
/// For each variable the candidate interval spans the best value and its
/// point-reflection through the worst value, ordered and clipped to the
/// bounds. The replacement value is drawn uniformly from that interval, so
/// the step size anneals naturally as the population contracts. Discrete
/// variables are truncated immediately after the draw.
///
/// The caller re-evaluates and re-penalizes the row afterwards.
pub(crate) fn leapfrog_move<R: Rng + ?Sized>(
    pointset: &mut Array2<f64>,
    besti: usize,
    worsti: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    mask: &[bool],
    rng: &mut R,
) -> Result<()> {
    let n = lower.len();
    for j in 0..n {
        let best = pointset[(besti, j)];
        let worst = pointset[(worsti, j)];
        let mut b1 = best;
        let mut b2 = 2.0 * best - worst;
        if b2 < b1 {
            std::mem::swap(&mut b1, &mut b2);
        }
        if b1 < lower[j] {
            b1 = lower[j];
        }
        if b2 > upper[j] {
            b2 = upper[j];
        }
        // A discrete variable may legally sit at floor(lower), below the
        // nudged lower bound; clipping then inverts the interval. Reorder
        // before the draw.
        if b1 > b2 {
            std::mem::swap(&mut b1, &mut b2);
        }
        pointset[(worsti, j)] = uniform(b1, b2, rng)?;
        enforce_discrete(pointset, worsti, j, mask);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_point_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let lower = array![-1.0, -1.0];
        let upper = array![1.0, 1.0];
        let mask = vec![false, false];

        for _ in 0..200 {
            let mut ps = array![[0.9, -0.8], [-0.95, 0.99]];
            leapfrog_move(&mut ps, 0, 1, &lower, &upper, &mask, &mut rng).unwrap();
            for j in 0..2 {
                assert!(ps[(1, j)] >= lower[j] && ps[(1, j)] <= upper[j]);
            }
        }
    }

    #[test]
    fn test_new_value_lies_between_best_and_reflection() {
        let mut rng = StdRng::seed_from_u64(23);
        let lower = array![-100.0];
        let upper = array![100.0];
        let mask = vec![false];

        for _ in 0..200 {
            let mut ps = array![[2.0], [5.0]];
            // reflection of 5 through 2 is -1, so the interval is [-1, 2]
            leapfrog_move(&mut ps, 0, 1, &lower, &upper, &mask, &mut rng).unwrap();
            assert!(ps[(1, 0)] >= -1.0 && ps[(1, 0)] <= 2.0);
        }
    }

    #[test]
    fn test_collapsed_population_yields_the_best_point() {
        let mut rng = StdRng::seed_from_u64(5);
        let lower = array![-10.0];
        let upper = array![10.0];
        let mask = vec![false];

        let mut ps = array![[3.0], [3.0]];
        leapfrog_move(&mut ps, 0, 1, &lower, &upper, &mask, &mut rng).unwrap();
        assert_eq!(ps[(1, 0)], 3.0);
    }

    #[test]
    fn test_clipping_against_nudged_lower_bound_reorders_interval() {
        let mut rng = StdRng::seed_from_u64(3);
        // Nudged lower bound of a discrete variable over [4, 10]
        let lower = array![4.999];
        let upper = array![10.0];
        let mask = vec![true];

        // The best point sits at floor(lower), below the nudged bound, so
        // clipping inverts the candidate interval to [4.999, 4.0].
        let mut ps = array![[4.0], [5.0]];
        leapfrog_move(&mut ps, 0, 1, &lower, &upper, &mask, &mut rng).unwrap();
        assert_eq!(ps[(1, 0)], 4.0);
    }

    #[test]
    fn test_discrete_variable_is_truncated() {
        let mut rng = StdRng::seed_from_u64(31);
        let lower = array![-10.0];
        let upper = array![10.0];
        let mask = vec![true];

        for _ in 0..100 {
            let mut ps = array![[2.0], [7.0]];
            leapfrog_move(&mut ps, 0, 1, &lower, &upper, &mask, &mut rng).unwrap();
            assert_eq!(ps[(1, 0)], ps[(1, 0)].trunc());
        }
    }
}
