use ndarray::{Array1, Array2};
use rayon::prelude::*;
use std::sync::Arc;

/// Parallel evaluation configuration.
///
/// Only the initial population is ever evaluated in parallel: those
/// evaluations have no inter-row dependency. The per-iteration
/// leapfrog/evaluate/select/converge cycle is always sequential because each
/// iteration depends on the previous one's best and worst indices.
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Enable parallel evaluation of the initial population
    pub enabled: bool,
    /// Number of threads to use (None = use rayon default)
    pub num_threads: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            num_threads: None,
        }
    }
}

/// Evaluates every row of a population, optionally in parallel.
///
/// Returns the objective value per row, in row order regardless of the
/// evaluation order, so parallel and sequential runs produce identical
/// results.
pub fn evaluate_population_parallel<F>(
    population: &Array2<f64>,
    eval_fn: Arc<F>,
    config: &ParallelConfig,
) -> Array1<f64>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync,
{
    let npop = population.nrows();

    if !config.enabled || npop < 4 {
        // Sequential evaluation for small populations or when disabled
        let mut objs = Array1::zeros(npop);
        for i in 0..npop {
            let point = population.row(i).to_owned();
            objs[i] = eval_fn(&point);
        }
        return objs;
    }

    // Always use the global thread pool (configured once in the driver)
    let results = (0..npop)
        .into_par_iter()
        .map(|i| {
            let point = population.row(i).to_owned();
            eval_fn(&point)
        })
        .collect::<Vec<f64>>();

    Array1::from_vec(results)
}
