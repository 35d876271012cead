//! Leapfrogging optimization library.
//!
//! This crate provides a Rust implementation of the Leapfrogging
//! Optimization Algorithm, a population-based, derivative-free direct-search
//! method for minimizing a bounded real-valued function. The worst point of
//! a population repeatedly "leapfrogs" over the best point, which
//! concentrates the search around the current best while the shrinking
//! best-worst distance anneals the step size without an explicit schedule.
//!
//! # Features
//!
//! - Bound constraints on every variable
//! - Single-valued constraint functions handled by a self-scaling penalty
//! - Mixed-integer problems via discrete variable indices
//! - Seeded, bit-reproducible runs
//! - Optional caller-supplied starting population
//! - Per-iteration callback with the current best point
//!
//! # Example
//!
//! ```rust
//! use leapfrog_opt::{LeapfrogConfigBuilder, minimize};
//!
//! // Minimize the sphere function: f(x) = sum(x_i^2)
//! let config = LeapfrogConfigBuilder::new()
//!     .points(20)
//!     .maxit(100_000)
//!     .tol(1e-3)
//!     .seed(42)
//!     .build()
//!     .expect("invalid config");
//!
//! let report = minimize(
//!     &|x| x.iter().map(|&xi| xi * xi).sum(),
//!     &[(-10.0, 10.0), (-10.0, 10.0)],
//!     config,
//! ).expect("optimization should succeed");
//!
//! assert_eq!(report.status, 0);
//! assert!(report.fun < 1e-2);
//! ```
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod error;
pub use error::{LeapfrogError, Result};

use std::fmt;
use std::sync::Arc;

use ndarray::{Array1, Array2};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Best/worst index selection over the cached objective values.
pub mod best_worst;
/// The scalar convergence estimator used as the stopping criterion.
pub mod convergence;
/// Constraint-violation penalties applied to the cached objective values.
pub mod enforce_constraints;
/// Discrete (integer) variable handling for mixed-integer problems.
pub mod enforce_discrete;
/// Initial point set construction.
pub mod init_pointset;
/// The core leapfrog move that replaces the worst point.
pub mod leapfrog_move;
/// Uniform sampling from the single per-run RNG stream.
pub mod sampler;

/// Registry of benchmark objective functions for the runner and tests.
pub mod function_registry;
/// Internal helper methods for the optimizer driver.
pub mod impl_helpers;
/// Comprehensive cross-component tests.
#[cfg(test)]
mod lpfg_tests;
/// Convenience entry point over `(lower, upper)` bound pairs.
pub mod minimize;
/// Parallel evaluation of the initial population.
pub mod parallel_eval;
/// Per-evaluation recording for analysis and debugging.
pub mod recorder;
/// Recorded optimization wrapper.
pub mod run_recorded;

pub use minimize::minimize;
pub use parallel_eval::ParallelConfig;
pub use recorder::{EvaluationRecord, OptimizationRecorder};
pub use run_recorded::run_recorded_minimize;

// Type aliases to reduce complexity
/// Scalar constraint function type; feasible when the returned value is <= 0.
pub type ConstraintFn = Arc<dyn Fn(&Array1<f64>) -> f64 + Send + Sync>;
/// Per-iteration callback function type.
pub type CallbackFn = Box<dyn FnMut(&LeapfrogIntermediate)>;

/// Configuration for a leapfrog optimization run.
///
/// Holds everything except the objective function and the bounds, which
/// belong to [`Leapfrog`] itself. Use [`LeapfrogConfigBuilder`] to construct
/// a validated configuration.
pub struct LeapfrogConfig {
    /// Point set (population) size; must be >= 2.
    pub points: usize,
    /// Maximum number of iterations.
    pub maxit: usize,
    /// Convergence tolerance; the run stops once the error drops below it.
    pub tol: f64,
    /// Optional random seed for reproducibility (None = time-derived seed).
    pub seed: Option<u64>,
    /// Optional indices of discrete (integer-constrained) variables.
    pub discrete: Option<Vec<usize>>,
    /// Optional constraint function; feasible when it returns <= 0.
    pub constraint: Option<ConstraintFn>,
    /// Optional starting point set of shape (points, xlen).
    pub pointset: Option<Array2<f64>>,
    /// Resample the starting point set instead of using it verbatim.
    /// Ignored when no starting point set is given.
    pub reinitialize: bool,
    /// Optional per-iteration callback invoked with the current best point.
    pub callback: Option<CallbackFn>,
    /// Print progress lines to stderr.
    pub disp: bool,
    /// Parallel evaluation of the initial population.
    pub parallel: ParallelConfig,
}

impl Default for LeapfrogConfig {
    fn default() -> Self {
        Self {
            points: 20,
            maxit: 10000,
            tol: 1e-5,
            seed: None,
            discrete: None,
            constraint: None,
            pointset: None,
            reinitialize: false,
            callback: None,
            disp: false,
            parallel: ParallelConfig::default(),
        }
    }
}

impl fmt::Debug for LeapfrogConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeapfrogConfig")
            .field("points", &self.points)
            .field("maxit", &self.maxit)
            .field("tol", &self.tol)
            .field("seed", &self.seed)
            .field("discrete", &self.discrete)
            .field("constraint", &self.constraint.is_some())
            .field("pointset", &self.pointset.as_ref().map(|ps| ps.dim()))
            .field("reinitialize", &self.reinitialize)
            .field("callback", &self.callback.is_some())
            .field("disp", &self.disp)
            .field("parallel", &self.parallel)
            .finish()
    }
}

/// Fluent builder for [`LeapfrogConfig`].
///
/// # Example
///
/// ```rust
/// use leapfrog_opt::LeapfrogConfigBuilder;
///
/// let config = LeapfrogConfigBuilder::new()
///     .points(30)
///     .maxit(5000)
///     .tol(1e-4)
///     .seed(1235)
///     .discrete(vec![0, 1])
///     .build()
///     .expect("invalid config");
/// ```
pub struct LeapfrogConfigBuilder {
    cfg: LeapfrogConfig,
}

impl Default for LeapfrogConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LeapfrogConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            cfg: LeapfrogConfig::default(),
        }
    }
    /// Sets the point set size.
    pub fn points(mut self, v: usize) -> Self {
        self.cfg.points = v;
        self
    }
    /// Sets the maximum number of iterations.
    pub fn maxit(mut self, v: usize) -> Self {
        self.cfg.maxit = v;
        self
    }
    /// Sets the convergence tolerance.
    pub fn tol(mut self, v: f64) -> Self {
        self.cfg.tol = v;
        self
    }
    /// Sets the random seed for reproducibility.
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = Some(v);
        self
    }
    /// Sets the indices of discrete (integer-constrained) variables.
    pub fn discrete(mut self, v: Vec<usize>) -> Self {
        self.cfg.discrete = Some(v);
        self
    }
    /// Sets the constraint function; feasible when it returns <= 0.
    pub fn constraint<G>(mut self, g: G) -> Self
    where
        G: Fn(&Array1<f64>) -> f64 + Send + Sync + 'static,
    {
        self.cfg.constraint = Some(Arc::new(g));
        self
    }
    /// Sets a starting point set of shape (points, xlen).
    pub fn pointset(mut self, v: Array2<f64>) -> Self {
        self.cfg.pointset = Some(v);
        self
    }
    /// Resamples the starting point set instead of using it verbatim.
    pub fn reinitialize(mut self, v: bool) -> Self {
        self.cfg.reinitialize = v;
        self
    }
    /// Sets a per-iteration callback function.
    pub fn callback(mut self, cb: CallbackFn) -> Self {
        self.cfg.callback = Some(cb);
        self
    }
    /// Enables/disables progress display.
    pub fn disp(mut self, v: bool) -> Self {
        self.cfg.disp = v;
        self
    }
    /// Sets the parallel evaluation configuration.
    pub fn parallel(mut self, parallel: ParallelConfig) -> Self {
        self.cfg.parallel = parallel;
        self
    }
    /// Enables/disables parallel evaluation of the initial population.
    pub fn enable_parallel(mut self, enable: bool) -> Self {
        self.cfg.parallel.enabled = enable;
        self
    }
    /// Sets the number of threads for parallel evaluation.
    pub fn parallel_threads(mut self, num_threads: usize) -> Self {
        self.cfg.parallel.num_threads = Some(num_threads);
        self
    }
    /// Builds and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns `LeapfrogError::PopulationTooSmall` if `points < 2`,
    /// `LeapfrogError::InvalidTolerance` if `tol <= 0`, and
    /// `LeapfrogError::ZeroIterations` if `maxit == 0`.
    pub fn build(self) -> Result<LeapfrogConfig> {
        if self.cfg.points < 2 {
            return Err(LeapfrogError::PopulationTooSmall {
                points: self.cfg.points,
            });
        }
        if self.cfg.tol <= 0.0 {
            return Err(LeapfrogError::InvalidTolerance { tol: self.cfg.tol });
        }
        if self.cfg.maxit == 0 {
            return Err(LeapfrogError::ZeroIterations);
        }
        Ok(self.cfg)
    }
}

/// Result/report of a leapfrog optimization run.
#[derive(Clone)]
pub struct LeapfrogReport {
    /// The best point found.
    pub x: Array1<f64>,
    /// Objective value at the best point (post-penalty if infeasible).
    pub fun: f64,
    /// Whether the run converged within the iteration cap.
    pub success: bool,
    /// Termination status: 0 = converged, 1 = iteration cap reached.
    pub status: usize,
    /// Human-readable status message.
    pub message: String,
    /// Number of iterations performed.
    pub nit: usize,
    /// Number of objective function evaluations performed.
    pub nfev: usize,
    /// Final convergence error value.
    pub error: f64,
    /// Largest constraint violation observed (0 if unconstrained).
    pub maxcv: f64,
    /// Index of the best point within the final point set.
    pub best_index: usize,
    /// Index of the worst point within the final point set.
    pub worst_index: usize,
    /// Final point set (points x xlen).
    pub population: Array2<f64>,
    /// Cached objective values for each point in the final point set.
    pub population_objs: Array1<f64>,
}

impl fmt::Debug for LeapfrogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeapfrogReport")
            .field("x", &format!("len={}", self.x.len()))
            .field("fun", &self.fun)
            .field("success", &self.success)
            .field("status", &self.status)
            .field("message", &self.message)
            .field("nit", &self.nit)
            .field("nfev", &self.nfev)
            .field("error", &self.error)
            .field("maxcv", &self.maxcv)
            .field("best_index", &self.best_index)
            .field("worst_index", &self.worst_index)
            .field(
                "population",
                &format!("{}x{}", self.population.nrows(), self.population.ncols()),
            )
            .finish()
    }
}

/// Information passed to the callback after each iteration.
pub struct LeapfrogIntermediate {
    /// Current best point.
    pub x: Array1<f64>,
    /// Current best objective value.
    pub fun: f64,
    /// Current convergence error.
    pub error: f64,
    /// Current iteration number (1-based).
    pub iter: usize,
}

/// Leapfrog optimizer.
///
/// A population-based, derivative-free minimizer. Use [`Leapfrog::new`] to
/// create an instance, configure with [`config_mut`](Self::config_mut), then
/// call [`solve`](Self::solve).
pub struct Leapfrog<'a, F>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    func: &'a F,
    lower: Array1<f64>,
    upper: Array1<f64>,
    config: LeapfrogConfig,
}

impl<'a, F> fmt::Debug for Leapfrog<'a, F>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leapfrog")
            .field("xlen", &self.lower.len())
            .field("config", &self.config)
            .finish()
    }
}

impl<'a, F> Leapfrog<'a, F>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    /// Creates a new optimizer with objective `func` and bounds [lower, upper].
    ///
    /// # Errors
    ///
    /// Returns `LeapfrogError::BoundsMismatch` if `lower` and `upper` have
    /// different lengths, `LeapfrogError::EmptyBounds` if they are empty, and
    /// `LeapfrogError::InvalidBounds` if any lower bound exceeds its
    /// corresponding upper bound.
    pub fn new(func: &'a F, lower: Array1<f64>, upper: Array1<f64>) -> Result<Self> {
        if lower.len() != upper.len() {
            return Err(LeapfrogError::BoundsMismatch {
                lower_len: lower.len(),
                upper_len: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(LeapfrogError::EmptyBounds);
        }
        for i in 0..lower.len() {
            if lower[i] > upper[i] {
                return Err(LeapfrogError::InvalidBounds {
                    index: i,
                    lower: lower[i],
                    upper: upper[i],
                });
            }
        }

        Ok(Self {
            func,
            lower,
            upper,
            config: LeapfrogConfig::default(),
        })
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut LeapfrogConfig {
        &mut self.config
    }

    /// Runs the optimization and returns a report.
    ///
    /// # Errors
    ///
    /// Fails fast with a `LeapfrogError` when the configuration is invalid
    /// (out-of-range discrete index, mis-shaped starting point set) before
    /// any state is allocated. Reaching the iteration cap is not an error;
    /// it is reported through `status = 1` in the returned report.
    pub fn solve(&mut self) -> Result<LeapfrogReport> {
        use crate::best_worst::eval_best_worst;
        use crate::convergence::calculate_convergence;
        use crate::enforce_constraints::enforce_constraints;
        use crate::enforce_discrete::{discrete_mask, nudge_discrete_bounds};
        use crate::init_pointset::init_pointset;
        use crate::leapfrog_move::leapfrog_move;
        use crate::parallel_eval::evaluate_population_parallel;

        self.validate_run()?;

        let n = self.lower.len();
        let points = self.config.points;
        let tol = self.config.tol;

        if self.config.disp {
            eprintln!(
                "Leapfrog init: {} variables, points={}, maxit={}, tol={:.2e}",
                n, points, self.config.maxit, tol
            );
        }

        // Configure the global rayon thread pool once if requested
        if let Some(threads) = self.config.parallel.num_threads {
            // Ignore the error if the global pool is already set
            let _ = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build_global();
        }

        // RNG: one seeded stream per run, every draw goes through it
        let mut rng: StdRng = match self.config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };

        // The run works on its own copy of the bounds; the discrete nudge
        // never leaks back to the caller.
        let mask = match &self.config.discrete {
            Some(d) => discrete_mask(d, n),
            None => vec![false; n],
        };
        let mut lower = self.lower.clone();
        nudge_discrete_bounds(&mut lower, &mask);
        let upper = self.upper.clone();

        let mut pointset = init_pointset(
            points,
            &lower,
            &upper,
            &mask,
            self.config.pointset.as_ref(),
            self.config.reinitialize,
            &mut rng,
        )?;

        // Evaluate the initial rows; this is the only parallelizable step,
        // the rows have no inter-row dependency yet.
        let func_ref = self.func;
        let eval_fn = Arc::new(move |x: &Array1<f64>| (func_ref)(x));
        let mut objs = evaluate_population_parallel(&pointset, eval_fn, &self.config.parallel);
        let mut nfev = points;

        // Penalize every row, then fix best/worst once.
        let mut maxcv = 0.0;
        let constraint = self.config.constraint.clone();
        for i in 0..points {
            enforce_constraints(&mut objs, &pointset, i, constraint.as_ref(), &mut maxcv);
        }
        let (mut besti, mut worsti) = eval_best_worst(&objs);

        if self.config.disp {
            eprintln!(
                "  initial best: f={:.6e} at index {}",
                objs[besti], besti
            );
        }

        let mut error = f64::INFINITY;
        let mut nit = 0;
        let mut success = false;

        for iter in 1..=self.config.maxit {
            nit = iter;

            leapfrog_move(&mut pointset, besti, worsti, &lower, &upper, &mask, &mut rng)?;
            objs[worsti] = (self.func)(&pointset.row(worsti).to_owned());
            nfev += 1;
            enforce_constraints(&mut objs, &pointset, worsti, constraint.as_ref(), &mut maxcv);

            let (b, w) = eval_best_worst(&objs);
            besti = b;
            worsti = w;
            error = calculate_convergence(&pointset, &objs, besti, worsti, tol, constraint.as_ref());

            if self.config.disp && (iter <= 10 || iter % 100 == 0) {
                eprintln!(
                    "leapfrog iter {:5}  best_f={:.6e}  error={:.3e}",
                    iter, objs[besti], error
                );
            }

            if let Some(cb) = self.config.callback.as_mut() {
                let intermediate = LeapfrogIntermediate {
                    x: pointset.row(besti).to_owned(),
                    fun: objs[besti],
                    error,
                    iter,
                };
                cb(&intermediate);
            }

            if error < tol {
                success = true;
                break;
            }
        }

        let message = if success {
            format!("Converged: error={:.3e} < tol={:.3e}", error, tol)
        } else {
            format!("Maximum iterations reached: {}", self.config.maxit)
        };
        if self.config.disp {
            eprintln!("Leapfrog finished: {}", message);
        }

        let x = pointset.row(besti).to_owned();
        let fun = objs[besti];
        Ok(self.finish_report(
            pointset, objs, x, fun, success, message, nit, nfev, error, maxcv, besti, worsti,
        ))
    }
}
