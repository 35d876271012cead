use crate::function_registry::{offset_quadratic, parabolic_constraint, sphere};
use crate::{Leapfrog, LeapfrogConfigBuilder, LeapfrogError, minimize};
use ndarray::{Array1, Array2, array};
use std::sync::{Arc, Mutex};

mod scenario_tests {
    use super::*;

    #[test]
    fn test_sphere_converges_to_origin() {
        let config = LeapfrogConfigBuilder::new()
            .points(20)
            .maxit(100_000)
            .tol(1e-3)
            .seed(42)
            .build()
            .expect("invalid config");

        let report = minimize(&sphere, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        assert_eq!(report.status, 0, "should converge: {}", report.message);
        assert!(report.success);
        assert!(report.fun < 1e-2, "f={} too far from 0", report.fun);
        for &xi in report.x.iter() {
            assert!(xi.abs() < 0.2, "x={} too far from origin", xi);
        }
        assert_eq!(report.maxcv, 0.0);
    }

    #[test]
    fn test_constrained_quadratic_lands_on_the_boundary() {
        // minimize x0^2 + x1^2 + 100 subject to x1 >= 10 - x0^2;
        // the optimum sits on the parabola at f = 109.75
        let config = LeapfrogConfigBuilder::new()
            .points(20)
            .maxit(100_000)
            .tol(1e-3)
            .seed(1235)
            .constraint(|x: &Array1<f64>| -x[0].powi(2) + 10.0 - x[1])
            .build()
            .expect("invalid config");

        let report = minimize(&offset_quadratic, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        assert_eq!(report.status, 0, "should converge: {}", report.message);
        // convergence requires a fully feasible population
        assert!(parabolic_constraint(&report.x) <= 0.0);
        assert!(
            report.fun >= 109.75 - 1e-6 && report.fun < 112.0,
            "f={} not near the constrained optimum",
            report.fun
        );
    }

    #[test]
    fn test_maxcv_keeps_the_worst_violation_seen() {
        // (0, 0) violates the parabola by exactly 10
        let seeded = array![
            [0.0, 0.0],
            [4.0, 2.0],
            [5.0, 1.0],
            [-4.0, 3.0],
            [6.0, -2.0],
            [3.5, 4.0],
            [-5.0, 0.0],
            [4.5, -1.0],
        ];
        let config = LeapfrogConfigBuilder::new()
            .points(8)
            .maxit(1)
            .tol(1e-12)
            .seed(2)
            .pointset(seeded)
            .constraint(|x: &Array1<f64>| -x[0].powi(2) + 10.0 - x[1])
            .build()
            .expect("invalid config");

        let report = minimize(&offset_quadratic, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        assert!(report.maxcv >= 10.0, "maxcv={} lost the seeded violation", report.maxcv);
    }

    #[test]
    fn test_discrete_problem_returns_integer_pair() {
        let config = LeapfrogConfigBuilder::new()
            .points(20)
            .maxit(100_000)
            .tol(1e-3)
            .seed(42)
            .discrete(vec![0, 1])
            .build()
            .expect("invalid config");

        let report = minimize(&sphere, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        assert!(report.success);
        for &xi in report.x.iter() {
            assert_eq!(xi, xi.trunc(), "x={} is not integral", xi);
        }
        // sphere over integers is itself an integer
        assert_eq!(report.fun, report.fun.trunc());
        // every surviving point is integral, not just the best one
        for i in 0..report.population.nrows() {
            for j in 0..report.population.ncols() {
                let v = report.population[(i, j)];
                assert_eq!(v, v.trunc());
            }
        }
    }

    #[test]
    fn test_discrete_run_pins_a_seeded_exact_optimum() {
        // row 0 truncates to the exact optimum (0, 0) during init
        let seeded = array![
            [0.2, -0.6],
            [4.3, 2.8],
            [-7.1, 5.5],
            [8.9, -3.3],
            [-2.4, -9.1],
            [6.6, 7.2],
            [-5.8, 1.9],
            [3.1, -6.4],
        ];
        let config = LeapfrogConfigBuilder::new()
            .points(8)
            .maxit(100_000)
            .tol(1e-3)
            .seed(42)
            .discrete(vec![0, 1])
            .pointset(seeded)
            .build()
            .expect("invalid config");

        let report = minimize(&sphere, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        assert_eq!(report.status, 0, "should converge: {}", report.message);
        assert!(report.fun < 1e-9, "seeded optimum was lost: f={}", report.fun);
    }

    #[test]
    fn test_discrete_bounds_above_zero_complete_the_run() {
        // The best point can sit at floor(lower), below the nudged lower
        // bound, so the clipped leapfrog interval inverts mid-run.
        let config = LeapfrogConfigBuilder::new()
            .points(2)
            .maxit(50)
            .tol(1e-3)
            .seed(9)
            .discrete(vec![0])
            .pointset(array![[4.0], [5.0]])
            .build()
            .expect("invalid config");

        let report =
            minimize(&sphere, &[(4.0, 10.0)], config).expect("optimization failed");

        assert_eq!(report.status, 0, "should converge: {}", report.message);
        assert_eq!(report.x[0], 4.0);
    }

    #[test]
    fn test_single_iteration_hits_the_cap() {
        let config = LeapfrogConfigBuilder::new()
            .points(20)
            .maxit(1)
            .tol(1e-3)
            .seed(7)
            .build()
            .expect("invalid config");

        let report = minimize(&sphere, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        assert_eq!(report.status, 1);
        assert!(!report.success);
        assert_eq!(report.nit, 1);
        assert!(report.error >= 1e-3);
    }
}

mod determinism_tests {
    use super::*;

    fn run_seeded(seed: u64) -> crate::LeapfrogReport {
        let config = LeapfrogConfigBuilder::new()
            .points(20)
            .maxit(2000)
            .tol(1e-3)
            .seed(seed)
            .build()
            .expect("invalid config");
        minimize(&sphere, &[(-10.0, 10.0), (-10.0, 10.0)], config).expect("optimization failed")
    }

    #[test]
    fn test_identical_seeds_give_bit_identical_reports() {
        let a = run_seeded(42);
        let b = run_seeded(42);

        assert_eq!(a.x, b.x);
        assert_eq!(a.fun, b.fun);
        assert_eq!(a.status, b.status);
        assert_eq!(a.nit, b.nit);
        assert_eq!(a.nfev, b.nfev);
        assert_eq!(a.error, b.error);
        assert_eq!(a.best_index, b.best_index);
        assert_eq!(a.worst_index, b.worst_index);
        assert_eq!(a.population, b.population);
        assert_eq!(a.population_objs, b.population_objs);
    }

    #[test]
    fn test_different_seeds_explore_differently() {
        let a = run_seeded(42);
        let b = run_seeded(43);
        assert_ne!(a.population, b.population);
    }
}

mod property_tests {
    use super::*;

    #[test]
    fn test_final_population_respects_bounds() {
        let lower = [-3.0, 0.5];
        let upper = [2.0, 4.0];
        let config = LeapfrogConfigBuilder::new()
            .points(15)
            .maxit(500)
            .tol(1e-3)
            .seed(11)
            .build()
            .expect("invalid config");

        let report = minimize(
            &sphere,
            &[(lower[0], upper[0]), (lower[1], upper[1])],
            config,
        )
        .expect("optimization failed");

        for i in 0..report.population.nrows() {
            for j in 0..report.population.ncols() {
                let v = report.population[(i, j)];
                assert!(v >= lower[j] && v <= upper[j], "point {} out of bounds", v);
            }
        }
    }

    #[test]
    fn test_best_objective_is_monotonically_non_increasing() {
        let best_trace = Arc::new(Mutex::new(Vec::<f64>::new()));
        let trace = best_trace.clone();

        let config = LeapfrogConfigBuilder::new()
            .points(20)
            .maxit(1000)
            .tol(1e-6)
            .seed(99)
            .callback(Box::new(move |inter| {
                trace.lock().unwrap().push(inter.fun);
            }))
            .build()
            .expect("invalid config");

        let report = minimize(&sphere, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        let trace = best_trace.lock().unwrap();
        assert_eq!(trace.len(), report.nit);
        for pair in trace.windows(2) {
            assert!(pair[1] <= pair[0], "best value got worse: {:?}", pair);
        }
    }

    #[test]
    fn test_infeasible_points_never_outrank_feasible_ones() {
        let config = LeapfrogConfigBuilder::new()
            .points(20)
            .maxit(200)
            .tol(1e-12)
            .seed(5)
            .constraint(|x: &Array1<f64>| -x[0].powi(2) + 10.0 - x[1])
            .build()
            .expect("invalid config");

        let report = minimize(&offset_quadratic, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        let feasible: Vec<usize> = (0..report.population.nrows())
            .filter(|&i| parabolic_constraint(&report.population.row(i).to_owned()) <= 0.0)
            .collect();
        assert!(!feasible.is_empty(), "expected at least one feasible point");
        // the best cached objective belongs to a feasible point
        assert!(feasible.contains(&report.best_index));
    }

    #[test]
    fn test_evaluation_accounting() {
        let config = LeapfrogConfigBuilder::new()
            .points(25)
            .maxit(300)
            .tol(1e-3)
            .seed(3)
            .build()
            .expect("invalid config");

        let report = minimize(&sphere, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        // one evaluation per initial row, one per iteration
        assert_eq!(report.nfev, 25 + report.nit);
        assert!(report.nit <= 300);
        let capped = report.nit == 300 && report.error >= 1e-3;
        assert_eq!(report.status == 1, capped);
    }

    #[test]
    fn test_parallel_init_matches_sequential_run() {
        let build = |parallel: bool| {
            let config = LeapfrogConfigBuilder::new()
                .points(20)
                .maxit(500)
                .tol(1e-3)
                .seed(21)
                .enable_parallel(parallel)
                .build()
                .expect("invalid config");
            minimize(&sphere, &[(-10.0, 10.0), (-10.0, 10.0)], config)
                .expect("optimization failed")
        };

        let seq = build(false);
        let par = build(true);
        assert_eq!(seq.x, par.x);
        assert_eq!(seq.nit, par.nit);
        assert_eq!(seq.population, par.population);
    }
}

mod pointset_tests {
    use super::*;

    fn seeded_rows() -> Array2<f64> {
        array![
            [-3.2, -7.9],
            [-0.3, 2.3],
            [-7.3, 6.1],
            [-0.1, 7.0],
            [4.9, -3.1],
            [7.7, 1.4],
            [-4.3, 6.0],
            [1.9, 7.5],
        ]
    }

    #[test]
    fn test_seeded_pointset_is_used_verbatim() {
        let seeded = seeded_rows();
        let config = LeapfrogConfigBuilder::new()
            .points(8)
            .maxit(1)
            .tol(1e-12)
            .seed(42)
            .pointset(seeded.clone())
            .build()
            .expect("invalid config");

        let report = minimize(&sphere, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        // one iteration replaces exactly the worst seeded row
        let changed: Vec<usize> = (0..8)
            .filter(|&i| report.population.row(i) != seeded.row(i))
            .collect();
        assert_eq!(changed.len(), 1);
        // (-7.3, 6.1) has the largest sphere value of the seeded rows
        assert_eq!(changed[0], 2);
    }

    #[test]
    fn test_reinitialize_discards_the_seeded_rows() {
        let seeded = seeded_rows();
        let config = LeapfrogConfigBuilder::new()
            .points(8)
            .maxit(1)
            .tol(1e-12)
            .seed(42)
            .pointset(seeded.clone())
            .reinitialize(true)
            .build()
            .expect("invalid config");

        let report = minimize(&sphere, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        let unchanged = (0..8).filter(|&i| report.population.row(i) == seeded.row(i));
        assert_eq!(unchanged.count(), 0);
    }
}

mod callback_tests {
    use super::*;

    #[test]
    fn test_callback_fires_every_iteration_with_bounded_best() {
        let iters = Arc::new(Mutex::new(Vec::<usize>::new()));
        let seen = iters.clone();

        let config = LeapfrogConfigBuilder::new()
            .points(20)
            .maxit(400)
            .tol(1e-3)
            .seed(13)
            .callback(Box::new(move |inter| {
                assert!(inter.x.iter().all(|&xi| (-10.0..=10.0).contains(&xi)));
                assert!(inter.error.is_finite());
                seen.lock().unwrap().push(inter.iter);
            }))
            .build()
            .expect("invalid config");

        let report = minimize(&sphere, &[(-10.0, 10.0), (-10.0, 10.0)], config)
            .expect("optimization failed");

        let iters = iters.lock().unwrap();
        assert_eq!(iters.len(), report.nit);
        assert_eq!(*iters.last().unwrap(), report.nit);
        for (k, &it) in iters.iter().enumerate() {
            assert_eq!(it, k + 1);
        }
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn test_builder_rejects_tiny_population() {
        let err = LeapfrogConfigBuilder::new().points(1).build().unwrap_err();
        assert!(matches!(err, LeapfrogError::PopulationTooSmall { points: 1 }));
    }

    #[test]
    fn test_builder_rejects_non_positive_tolerance() {
        let err = LeapfrogConfigBuilder::new().tol(0.0).build().unwrap_err();
        assert!(matches!(err, LeapfrogError::InvalidTolerance { .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_builder_rejects_zero_iterations() {
        let err = LeapfrogConfigBuilder::new().maxit(0).build().unwrap_err();
        assert!(matches!(err, LeapfrogError::ZeroIterations));
    }

    #[test]
    fn test_new_rejects_mismatched_bounds() {
        let err = Leapfrog::new(&sphere, array![-1.0, -1.0], array![1.0]).unwrap_err();
        assert!(matches!(
            err,
            LeapfrogError::BoundsMismatch {
                lower_len: 2,
                upper_len: 1,
            }
        ));
    }

    #[test]
    fn test_new_rejects_empty_bounds() {
        let lower: Array1<f64> = array![];
        let upper: Array1<f64> = array![];
        let err = Leapfrog::new(&sphere, lower, upper).unwrap_err();
        assert!(matches!(err, LeapfrogError::EmptyBounds));
    }

    #[test]
    fn test_config_and_optimizer_debug_omit_closures() {
        let config = LeapfrogConfigBuilder::new()
            .seed(1)
            .constraint(|x: &Array1<f64>| x[0])
            .build()
            .expect("invalid config");
        let repr = format!("{config:?}");
        assert!(repr.contains("constraint: true"));
        assert!(repr.contains("callback: false"));

        let lf = Leapfrog::new(&sphere, array![-1.0], array![1.0]).expect("valid bounds");
        assert!(format!("{lf:?}").contains("xlen: 1"));
    }

    #[test]
    fn test_minimize_rejects_inverted_bounds() {
        let config = LeapfrogConfigBuilder::new().build().expect("invalid config");
        let err = minimize(&sphere, &[(-1.0, 1.0), (3.0, -3.0)], config).unwrap_err();
        assert!(matches!(
            err,
            LeapfrogError::InvalidBounds { index: 1, .. }
        ));
        assert!(err.is_bounds_error());
    }
}
