//! Shared registry of benchmark objective functions.
//!
//! Used by the `run_leapfrog` binary and by the cross-component tests to
//! exercise the optimizer on problems with known optima.

use ndarray::Array1;
use std::collections::HashMap;

/// Test function type definition
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Metadata describing a benchmark function.
#[derive(Clone, Debug)]
pub struct FunctionMetadata {
    /// Descriptive name.
    pub name: &'static str,
    /// Per-variable bounds, applied to every dimension.
    pub bounds: (f64, f64),
    /// Recommended problem dimension.
    pub default_dim: usize,
    /// Objective value at the global minimum.
    pub global_minimum: f64,
}

/// Sphere function - N-dimensional.
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Rosenbrock function - N-dimensional.
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    let mut sum = 0.0;
    for i in 0..x.len() - 1 {
        let xi = x[i];
        let xi_plus_1 = x[i + 1];
        sum += 100.0 * (xi_plus_1 - xi.powi(2)).powi(2) + (1.0 - xi).powi(2);
    }
    sum
}

/// Booth function - 2D.
/// Global minimum: f(1, 3) = 0
pub fn booth(x: &Array1<f64>) -> f64 {
    (x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2)
}

/// Beale function - 2D.
/// Global minimum: f(3, 0.5) = 0
pub fn beale(x: &Array1<f64>) -> f64 {
    (1.5 - x[0] + x[0] * x[1]).powi(2)
        + (2.25 - x[0] + x[0] * x[1].powi(2)).powi(2)
        + (2.625 - x[0] + x[0] * x[1].powi(3)).powi(2)
}

/// Himmelblau function - 2D, four identical global minima.
/// Global minimum: f = 0, e.g. at (3, 2)
pub fn himmelblau(x: &Array1<f64>) -> f64 {
    (x[0].powi(2) + x[1] - 11.0).powi(2) + (x[0] + x[1].powi(2) - 7.0).powi(2)
}

/// Ackley function - N-dimensional, many local minima.
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi * xi).sum();
    let sum_cos: f64 = x
        .iter()
        .map(|&xi| (2.0 * std::f64::consts::PI * xi).cos())
        .sum();
    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp()
        + 20.0
        + std::f64::consts::E
}

/// Rastrigin function - N-dimensional, highly multimodal.
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|&xi| xi * xi - 10.0 * (2.0 * std::f64::consts::PI * xi).cos())
            .sum::<f64>()
}

/// Offset quadratic - 2D; the constrained benchmark objective.
/// Unconstrained minimum: f(0, 0) = 100
pub fn offset_quadratic(x: &Array1<f64>) -> f64 {
    x[0].powi(2) + x[1].powi(2) + 100.0
}

/// Parabolic boundary constraint paired with [`offset_quadratic`]:
/// feasible when `x1 >= 10 - x0^2`.
pub fn parabolic_constraint(x: &Array1<f64>) -> f64 {
    -x[0].powi(2) + 10.0 - x[1]
}

/// Function registry mapping names to function pointers and metadata.
pub struct FunctionRegistry {
    functions: HashMap<&'static str, (TestFunction, FunctionMetadata)>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    /// Creates a new registry with all standard benchmark functions.
    pub fn new() -> Self {
        let mut functions: HashMap<&'static str, (TestFunction, FunctionMetadata)> =
            HashMap::new();

        let mut add = |name: &'static str,
                       f: TestFunction,
                       bounds: (f64, f64),
                       default_dim: usize,
                       global_minimum: f64| {
            functions.insert(
                name,
                (
                    f,
                    FunctionMetadata {
                        name,
                        bounds,
                        default_dim,
                        global_minimum,
                    },
                ),
            );
        };

        add("sphere", sphere, (-10.0, 10.0), 2, 0.0);
        add("rosenbrock", rosenbrock, (-2.048, 2.048), 2, 0.0);
        add("booth", booth, (-10.0, 10.0), 2, 0.0);
        add("beale", beale, (-4.5, 4.5), 2, 0.0);
        add("himmelblau", himmelblau, (-6.0, 6.0), 2, 0.0);
        add("ackley", ackley, (-5.0, 5.0), 2, 0.0);
        add("rastrigin", rastrigin, (-5.12, 5.12), 2, 0.0);
        add("offset_quadratic", offset_quadratic, (-10.0, 10.0), 2, 100.0);

        Self { functions }
    }

    /// Looks up a function and its metadata by name.
    pub fn get(&self, name: &str) -> Option<&(TestFunction, FunctionMetadata)> {
        self.functions.get(name)
    }

    /// Returns all registered function names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_functions_evaluate_to_known_minima() {
        assert_eq!(sphere(&array![0.0, 0.0]), 0.0);
        assert_eq!(rosenbrock(&array![1.0, 1.0]), 0.0);
        assert_eq!(booth(&array![1.0, 3.0]), 0.0);
        assert!(beale(&array![3.0, 0.5]).abs() < 1e-12);
        assert!(himmelblau(&array![3.0, 2.0]).abs() < 1e-10);
        assert!(ackley(&array![0.0, 0.0]).abs() < 1e-12);
        assert_eq!(rastrigin(&array![0.0, 0.0]), 0.0);
        assert_eq!(offset_quadratic(&array![0.0, 0.0]), 100.0);
    }

    #[test]
    fn test_constraint_sign_convention() {
        // On the boundary x1 = 10 - x0^2 the constraint is exactly zero
        assert_eq!(parabolic_constraint(&array![1.0, 9.0]), 0.0);
        // Inside the feasible region it is negative
        assert!(parabolic_constraint(&array![0.0, 11.0]) < 0.0);
        // Outside it is positive
        assert!(parabolic_constraint(&array![0.0, 5.0]) > 0.0);
    }

    #[test]
    fn test_registry_lookup() {
        let registry = FunctionRegistry::new();
        assert!(registry.get("sphere").is_some());
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.names().len(), 8);

        let (f, meta) = registry.get("rosenbrock").unwrap();
        assert_eq!(meta.default_dim, 2);
        assert_eq!(f(&array![1.0, 1.0]), meta.global_minimum);
    }
}
