use leapfrog_opt::{LeapfrogConfigBuilder, minimize};
use ndarray::Array1;

fn main() {
    // Offset paraboloid with an infeasible unconstrained minimum
    let objective = |x: &Array1<f64>| x[0] * x[0] + x[1] * x[1] + 100.0;

    let bounds = [(-10.0, 10.0), (-10.0, 10.0)];

    // Feasible region: x1 >= 10 - x0^2, i.e. g(x) <= 0.
    // The unconstrained minimum at the origin violates it, so the solver
    // must settle on the parabola at f = 109.75.
    let config = LeapfrogConfigBuilder::new()
        .points(30)
        .maxit(50000)
        .tol(1e-4)
        .seed(1235)
        .constraint(|x: &Array1<f64>| -x[0] * x[0] + 10.0 - x[1])
        .build()
        .expect("invalid config");

    let report = minimize(&objective, &bounds, config).expect("optimization failed");

    println!(
        "success={} message=\"{}\"\nbest f={:.6e}\nbest x={:?}\nlargest violation seen={:.3e}",
        report.success, report.message, report.fun, report.x, report.maxcv
    );
}
