use leapfrog_opt::{LeapfrogConfigBuilder, minimize};
use ndarray::Array1;

fn main() {
    // Booth function, with both variables constrained to integers.
    // The continuous minimum happens to be integral: f(1, 3) = 0.
    let booth = |x: &Array1<f64>| {
        (x[0] + 2.0 * x[1] - 7.0).powi(2) + (2.0 * x[0] + x[1] - 5.0).powi(2)
    };

    let bounds = [(-10.0, 10.0), (-10.0, 10.0)];

    let config = LeapfrogConfigBuilder::new()
        .points(20)
        .maxit(20000)
        .tol(1e-3)
        .seed(7)
        .discrete(vec![0, 1])
        .build()
        .expect("invalid config");

    let report = minimize(&booth, &bounds, config).expect("optimization failed");

    println!(
        "success={} message=\"{}\"\nbest f={:.6e}\nbest x={:?}",
        report.success, report.message, report.fun, report.x
    );
}
