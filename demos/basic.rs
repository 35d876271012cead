use leapfrog_opt::{LeapfrogConfigBuilder, minimize};
use ndarray::Array1;

fn main() {
    // Ackley function (2D)
    let ackley = |x: &Array1<f64>| {
        let x0 = x[0];
        let x1 = x[1];
        let s = 0.5 * (x0 * x0 + x1 * x1);
        let c = 0.5
            * ((2.0 * std::f64::consts::PI * x0).cos() + (2.0 * std::f64::consts::PI * x1).cos());
        -20.0 * (-0.2 * s.sqrt()).exp() - c.exp() + 20.0 + std::f64::consts::E
    };

    let bounds = [(-5.0, 5.0), (-5.0, 5.0)];

    // Callback every 25 iterations to watch the error shrink
    let mut iter_log = 0usize;
    let config = LeapfrogConfigBuilder::new()
        .points(25)
        .maxit(20000)
        .tol(1e-5)
        .seed(42)
        .callback(Box::new(move |inter| {
            if iter_log % 25 == 0 {
                eprintln!(
                    "iter {:5}  best_f={:.6e}  error={:.3e}",
                    inter.iter, inter.fun, inter.error
                );
            }
            iter_log += 1;
        }))
        .build()
        .expect("invalid config");

    let report = minimize(&ackley, &bounds, config).expect("optimization failed");

    println!(
        "success={} message=\"{}\"\nbest f={:.6e}\nbest x={:?}",
        report.success, report.message, report.fun, report.x
    );
}
