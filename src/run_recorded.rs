use crate::recorder::OptimizationRecorder;
use crate::{LeapfrogConfig, LeapfrogReport, Result, minimize};
use ndarray::Array1;
use std::sync::Arc;

/// Runs a leapfrog optimization with every objective evaluation recorded.
///
/// Wraps the objective so that each evaluation is pushed into `recorder`
/// before its value is returned to the optimizer. The recorded trace can be
/// written to CSV afterwards with [`OptimizationRecorder::finalize`].
pub fn run_recorded_minimize<F>(
    func: F,
    bounds: &[(f64, f64)],
    config: LeapfrogConfig,
    recorder: Arc<OptimizationRecorder>,
) -> Result<LeapfrogReport>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    let recorded = move |x: &Array1<f64>| -> f64 {
        let f_value = func(x);
        recorder.record_evaluation(x, f_value);
        f_value
    };
    minimize(&recorded, bounds, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LeapfrogConfigBuilder;

    #[test]
    fn test_recorded_run_captures_every_evaluation() {
        let recorder = Arc::new(OptimizationRecorder::new("sphere".to_string()));
        let config = LeapfrogConfigBuilder::new()
            .seed(42)
            .maxit(50)
            .tol(1e-3)
            .build()
            .expect("invalid config");

        let report = run_recorded_minimize(
            |x: &Array1<f64>| x.iter().map(|&xi| xi * xi).sum(),
            &[(-5.0, 5.0), (-5.0, 5.0)],
            config,
            recorder.clone(),
        )
        .expect("run failed");

        assert_eq!(recorder.len(), report.nfev);
        let records = recorder.records();
        // best_so_far is non-increasing across the trace
        for pair in records.windows(2) {
            assert!(pair[1].best_so_far <= pair[0].best_so_far);
        }
    }
}
