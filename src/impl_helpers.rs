use crate::{Leapfrog, LeapfrogError, LeapfrogReport, Result};
use ndarray::{Array1, Array2};

// ------------------------------ Internal helpers ------------------------------

impl<'a, F> Leapfrog<'a, F>
where
    F: Fn(&Array1<f64>) -> f64 + Sync,
{
    /// Checks run configuration that depends on the problem dimension.
    ///
    /// Everything here fails before any run state is allocated.
    pub(crate) fn validate_run(&self) -> Result<()> {
        let n = self.lower.len();

        if let Some(discrete) = &self.config.discrete {
            for &index in discrete {
                if index >= n {
                    return Err(LeapfrogError::DiscreteIndexOutOfRange { index, xlen: n });
                }
            }
        }

        if let Some(pointset) = &self.config.pointset {
            let (rows, cols) = pointset.dim();
            if rows != self.config.points || cols != n {
                return Err(LeapfrogError::PointSetShapeMismatch {
                    expected_rows: self.config.points,
                    expected_cols: n,
                    rows,
                    cols,
                });
            }
        }

        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn finish_report(
        &self,
        population: Array2<f64>,
        objs: Array1<f64>,
        x: Array1<f64>,
        fun: f64,
        success: bool,
        message: String,
        nit: usize,
        nfev: usize,
        error: f64,
        maxcv: f64,
        best_index: usize,
        worst_index: usize,
    ) -> LeapfrogReport {
        LeapfrogReport {
            x,
            fun,
            success,
            status: if success { 0 } else { 1 },
            message,
            nit,
            nfev,
            error,
            maxcv,
            best_index,
            worst_index,
            population,
            population_objs: objs,
        }
    }
}
