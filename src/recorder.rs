use ndarray::Array1;
use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::sync::{Arc, Mutex};

/// A single objective function evaluation record.
#[derive(Debug, Clone)]
pub struct EvaluationRecord {
    /// Function evaluation number (1-based).
    pub eval_id: usize,
    /// Input point x.
    pub x: Vec<f64>,
    /// Function value f(x).
    pub f_value: f64,
    /// Best function value seen so far.
    pub best_so_far: f64,
    /// Whether this evaluation improved the best known value.
    pub is_improvement: bool,
}

/// Records every objective function evaluation of a run.
///
/// The recorder is shared with the wrapped objective function through `Arc`,
/// so the interior state lives behind mutexes. Records are written to a
/// single CSV file by [`finalize`](Self::finalize).
#[derive(Debug)]
pub struct OptimizationRecorder {
    /// Function name (used for the CSV filename)
    function_name: String,
    /// Output directory for CSV files
    output_dir: String,
    /// Recorded evaluations
    records: Arc<Mutex<Vec<EvaluationRecord>>>,
    /// Best function value seen so far
    best_value: Arc<Mutex<Option<f64>>>,
    /// Counter for function evaluations
    eval_counter: Arc<Mutex<usize>>,
}

impl OptimizationRecorder {
    /// Creates a new recorder writing under `./records`.
    pub fn new(function_name: String) -> Self {
        Self::with_output_dir(function_name, "./records".to_string())
    }

    /// Creates a new recorder with a custom output directory.
    pub fn with_output_dir(function_name: String, output_dir: String) -> Self {
        Self {
            function_name,
            output_dir,
            records: Arc::new(Mutex::new(Vec::new())),
            best_value: Arc::new(Mutex::new(None)),
            eval_counter: Arc::new(Mutex::new(0)),
        }
    }

    /// Records a single function evaluation.
    pub fn record_evaluation(&self, x: &Array1<f64>, f_value: f64) {
        let mut eval_counter_guard = self.eval_counter.lock().unwrap();
        *eval_counter_guard += 1;
        let eval_id = *eval_counter_guard;
        drop(eval_counter_guard);

        let mut best_guard = self.best_value.lock().unwrap();
        let is_improvement = match *best_guard {
            Some(best) => f_value < best,
            None => true,
        };
        let best_so_far = if is_improvement {
            *best_guard = Some(f_value);
            f_value
        } else {
            best_guard.unwrap_or(f_value)
        };
        drop(best_guard);

        self.records.lock().unwrap().push(EvaluationRecord {
            eval_id,
            x: x.to_vec(),
            f_value,
            best_so_far,
            is_improvement,
        });
    }

    /// Returns the number of evaluations recorded so far.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    /// Returns `true` if nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a clone of the records collected so far.
    pub fn records(&self) -> Vec<EvaluationRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Writes all recorded evaluations to a CSV file and returns its path.
    pub fn finalize(&self) -> Result<String, Box<dyn std::error::Error>> {
        create_dir_all(&self.output_dir)?;

        let filename = format!("{}/{}_trace.csv", self.output_dir, self.function_name);
        let mut file = BufWriter::new(File::create(&filename)?);

        let records = self.records.lock().unwrap();
        if let Some(first) = records.first() {
            write!(file, "eval_id,")?;
            for i in 0..first.x.len() {
                write!(file, "x{},", i)?;
            }
            writeln!(file, "f_value,best_so_far,is_improvement")?;

            for record in records.iter() {
                write!(file, "{},", record.eval_id)?;
                for &xi in &record.x {
                    write!(file, "{:.16},", xi)?;
                }
                writeln!(
                    file,
                    "{:.16},{:.16},{}",
                    record.f_value, record.best_so_far, record.is_improvement
                )?;
            }
        }

        file.flush()?;
        Ok(filename)
    }
}
