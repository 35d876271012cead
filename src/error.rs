//! Error types for the leapfrog optimizer.
//!
//! All configuration problems are detected before the point set is
//! allocated and reported through [`LeapfrogError`]; nothing about a run
//! in progress is ever surfaced as an error. Non-convergence is reported
//! through the `status` field of the final report instead.

use thiserror::Error;

/// Errors that can occur while configuring or starting a leapfrog run.
#[derive(Debug, Error)]
pub enum LeapfrogError {
    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds array
        lower_len: usize,
        /// Length of the upper bounds array
        upper_len: usize,
    },

    /// The bounds arrays are empty, so there is nothing to optimize.
    #[error("bounds are empty: at least one variable is required")]
    EmptyBounds,

    /// A lower bound exceeds its corresponding upper bound.
    #[error("invalid bounds at index {index}: lower ({lower}) > upper ({upper})")]
    InvalidBounds {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Point set size is too small (must be >= 2).
    #[error("point set size ({points}) must be >= 2")]
    PopulationTooSmall {
        /// The invalid point set size
        points: usize,
    },

    /// Convergence tolerance is zero or negative.
    #[error("invalid tolerance: {tol} (must be > 0)")]
    InvalidTolerance {
        /// The invalid tolerance value
        tol: f64,
    },

    /// The iteration cap is zero.
    #[error("max iterations must be >= 1")]
    ZeroIterations,

    /// A discrete variable index is out of range.
    #[error("discrete index {index} out of range for {xlen} variables")]
    DiscreteIndexOutOfRange {
        /// The offending discrete index
        index: usize,
        /// Number of variables in the problem
        xlen: usize,
    },

    /// A caller-supplied starting point set has the wrong shape.
    #[error(
        "point set shape mismatch: expected {expected_rows}x{expected_cols}, got {rows}x{cols}"
    )]
    PointSetShapeMismatch {
        /// Expected number of rows (the configured point count)
        expected_rows: usize,
        /// Expected number of columns (the number of variables)
        expected_cols: usize,
        /// Actual number of rows
        rows: usize,
        /// Actual number of columns
        cols: usize,
    },

    /// A uniform sampling interval is inverted (lower > upper).
    #[error("invalid sampling interval: [{lower}, {upper}]")]
    InvalidSampleRange {
        /// Lower end of the interval
        lower: f64,
        /// Upper end of the interval
        upper: f64,
    },
}

/// A specialized `Result` type for leapfrog operations.
pub type Result<T> = std::result::Result<T, LeapfrogError>;

impl LeapfrogError {
    /// Returns `true` if this is a bounds-related error.
    ///
    /// This includes `BoundsMismatch`, `EmptyBounds` and `InvalidBounds`.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            LeapfrogError::BoundsMismatch { .. }
                | LeapfrogError::EmptyBounds
                | LeapfrogError::InvalidBounds { .. }
        )
    }

    /// Returns `true` if this is a configuration-related error.
    ///
    /// This includes `PopulationTooSmall`, `InvalidTolerance` and
    /// `ZeroIterations`.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            LeapfrogError::PopulationTooSmall { .. }
                | LeapfrogError::InvalidTolerance { .. }
                | LeapfrogError::ZeroIterations
        )
    }

    /// Returns `true` if this error concerns a caller-supplied point set
    /// or discrete index set.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            LeapfrogError::DiscreteIndexOutOfRange { .. }
                | LeapfrogError::PointSetShapeMismatch { .. }
        )
    }
}
