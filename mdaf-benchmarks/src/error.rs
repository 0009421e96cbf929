//! Error types for objective-function construction and evaluation.
//!
//! Everything surfaced through this enum is fatal to the call that
//! produced it; individual worker-task failures are absorbed by the
//! dispatcher and never appear here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while constructing or evaluating an objective
/// function.
#[derive(Debug, Error)]
pub enum Error {
    /// Search-space bounds have the wrong number of pairs.
    #[error("bounds mismatch: expected {expected} pairs, got {got}")]
    BoundsMismatch {
        /// Expected number of (low, high) pairs
        expected: usize,
        /// Actual number provided
        got: usize,
    },

    /// A lower bound exceeds its corresponding upper bound.
    #[error("invalid bound at index {index}: lower ({lower}) > upper ({upper})")]
    InvalidBound {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// No search-space bounds are available for the requested function.
    #[error("no search-space bounds available for '{name}'")]
    MissingBounds {
        /// The function without usable bounds
        name: String,
    },

    /// An optimal-solution point has the wrong dimension.
    #[error("optimum dimension mismatch: expected {expected}, got {got}")]
    OptimumDimension {
        /// Expected dimension
        expected: usize,
        /// Actual dimension of the optimum point
        got: usize,
    },

    /// A supplied parameter key is not among the declared defaults.
    #[error("'{name}' is not a valid parameter; valid parameters are [{valid}]")]
    UnknownParameter {
        /// The unknown parameter key
        name: String,
        /// Comma-separated list of valid keys
        valid: String,
    },

    /// Noise variance is negative or non-finite.
    #[error("invalid noise variance: {variance} (must be finite and >= 0)")]
    InvalidNoiseVariance {
        /// The invalid variance
        variance: f64,
    },

    /// The function is only defined at its declared dimensionality.
    #[error("'{name}' is only defined for {ndim} dimensions")]
    FixedDimension {
        /// The function name
        name: String,
        /// The only supported dimensionality
        ndim: usize,
    },

    /// A position has the wrong dimension for this objective function.
    #[error("position dimension mismatch: expected {expected}, got {got}")]
    PositionDimension {
        /// Expected dimension
        expected: usize,
        /// Actual dimension of the position
        got: usize,
    },

    /// A batch evaluation was requested with no positions.
    #[error("no positions to evaluate")]
    EmptyBatch,

    /// The formula identifier was never registered in this process.
    #[error("unknown formula '{name}'; registered formulas are [{registered}]")]
    UnknownFormula {
        /// The unresolvable identifier
        name: String,
        /// Comma-separated list of registered identifiers
        registered: String,
    },

    /// The evaluation snapshot could not be serialized for staging.
    #[error("failed to encode evaluation snapshot: {source}")]
    SnapshotEncode {
        /// The underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// The worker binary could not be located.
    #[error("worker binary not found at {}", path.display())]
    WorkerNotFound {
        /// Last path that was probed
        path: PathBuf,
    },

    /// Staging-artifact or other filesystem failure.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Saved objective-function state could not be encoded or decoded.
    #[error("persistence failure: {0}")]
    Persistence(#[from] bincode::Error),
}

/// A specialized `Result` type for objective-function operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` for construction-time validation errors.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Error::BoundsMismatch { .. }
                | Error::InvalidBound { .. }
                | Error::MissingBounds { .. }
                | Error::OptimumDimension { .. }
                | Error::UnknownParameter { .. }
                | Error::InvalidNoiseVariance { .. }
                | Error::FixedDimension { .. }
        )
    }

    /// Returns `true` if this is a dimension mismatch error.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            Error::BoundsMismatch { .. }
                | Error::OptimumDimension { .. }
                | Error::PositionDimension { .. }
        )
    }

    /// Returns `true` when the error prevents a parallel batch from being
    /// submitted at all (as opposed to degrading a single task).
    pub fn is_fatal_for_batch(&self) -> bool {
        // Per-task failures never surface as an `Error`, so everything
        // reaching the caller from a batch call is fatal.
        true
    }
}
