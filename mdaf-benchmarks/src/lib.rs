#![doc = include_str!("../README.md")]
//!
//! # Quick start
//!
//! ```
//! use mdaf_benchmarks::ObjectiveFunction;
//! use ndarray::Array1;
//!
//! let sphere = ObjectiveFunction::new("sphere")?;
//! let value = sphere.evaluate(&Array1::from_vec(vec![1.0, 2.0]))?;
//! assert_eq!(value, 5.0);
//! assert_eq!(sphere.call_count(), 1);
//! # Ok::<(), mdaf_benchmarks::Error>(())
//! ```
//!
//! # Parallel evaluation
//!
//! Batches can be fanned out across independent worker processes. Each
//! worker is handed an immutable snapshot of the objective function and
//! evaluates its share of the positions; a failing task leaves a NaN at
//! its index instead of aborting the batch.
//!
//! ```no_run
//! use mdaf_benchmarks::{ObjectiveFunction, ParallelOptions};
//! use ndarray::Array1;
//!
//! let sphere = ObjectiveFunction::new("sphere")?;
//! let positions: Vec<_> = (0..64)
//!     .map(|i| Array1::from_vec(vec![i as f64, -(i as f64)]))
//!     .collect();
//! let values = sphere.parallel_evaluate(&positions, &ParallelOptions::default())?;
//! assert_eq!(values.len(), 64);
//! # Ok::<(), mdaf_benchmarks::Error>(())
//! ```

#![warn(missing_docs)]

pub mod batch;
pub mod derivative;
pub mod dispatch;
pub mod error;
pub mod objective;
mod persistence;
pub mod registry;
pub mod snapshot;
pub mod worker_protocol;

pub use batch::{evaluate_positions, BatchConfig};
pub use derivative::{CentralDifference, DerivativeEngine};
pub use dispatch::{evaluate_batch, BatchReport, ParallelOptions, FAILED_TASK};
pub use error::{Error, Result};
pub use objective::{ObjectiveBuilder, ObjectiveFunction};
pub use snapshot::{evaluate_wrapped, EvaluationSnapshot, Noise};

pub use mdaf_functions::{function_metadata, param, Formula, FunctionMetadata, Parameters};
