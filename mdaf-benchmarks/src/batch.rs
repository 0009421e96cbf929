//! In-process batch evaluation.
//!
//! The fast path when process isolation is not needed: positions are
//! evaluated on the rayon thread pool, with a sequential fallback for
//! small batches. Unlike the worker-pool dispatcher, an evaluation error
//! here is fatal for the whole batch.

use ndarray::Array1;
use rayon::prelude::*;

use crate::error::Result;
use crate::objective::ObjectiveFunction;

/// In-process batch evaluation configuration.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Enable parallel evaluation.
    pub parallel: bool,
    /// Batches smaller than this are evaluated sequentially.
    pub min_parallel_len: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_parallel_len: 4,
        }
    }
}

/// Evaluates positions in-process, preserving input order.
pub fn evaluate_positions(
    objective: &ObjectiveFunction,
    positions: &[Array1<f64>],
    config: &BatchConfig,
) -> Result<Vec<f64>> {
    if !config.parallel || positions.len() < config.min_parallel_len {
        // Sequential evaluation for small batches or when disabled
        return positions
            .iter()
            .map(|position| objective.evaluate(position))
            .collect();
    }

    // Global rayon thread pool
    positions
        .par_iter()
        .map(|position| objective.evaluate(position))
        .collect()
}
