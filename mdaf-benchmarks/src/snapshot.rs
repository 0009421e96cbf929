//! Immutable, serializable evaluation snapshots.
//!
//! A snapshot carries everything a worker process needs to evaluate
//! positions without the originating [`ObjectiveFunction`]: the registry
//! identifier plus plain parameter values. It holds no function pointers
//! and no back-references, so it can cross the process boundary as JSON.

use ndarray::Array1;
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use mdaf_functions::Parameters;

use crate::error::{Error, Result};
use crate::objective::ObjectiveFunction;
use crate::registry;

/// Additive Gaussian noise applied to formula output.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Noise {
    /// Mean of the perturbation.
    pub mean: f64,
    /// Variance of the perturbation; the Gaussian sample uses standard
    /// deviation `sqrt(variance)`.
    pub variance: f64,
}

impl Noise {
    /// Draws one noise sample. Variance zero (the default) is fully
    /// deterministic and returns exactly `mean`.
    pub fn sample(&self) -> f64 {
        if self.variance <= 0.0 {
            return self.mean;
        }
        let z: f64 = rand::rng().sample(StandardNormal);
        self.mean + z * self.variance.sqrt()
    }

    /// Whether sampling this noise is deterministic.
    pub fn is_deterministic(&self) -> bool {
        self.variance <= 0.0
    }
}

/// Immutable bundle capturing one objective function's evaluation state.
///
/// Invariant: `shift.len() == ndim`. Built once per parallel batch and
/// discarded when the batch completes; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSnapshot {
    /// Registry identifier of the benchmark formula.
    pub formula: String,
    /// Dimensionality of valid positions.
    pub ndim: usize,
    /// Bound parameter values.
    pub parameters: Parameters,
    /// Coordinate shift applied before formula evaluation.
    pub shift: Vec<f64>,
    /// Noise distribution parameters.
    pub noise: Noise,
}

impl EvaluationSnapshot {
    /// Captures the evaluation state of a live objective function.
    ///
    /// Fails with [`Error::UnknownFormula`] when the identifier cannot be
    /// resolved in this process, which makes an unresolvable batch fail
    /// before anything is staged or spawned.
    pub fn capture(objective: &ObjectiveFunction) -> Result<Self> {
        registry::resolve(objective.name())?;
        Ok(Self {
            formula: objective.name().to_string(),
            ndim: objective.ndim(),
            parameters: objective.parameters().clone(),
            shift: objective.shift().to_vec(),
            noise: objective.noise(),
        })
    }
}

/// The wrapped evaluator: shift translation, formula invocation, noise.
///
/// Computes `formula(position - shift, parameters) + noise` with the
/// formula resolved through the executing process's own registry. Call
/// counting is the caller's concern; this function has no side effects.
pub fn evaluate_wrapped(position: &Array1<f64>, snapshot: &EvaluationSnapshot) -> Result<f64> {
    if position.len() != snapshot.ndim {
        return Err(Error::PositionDimension {
            expected: snapshot.ndim,
            got: position.len(),
        });
    }
    let formula = registry::resolve(&snapshot.formula)?;
    let shifted: Array1<f64> = position
        .iter()
        .zip(&snapshot.shift)
        .map(|(p, s)| p - s)
        .collect();
    Ok(formula(&shifted, &snapshot.parameters) + snapshot.noise.sample())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn capture_copies_all_state() {
        let mut objective = ObjectiveFunction::new("sphere").unwrap();
        objective
            .apply_shift(Array1::from_vec(vec![1.0, -1.0]))
            .unwrap();
        objective.apply_noise(0.5, 0.0).unwrap();

        let snapshot = EvaluationSnapshot::capture(&objective).unwrap();
        assert_eq!(snapshot.formula, "sphere");
        assert_eq!(snapshot.ndim, 2);
        assert_eq!(snapshot.shift, vec![1.0, -1.0]);
        assert_eq!(snapshot.noise, Noise { mean: 0.5, variance: 0.0 });
    }

    #[test]
    fn wrapped_evaluation_matches_serial_evaluation() {
        let mut objective = ObjectiveFunction::new("rastrigin").unwrap();
        objective
            .apply_shift(Array1::from_vec(vec![0.25, -0.75]))
            .unwrap();
        let snapshot = EvaluationSnapshot::capture(&objective).unwrap();

        for coords in [[0.0, 0.0], [1.0, -1.0], [2.5, 3.5]] {
            let position = Array1::from_vec(coords.to_vec());
            let serial = objective.evaluate(&position).unwrap();
            let wrapped = evaluate_wrapped(&position, &snapshot).unwrap();
            assert_abs_diff_eq!(serial, wrapped, epsilon = 1e-12);
        }
    }

    #[test]
    fn wrapped_evaluation_rejects_bad_dimension() {
        let objective = ObjectiveFunction::new("sphere").unwrap();
        let snapshot = EvaluationSnapshot::capture(&objective).unwrap();
        let err = evaluate_wrapped(&Array1::zeros(3), &snapshot).unwrap_err();
        assert!(matches!(
            err,
            Error::PositionDimension {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let objective = ObjectiveFunction::new("branin").unwrap();
        let snapshot = EvaluationSnapshot::capture(&objective).unwrap();
        let encoded = serde_json::to_string(&snapshot).unwrap();
        let decoded: EvaluationSnapshot = serde_json::from_str(&encoded).unwrap();
        assert_eq!(snapshot, decoded);
    }

    #[test]
    fn zero_variance_noise_is_exact() {
        let noise = Noise {
            mean: 2.5,
            variance: 0.0,
        };
        assert!(noise.is_deterministic());
        for _ in 0..10 {
            assert_eq!(noise.sample(), 2.5);
        }
    }
}
