//! Objective-function instances: validated construction, shift and noise
//! wrapping, call counting, and entry points for batch and derivative
//! evaluation.

use std::sync::atomic::{AtomicU64, Ordering};

use ndarray::{Array1, Array2};

use mdaf_functions::{function_metadata, Formula, Parameters};

use crate::derivative::DerivativeEngine;
use crate::dispatch::{self, ParallelOptions};
use crate::error::{Error, Result};
use crate::persistence::SavedState;
use crate::registry;
use crate::snapshot::{EvaluationSnapshot, Noise};

/// A benchmark objective function bound to a registered formula, with
/// shift, noise, and call-count instrumentation.
///
/// `call_count` is the number of formula invocations observed by this
/// instance: serial calls plus worker-reported invocations aggregated
/// after each parallel batch, including invocations whose task failed
/// after the formula ran. It is process-local and makes no claim about
/// what individual worker processes counted internally.
#[derive(Debug)]
pub struct ObjectiveFunction {
    name: String,
    formula: Formula,
    ndim: usize,
    search_space_bounds: Vec<(f64, f64)>,
    optimal_solution_position: Option<Vec<Array1<f64>>>,
    optimal_solution: Option<f64>,
    parameters: Parameters,
    shift: Array1<f64>,
    noise: Noise,
    call_count: AtomicU64,
}

/// Builder for [`ObjectiveFunction`] with explicit validation.
#[derive(Debug, Clone)]
pub struct ObjectiveBuilder {
    name: String,
    ndim: Option<usize>,
    bounds: Option<Vec<(f64, f64)>>,
    parameters: Parameters,
}

impl ObjectiveBuilder {
    /// Overrides the dimensionality (scalable functions only).
    pub fn ndim(mut self, ndim: usize) -> Self {
        self.ndim = Some(ndim);
        self
    }

    /// Overrides the search-space bounds.
    pub fn bounds(mut self, bounds: Vec<(f64, f64)>) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Sets one formula parameter.
    pub fn parameter(mut self, name: &str, value: f64) -> Self {
        self.parameters.insert(name.to_string(), value);
        self
    }

    /// Sets several formula parameters at once.
    pub fn parameters(mut self, parameters: Parameters) -> Self {
        self.parameters.extend(parameters);
        self
    }

    /// Validates and builds the objective function.
    pub fn build(self) -> Result<ObjectiveFunction> {
        let formula = registry::resolve(&self.name)?;
        let metadata = function_metadata();
        let meta = metadata.get(&self.name);

        // Dimensionality: explicit, else the metadata default. Formulas
        // registered without metadata must bring explicit bounds.
        let ndim = match (self.ndim, meta) {
            (Some(ndim), _) => ndim,
            (None, Some(meta)) => meta.default_ndim,
            (None, None) => match &self.bounds {
                Some(bounds) => bounds.len(),
                None => {
                    return Err(Error::MissingBounds {
                        name: self.name.clone(),
                    })
                }
            },
        };

        // A non-scalable formula is only defined at its declared
        // dimensionality, whether or not explicit bounds were supplied.
        if let Some(meta) = meta {
            if !meta.scalable && ndim != meta.default_ndim {
                return Err(Error::FixedDimension {
                    name: self.name.clone(),
                    ndim: meta.default_ndim,
                });
            }
        }

        let bounds = match self.bounds {
            Some(bounds) => bounds,
            None => match meta {
                Some(meta) => meta.bounds_for(ndim).ok_or(Error::FixedDimension {
                    name: self.name.clone(),
                    ndim: meta.default_ndim,
                })?,
                None => {
                    return Err(Error::MissingBounds {
                        name: self.name.clone(),
                    })
                }
            },
        };

        if bounds.len() != ndim {
            return Err(Error::BoundsMismatch {
                expected: ndim,
                got: bounds.len(),
            });
        }
        for (index, &(lower, upper)) in bounds.iter().enumerate() {
            if lower > upper {
                return Err(Error::InvalidBound {
                    index,
                    lower,
                    upper,
                });
            }
        }

        // Parameters are strict in both directions: unknown keys are an
        // error, missing keys fall back to declared defaults.
        let defaults = meta
            .map(|m| m.default_parameters.clone())
            .unwrap_or_default();
        for name in self.parameters.keys() {
            if !defaults.contains_key(name) {
                return Err(Error::UnknownParameter {
                    name: name.clone(),
                    valid: defaults.keys().cloned().collect::<Vec<_>>().join(", "),
                });
            }
        }
        let mut parameters = Parameters::new();
        for (name, default) in &defaults {
            match self.parameters.get(name) {
                Some(&value) => {
                    parameters.insert(name.clone(), value);
                }
                None => {
                    log::warn!(
                        "the '{name}' parameter is not set; default value of {default} is used"
                    );
                    parameters.insert(name.clone(), *default);
                }
            }
        }

        let minima = meta.map(|m| m.minima_for(ndim)).unwrap_or_default();
        let (optimal_solution_position, optimal_solution) = if minima.is_empty() {
            (None, None)
        } else {
            for (coords, _) in &minima {
                if coords.len() != ndim {
                    return Err(Error::OptimumDimension {
                        expected: ndim,
                        got: coords.len(),
                    });
                }
            }
            let value = minima[0].1;
            let positions = minima
                .into_iter()
                .map(|(coords, _)| Array1::from_vec(coords))
                .collect();
            (Some(positions), Some(value))
        };

        Ok(ObjectiveFunction {
            name: self.name,
            formula,
            ndim,
            search_space_bounds: bounds,
            optimal_solution_position,
            optimal_solution,
            parameters,
            shift: Array1::zeros(ndim),
            noise: Noise::default(),
            call_count: AtomicU64::new(0),
        })
    }
}

impl ObjectiveFunction {
    /// Creates an objective function with all metadata defaults.
    pub fn new(name: &str) -> Result<Self> {
        Self::builder(name).build()
    }

    /// Starts a builder for the named formula.
    pub fn builder(name: &str) -> ObjectiveBuilder {
        ObjectiveBuilder {
            name: name.to_string(),
            ndim: None,
            bounds: None,
            parameters: Parameters::new(),
        }
    }

    /// Registry identifier of the bound formula.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimensionality of valid positions.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Search-space bounds, one (low, high) pair per dimension.
    pub fn search_space_bounds(&self) -> &[(f64, f64)] {
        &self.search_space_bounds
    }

    /// Known global optimum positions, if any, adjusted for the current
    /// shift.
    pub fn optimal_solution_position(&self) -> Option<&[Array1<f64>]> {
        self.optimal_solution_position.as_deref()
    }

    /// Known global optimum value, if any (noise-free).
    pub fn optimal_solution(&self) -> Option<f64> {
        self.optimal_solution
    }

    /// Bound parameter values.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The current coordinate shift.
    pub fn shift(&self) -> &Array1<f64> {
        &self.shift
    }

    /// The current noise parameters.
    pub fn noise(&self) -> Noise {
        self.noise
    }

    /// Number of formula invocations observed by this instance.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Resets the evaluation counter to zero.
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::Relaxed);
    }

    /// Evaluates the objective function at the given position.
    ///
    /// Applies the shift, invokes the formula, adds noise, and increments
    /// the call counter. Fails with [`Error::PositionDimension`] when the
    /// position has the wrong length.
    pub fn evaluate(&self, position: &Array1<f64>) -> Result<f64> {
        if position.len() != self.ndim {
            return Err(Error::PositionDimension {
                expected: self.ndim,
                got: position.len(),
            });
        }
        let shifted = position - &self.shift;
        let raw = (self.formula)(&shifted, &self.parameters);
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(raw + self.noise.sample())
    }

    /// Replaces the coordinate shift.
    ///
    /// Stored optimum positions track the shift: they always equal the
    /// unshifted optimum plus the current shift, including when a previous
    /// shift is replaced.
    pub fn apply_shift(&mut self, shift: Array1<f64>) -> Result<()> {
        if shift.len() != self.ndim {
            return Err(Error::PositionDimension {
                expected: self.ndim,
                got: shift.len(),
            });
        }
        let delta = &shift - &self.shift;
        if let Some(positions) = &mut self.optimal_solution_position {
            for position in positions.iter_mut() {
                *position = &*position + &delta;
            }
        }
        self.shift = shift;
        Ok(())
    }

    /// Sets additive Gaussian noise on formula output.
    pub fn apply_noise(&mut self, mean: f64, variance: f64) -> Result<()> {
        if !variance.is_finite() || variance < 0.0 {
            return Err(Error::InvalidNoiseVariance { variance });
        }
        self.noise = Noise { mean, variance };
        Ok(())
    }

    /// Whether the position lies inside the search-space bounds.
    pub fn within_bounds(&self, position: &Array1<f64>) -> Result<bool> {
        if position.len() != self.ndim {
            return Err(Error::PositionDimension {
                expected: self.ndim,
                got: position.len(),
            });
        }
        Ok(position
            .iter()
            .zip(&self.search_space_bounds)
            .all(|(&x, &(lower, upper))| x >= lower && x <= upper))
    }

    /// A deterministic, shift-applied, noise-free scalar function.
    ///
    /// This is the view handed to derivative engines: noise is not
    /// differentiable, so derivatives are always taken on the noise-free
    /// function. Calls through this closure are not counted.
    pub fn noise_free(&self) -> impl Fn(&Array1<f64>) -> f64 + '_ {
        move |position: &Array1<f64>| {
            let shifted = position - &self.shift;
            (self.formula)(&shifted, &self.parameters)
        }
    }

    /// Gradient of the noise-free function at a position.
    pub fn gradient(
        &self,
        position: &Array1<f64>,
        engine: &dyn DerivativeEngine,
    ) -> Result<Array1<f64>> {
        if position.len() != self.ndim {
            return Err(Error::PositionDimension {
                expected: self.ndim,
                got: position.len(),
            });
        }
        let f = self.noise_free();
        Ok(engine.gradient(&f, position))
    }

    /// Hessian of the noise-free function at a position.
    pub fn hessian(
        &self,
        position: &Array1<f64>,
        engine: &dyn DerivativeEngine,
    ) -> Result<Array2<f64>> {
        if position.len() != self.ndim {
            return Err(Error::PositionDimension {
                expected: self.ndim,
                got: position.len(),
            });
        }
        let f = self.noise_free();
        Ok(engine.hessian(&f, position))
    }

    /// Evaluates many positions across a pool of worker processes.
    ///
    /// Results are indexed by original position order; a failing task is
    /// logged and leaves the NaN sentinel at its index without aborting
    /// the batch. Worker-reported invocation counts are folded into this
    /// instance's call counter, including invocations behind failed
    /// tasks.
    ///
    /// Only finite results complete a task: worker responses cross a JSON
    /// boundary, which cannot carry non-finite numbers, so a formula
    /// output of infinity or NaN is reported as a failed task and yields
    /// the sentinel where a serial [`ObjectiveFunction::evaluate`] would
    /// return the non-finite value itself.
    pub fn parallel_evaluate(
        &self,
        positions: &[Array1<f64>],
        options: &ParallelOptions,
    ) -> Result<Vec<f64>> {
        let snapshot = EvaluationSnapshot::capture(self)?;
        let report = dispatch::evaluate_batch(positions, &snapshot, options)?;
        self.call_count
            .fetch_add(report.formula_calls, Ordering::Relaxed);
        Ok(report.values)
    }

    pub(crate) fn to_saved(&self) -> SavedState {
        SavedState {
            formula: self.name.clone(),
            ndim: self.ndim,
            bounds: self.search_space_bounds.clone(),
            optimum_positions: self
                .optimal_solution_position
                .as_ref()
                .map(|positions| positions.iter().map(|p| p.to_vec()).collect()),
            optimum_value: self.optimal_solution,
            parameters: self.parameters.clone(),
            shift: self.shift.to_vec(),
            noise: self.noise,
            call_count: self.call_count(),
        }
    }

    pub(crate) fn from_saved(state: SavedState) -> Result<Self> {
        let formula = registry::resolve(&state.formula)?;
        if state.bounds.len() != state.ndim {
            return Err(Error::BoundsMismatch {
                expected: state.ndim,
                got: state.bounds.len(),
            });
        }
        if state.shift.len() != state.ndim {
            return Err(Error::PositionDimension {
                expected: state.ndim,
                got: state.shift.len(),
            });
        }
        if !state.noise.variance.is_finite() || state.noise.variance < 0.0 {
            return Err(Error::InvalidNoiseVariance {
                variance: state.noise.variance,
            });
        }
        let optimal_solution_position = match state.optimum_positions {
            Some(positions) => {
                for coords in &positions {
                    if coords.len() != state.ndim {
                        return Err(Error::OptimumDimension {
                            expected: state.ndim,
                            got: coords.len(),
                        });
                    }
                }
                Some(positions.into_iter().map(Array1::from_vec).collect())
            }
            None => None,
        };
        Ok(Self {
            name: state.formula,
            formula,
            ndim: state.ndim,
            search_space_bounds: state.bounds,
            optimal_solution_position,
            optimal_solution: state.optimum_value,
            parameters: state.parameters,
            shift: Array1::from_vec(state.shift),
            noise: state.noise,
            call_count: AtomicU64::new(state.call_count),
        })
    }
}
