#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

use ndarray::Array1;
use std::collections::{BTreeMap, HashMap};

pub mod functions;
pub use functions::*;

/// User-tunable formula parameters, keyed by declared parameter name.
///
/// A `BTreeMap` keeps iteration order stable, which matters when the map is
/// serialized into an evaluation snapshot.
pub type Parameters = BTreeMap<String, f64>;

/// A pure benchmark formula: position and parameters in, scalar out.
pub type Formula = fn(&Array1<f64>, &Parameters) -> f64;

/// Reads a declared parameter, falling back to its documented default.
pub fn param(params: &Parameters, key: &str, default: f64) -> f64 {
    params.get(key).copied().unwrap_or(default)
}

/// Metadata for a test function: bounds, known minima, parameters and
/// dimensionality properties.
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name, identical to its registry identifier.
    pub name: String,
    /// Bounds for each dimension (min, max), at `default_ndim`.
    pub bounds: Vec<(f64, f64)>,
    /// Known global minima as (position, value) pairs, at `default_ndim`.
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Declared parameters with their default values.
    pub default_parameters: Parameters,
    /// Dimensionality the metadata above is stated for.
    pub default_ndim: usize,
    /// Whether the formula is defined for arbitrary dimension.
    pub scalable: bool,
    /// Whether the function is multimodal.
    pub multimodal: bool,
    /// Short description of the function.
    pub description: String,
}

impl FunctionMetadata {
    /// Bounds for a requested dimensionality.
    ///
    /// Scalable functions replicate their per-coordinate bound; fixed
    /// functions only answer for `default_ndim`.
    pub fn bounds_for(&self, ndim: usize) -> Option<Vec<(f64, f64)>> {
        if ndim == self.default_ndim {
            return Some(self.bounds.clone());
        }
        if self.scalable && !self.bounds.is_empty() {
            return Some(vec![self.bounds[0]; ndim]);
        }
        None
    }

    /// Known global minima for a requested dimensionality.
    ///
    /// For dimensions other than `default_ndim` the minima are only known
    /// when the function is scalable and its optimum sits at a replicated
    /// coordinate with value zero (sphere, rastrigin, ...). Functions whose
    /// optimum value changes with dimension report nothing there.
    pub fn minima_for(&self, ndim: usize) -> Vec<(Vec<f64>, f64)> {
        if ndim == self.default_ndim {
            return self.global_minima.clone();
        }
        if self.scalable {
            return self
                .global_minima
                .iter()
                .filter(|(coords, value)| *value == 0.0 && !coords.is_empty())
                .map(|(coords, value)| (vec![coords[0]; ndim], *value))
                .collect();
        }
        Vec::new()
    }
}

fn no_parameters() -> Parameters {
    Parameters::new()
}

/// Get metadata for all available test functions (explicit definitions).
pub fn function_metadata() -> HashMap<String, FunctionMetadata> {
    use std::f64::consts::PI;

    let mut metadata = HashMap::new();
    let mut insert = |meta: FunctionMetadata| {
        metadata.insert(meta.name.clone(), meta);
    };

    insert(FunctionMetadata {
        name: "sphere".to_string(),
        bounds: vec![(-5.12, 5.12); 2],
        global_minima: vec![(vec![0.0, 0.0], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: true,
        multimodal: false,
        description: "Convex quadratic bowl, the simplest benchmark".to_string(),
    });

    insert(FunctionMetadata {
        name: "sum_squares".to_string(),
        bounds: vec![(-10.0, 10.0); 2],
        global_minima: vec![(vec![0.0, 0.0], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: true,
        multimodal: false,
        description: "Axis-weighted quadratic bowl".to_string(),
    });

    insert(FunctionMetadata {
        name: "rosenbrock".to_string(),
        bounds: vec![(-2.048, 2.048); 2],
        global_minima: vec![(vec![1.0, 1.0], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: true,
        multimodal: false,
        description: "Narrow curved valley, slow convergence along the ridge".to_string(),
    });

    insert(FunctionMetadata {
        name: "rastrigin".to_string(),
        bounds: vec![(-5.12, 5.12); 2],
        global_minima: vec![(vec![0.0, 0.0], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: true,
        multimodal: true,
        description: "Regular grid of local minima over a quadratic trend".to_string(),
    });

    insert(FunctionMetadata {
        name: "ackley".to_string(),
        bounds: vec![(-32.768, 32.768); 2],
        global_minima: vec![(vec![0.0, 0.0], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: true,
        multimodal: true,
        description: "Multimodal Ackley function with many local minima".to_string(),
    });

    insert(FunctionMetadata {
        name: "griewank".to_string(),
        bounds: vec![(-600.0, 600.0); 2],
        global_minima: vec![(vec![0.0, 0.0], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: true,
        multimodal: true,
        description: "Product-of-cosines ripple over a quadratic bowl".to_string(),
    });

    insert(FunctionMetadata {
        name: "schwefel".to_string(),
        bounds: vec![(-500.0, 500.0); 2],
        global_minima: vec![(vec![420.9687, 420.9687], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: true,
        multimodal: true,
        description: "Deceptive multimodal function, optimum far from origin".to_string(),
    });

    insert(FunctionMetadata {
        name: "levy".to_string(),
        bounds: vec![(-10.0, 10.0); 2],
        global_minima: vec![(vec![1.0, 1.0], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: true,
        multimodal: true,
        description: "Multimodal function with sinusoidal plateaus".to_string(),
    });

    insert(FunctionMetadata {
        name: "zakharov".to_string(),
        bounds: vec![(-5.0, 10.0); 2],
        global_minima: vec![(vec![0.0, 0.0], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: true,
        multimodal: false,
        description: "Unimodal function with quartic cross terms".to_string(),
    });

    insert(FunctionMetadata {
        name: "styblinski_tang".to_string(),
        bounds: vec![(-5.0, 5.0); 2],
        global_minima: vec![(vec![-2.903534, -2.903534], -78.33234)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: true,
        multimodal: true,
        description: "Separable quartic with one global and one local basin per axis".to_string(),
    });

    insert(FunctionMetadata {
        name: "michalewicz".to_string(),
        bounds: vec![(0.0, PI); 2],
        global_minima: vec![(vec![2.202906, 1.570796], -1.8013)],
        default_parameters: Parameters::from([("m".to_string(), 10.0)]),
        default_ndim: 2,
        scalable: false,
        multimodal: true,
        description: "Steep ridged valleys, steepness controlled by parameter m".to_string(),
    });

    insert(FunctionMetadata {
        name: "booth".to_string(),
        bounds: vec![(-10.0, 10.0); 2],
        global_minima: vec![(vec![1.0, 3.0], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: false,
        multimodal: false,
        description: "Simple 2D quadratic test function".to_string(),
    });

    insert(FunctionMetadata {
        name: "beale".to_string(),
        bounds: vec![(-4.5, 4.5); 2],
        global_minima: vec![(vec![3.0, 0.5], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: false,
        multimodal: true,
        description: "Sharp valleys near the bound corners".to_string(),
    });

    insert(FunctionMetadata {
        name: "matyas".to_string(),
        bounds: vec![(-10.0, 10.0); 2],
        global_minima: vec![(vec![0.0, 0.0], 0.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: false,
        multimodal: false,
        description: "Plate-shaped quadratic with mild coupling".to_string(),
    });

    insert(FunctionMetadata {
        name: "himmelblau".to_string(),
        bounds: vec![(-5.0, 5.0); 2],
        global_minima: vec![
            (vec![3.0, 2.0], 0.0),
            (vec![-2.805118, 3.131312], 0.0),
            (vec![-3.779310, -3.283186], 0.0),
            (vec![3.584428, -1.848126], 0.0),
        ],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: false,
        multimodal: true,
        description: "Four identical global minima".to_string(),
    });

    insert(FunctionMetadata {
        name: "branin".to_string(),
        bounds: vec![(-5.0, 10.0), (0.0, 15.0)],
        global_minima: vec![
            (vec![-PI, 12.275], 0.397887),
            (vec![PI, 2.275], 0.397887),
            (vec![9.42478, 2.475], 0.397887),
        ],
        default_parameters: Parameters::from([
            ("a".to_string(), 1.0),
            ("b".to_string(), 5.1 / (4.0 * PI * PI)),
            ("c".to_string(), 5.0 / PI),
            ("r".to_string(), 6.0),
            ("s".to_string(), 10.0),
            ("t".to_string(), 1.0 / (8.0 * PI)),
        ]),
        default_ndim: 2,
        scalable: false,
        multimodal: true,
        description: "Three global minima, fully parameterized scaling".to_string(),
    });

    insert(FunctionMetadata {
        name: "easom".to_string(),
        bounds: vec![(-100.0, 100.0); 2],
        global_minima: vec![(vec![PI, PI], -1.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: false,
        multimodal: true,
        description: "Flat plane with a single very narrow global basin".to_string(),
    });

    insert(FunctionMetadata {
        name: "eggholder".to_string(),
        bounds: vec![(-512.0, 512.0); 2],
        global_minima: vec![(vec![512.0, 404.2319], -959.6407)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: false,
        multimodal: true,
        description: "Highly multimodal, very challenging landscape".to_string(),
    });

    insert(FunctionMetadata {
        name: "drop_wave".to_string(),
        bounds: vec![(-5.12, 5.12); 2],
        global_minima: vec![(vec![0.0, 0.0], -1.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: false,
        multimodal: true,
        description: "Concentric wave rings around the origin".to_string(),
    });

    insert(FunctionMetadata {
        name: "goldstein_price".to_string(),
        bounds: vec![(-2.0, 2.0); 2],
        global_minima: vec![(vec![0.0, -1.0], 3.0)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: false,
        multimodal: true,
        description: "Polynomial with several local minima and a flat outer region".to_string(),
    });

    insert(FunctionMetadata {
        name: "six_hump_camel".to_string(),
        bounds: vec![(-3.0, 3.0), (-2.0, 2.0)],
        global_minima: vec![
            (vec![0.0898, -0.7126], -1.0316),
            (vec![-0.0898, 0.7126], -1.0316),
        ],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: false,
        multimodal: true,
        description: "Six local minima, two of them global".to_string(),
    });

    insert(FunctionMetadata {
        name: "happy_cat".to_string(),
        bounds: vec![(-2.0, 2.0); 2],
        global_minima: vec![(vec![-1.0, -1.0], 0.0)],
        default_parameters: Parameters::from([("alpha".to_string(), 0.125)]),
        default_ndim: 2,
        scalable: true,
        multimodal: true,
        description: "Sphere-like ridge, shape controlled by parameter alpha".to_string(),
    });

    insert(FunctionMetadata {
        name: "alpine_n2".to_string(),
        bounds: vec![(0.0, 10.0); 2],
        global_minima: vec![(vec![7.917053, 7.917053], -7.885601)],
        default_parameters: no_parameters(),
        default_ndim: 2,
        scalable: true,
        multimodal: true,
        description: "Product form, only defined for non-negative coordinates".to_string(),
    });

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_is_self_consistent() {
        for (name, meta) in function_metadata() {
            assert_eq!(meta.name, name);
            assert_eq!(meta.bounds.len(), meta.default_ndim);
            for (low, high) in &meta.bounds {
                assert!(low < high, "{name}: degenerate bound");
            }
            for (coords, _) in &meta.global_minima {
                assert_eq!(coords.len(), meta.default_ndim, "{name}: optimum dimension");
            }
        }
    }

    #[test]
    fn scalable_bounds_replicate() {
        let metadata = function_metadata();
        let sphere = &metadata["sphere"];
        let bounds = sphere.bounds_for(5).expect("sphere scales");
        assert_eq!(bounds, vec![(-5.12, 5.12); 5]);

        let minima = sphere.minima_for(5);
        assert_eq!(minima, vec![(vec![0.0; 5], 0.0)]);
    }

    #[test]
    fn fixed_dimension_functions_refuse_other_dims() {
        let metadata = function_metadata();
        let branin = &metadata["branin"];
        assert!(branin.bounds_for(3).is_none());
        assert!(branin.minima_for(3).is_empty());
        assert_eq!(branin.bounds_for(2).unwrap().len(), 2);
    }

    #[test]
    fn dimension_dependent_optima_are_not_replicated() {
        let metadata = function_metadata();
        // Styblinski-Tang's optimum value scales with n, so nothing is
        // known away from the stated dimension.
        let st = &metadata["styblinski_tang"];
        assert!(st.minima_for(4).is_empty());
        assert_eq!(st.minima_for(2).len(), 1);
    }
}
