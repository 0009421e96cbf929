//! Michalewicz test function

use crate::{param, Parameters};
use ndarray::Array1;

/// Michalewicz function - multimodal with steep ridged valleys
/// Global minimum: f(x) = -1.8013 for 2D at x = (2.202906, 1.570796)
/// Bounds: x_i in [0, pi]
///
/// Parameter `m` (default 10) controls the steepness of the valleys.
pub fn michalewicz(x: &Array1<f64>, params: &Parameters) -> f64 {
    let m = param(params, "m", 10.0);
    -x.iter()
        .enumerate()
        .map(|(i, &xi)| {
            xi.sin()
                * ((i as f64 + 1.0) * xi.powi(2) / std::f64::consts::PI)
                    .sin()
                    .powf(2.0 * m)
        })
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn known_values() {
        let params = Parameters::new();
        let optimum = Array1::from_vec(vec![2.202906, 1.570796]);
        assert_abs_diff_eq!(michalewicz(&optimum, &params), -1.8013, epsilon = 1e-3);
    }

    #[test]
    fn steepness_parameter_changes_landscape() {
        let x = Array1::from_vec(vec![2.0, 1.5]);
        let default = michalewicz(&x, &Parameters::new());
        let shallow = michalewicz(&x, &Parameters::from([("m".to_string(), 1.0)]));
        assert_ne!(default, shallow);
    }
}
