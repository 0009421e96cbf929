//! Six Hump Camel test function

use crate::Parameters;
use ndarray::Array1;

/// Six-hump camel function - 2D multimodal
/// Global minimum: f(x) = -1.0316 at x = (0.0898, -0.7126) and (-0.0898, 0.7126)
/// Bounds: x1 in [-3, 3], x2 in [-2, 2]
pub fn six_hump_camel(x: &Array1<f64>, _params: &Parameters) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (4.0 - 2.1 * x1.powi(2) + x1.powi(4) / 3.0) * x1.powi(2)
        + x1 * x2
        + (-4.0 + 4.0 * x2.powi(2)) * x2.powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn known_values() {
        let params = Parameters::new();
        for optimum in [[0.0898, -0.7126], [-0.0898, 0.7126]] {
            let x = Array1::from_vec(optimum.to_vec());
            assert_abs_diff_eq!(six_hump_camel(&x, &params), -1.0316, epsilon = 1e-4);
        }
    }
}
