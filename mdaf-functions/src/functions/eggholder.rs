//! Eggholder test function

use crate::Parameters;
use ndarray::Array1;

/// Eggholder function - highly multimodal, very challenging
/// Global minimum: f(x) = -959.6407 at x = (512, 404.2319)
/// Bounds: x_i in [-512, 512]
pub fn eggholder(x: &Array1<f64>, _params: &Parameters) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    -(x2 + 47.0) * (x2 + x1 / 2.0 + 47.0).abs().sqrt().sin()
        - x1 * (x1 - x2 - 47.0).abs().sqrt().sin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn known_values() {
        let params = Parameters::new();
        let optimum = Array1::from_vec(vec![512.0, 404.2319]);
        assert_abs_diff_eq!(eggholder(&optimum, &params), -959.6407, epsilon = 1e-3);
    }
}
