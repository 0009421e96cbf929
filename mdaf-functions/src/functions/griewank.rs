//! Griewank test function

use crate::Parameters;
use ndarray::Array1;

/// Griewank function - multimodal, challenging for large dimensions
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-600, 600]
pub fn griewank(x: &Array1<f64>, _params: &Parameters) -> f64 {
    let sum_squares: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let product_cos: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    1.0 + sum_squares / 4000.0 - product_cos
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn known_values() {
        let params = Parameters::new();
        assert_abs_diff_eq!(griewank(&Array1::zeros(2), &params), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(griewank(&Array1::zeros(6), &params), 0.0, epsilon = 1e-12);
    }
}
