//! Rastrigin test function

use crate::Parameters;
use ndarray::Array1;

/// Rastrigin function - N-dimensional multimodal
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn rastrigin(x: &Array1<f64>, _params: &Parameters) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|&xi| xi.powi(2) - 10.0 * (2.0 * std::f64::consts::PI * xi).cos())
            .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn known_values() {
        let params = Parameters::new();
        assert_abs_diff_eq!(rastrigin(&Array1::zeros(2), &params), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rastrigin(&Array1::zeros(10), &params), 0.0, epsilon = 1e-12);
        // Integer coordinates land on local minima: f(1, 1) = 2.
        assert_abs_diff_eq!(
            rastrigin(&Array1::from_vec(vec![1.0, 1.0]), &params),
            2.0,
            epsilon = 1e-9
        );
    }
}
