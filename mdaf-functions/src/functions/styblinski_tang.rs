//! Styblinski-Tang test function

use crate::Parameters;
use ndarray::Array1;

/// Styblinski-Tang function - N-dimensional, separable
/// Global minimum: f(x) = -39.16599 * n at x = (-2.903534, ..., -2.903534)
/// Bounds: x_i in [-5, 5]
pub fn styblinski_tang(x: &Array1<f64>, _params: &Parameters) -> f64 {
    let sum: f64 = x
        .iter()
        .map(|&xi| xi.powi(4) - 16.0 * xi.powi(2) + 5.0 * xi)
        .sum();
    sum / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn known_values() {
        let params = Parameters::new();
        let optimum = Array1::from_vec(vec![-2.903534, -2.903534]);
        assert_abs_diff_eq!(
            styblinski_tang(&optimum, &params),
            -78.33234,
            epsilon = 1e-4
        );
    }
}
