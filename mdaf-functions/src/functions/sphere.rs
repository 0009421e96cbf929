//! Sphere test function

use crate::Parameters;
use ndarray::Array1;

/// Sphere function - N-dimensional
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5.12, 5.12]
pub fn sphere(x: &Array1<f64>, _params: &Parameters) -> f64 {
    x.iter().map(|&xi| xi.powi(2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        let params = Parameters::new();
        assert_eq!(sphere(&Array1::zeros(3), &params), 0.0);
        assert_eq!(sphere(&Array1::from_vec(vec![1.0, 1.0]), &params), 2.0);
        assert_eq!(sphere(&Array1::from_vec(vec![2.0, 2.0]), &params), 8.0);
        assert_eq!(sphere(&Array1::from_vec(vec![-3.0]), &params), 9.0);
    }
}
