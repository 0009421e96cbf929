//! Rosenbrock test function

use crate::Parameters;
use ndarray::Array1;

/// Rosenbrock function - N-dimensional
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-2.048, 2.048]
pub fn rosenbrock(x: &Array1<f64>, _params: &Parameters) -> f64 {
    let mut sum = 0.0;
    for i in 0..x.len().saturating_sub(1) {
        let xi = x[i];
        let xi_plus_1 = x[i + 1];
        sum += 100.0 * (xi_plus_1 - xi.powi(2)).powi(2) + (1.0 - xi).powi(2);
    }
    sum
}
