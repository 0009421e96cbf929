//! Sum Squares test function

use crate::Parameters;
use ndarray::Array1;

/// Sum of squares function - N-dimensional, axis-weighted
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub fn sum_squares(x: &Array1<f64>, _params: &Parameters) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (i + 1) as f64 * xi.powi(2))
        .sum()
}
