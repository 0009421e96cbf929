//! Matyas test function

use crate::Parameters;
use ndarray::Array1;

/// Matyas function - 2D plate-shaped
/// Global minimum: f(x) = 0 at x = (0, 0)
/// Bounds: x_i in [-10, 10]
pub fn matyas(x: &Array1<f64>, _params: &Parameters) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    0.26 * (x1.powi(2) + x2.powi(2)) - 0.48 * x1 * x2
}
