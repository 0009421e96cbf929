//! Beale test function

use crate::Parameters;
use ndarray::Array1;

/// Beale function - 2D with sharp valleys near the corners
/// Global minimum: f(x) = 0 at x = (3, 0.5)
/// Bounds: x_i in [-4.5, 4.5]
pub fn beale(x: &Array1<f64>, _params: &Parameters) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (1.5 - x1 + x1 * x2).powi(2)
        + (2.25 - x1 + x1 * x2.powi(2)).powi(2)
        + (2.625 - x1 + x1 * x2.powi(3)).powi(2)
}
