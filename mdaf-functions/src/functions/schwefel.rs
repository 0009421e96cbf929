//! Schwefel test function

use crate::Parameters;
use ndarray::Array1;

/// Schwefel function - N-dimensional, deceptive multimodal
/// Global minimum: f(x) ~= 0 at x = (420.9687, ..., 420.9687)
/// Bounds: x_i in [-500, 500]
pub fn schwefel(x: &Array1<f64>, _params: &Parameters) -> f64 {
    let n = x.len() as f64;
    418.9829 * n
        - x.iter()
            .map(|&xi| xi * xi.abs().sqrt().sin())
            .sum::<f64>()
}
