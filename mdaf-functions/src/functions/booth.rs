//! Booth test function

use crate::Parameters;
use ndarray::Array1;

/// Booth function - 2D quadratic
/// Global minimum: f(x) = 0 at x = (1, 3)
/// Bounds: x_i in [-10, 10]
pub fn booth(x: &Array1<f64>, _params: &Parameters) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    (x1 + 2.0 * x2 - 7.0).powi(2) + (2.0 * x1 + x2 - 5.0).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_values() {
        let params = Parameters::new();
        assert_eq!(booth(&Array1::from_vec(vec![1.0, 3.0]), &params), 0.0);
    }
}
