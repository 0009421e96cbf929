//! Goldstein-Price test function

use crate::Parameters;
use ndarray::Array1;

/// Goldstein-Price function - 2D with several local minima
/// Global minimum: f(x) = 3 at x = (0, -1)
/// Bounds: x_i in [-2, 2]
pub fn goldstein_price(x: &Array1<f64>, _params: &Parameters) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    let term1 = 1.0
        + (x1 + x2 + 1.0).powi(2)
            * (19.0 - 14.0 * x1 + 3.0 * x1.powi(2) - 14.0 * x2
                + 6.0 * x1 * x2
                + 3.0 * x2.powi(2));
    let term2 = 30.0
        + (2.0 * x1 - 3.0 * x2).powi(2)
            * (18.0 - 32.0 * x1 + 12.0 * x1.powi(2) + 48.0 * x2 - 36.0 * x1 * x2
                + 27.0 * x2.powi(2));
    term1 * term2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn known_values() {
        let params = Parameters::new();
        assert_abs_diff_eq!(
            goldstein_price(&Array1::from_vec(vec![0.0, -1.0]), &params),
            3.0,
            epsilon = 1e-9
        );
    }
}
