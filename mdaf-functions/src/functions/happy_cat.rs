//! Happy Cat test function

use crate::{param, Parameters};
use ndarray::Array1;

/// Happy Cat function - sphere-like ridge with an interesting landscape
/// Global minimum: f(x) = 0 at x = (-1, -1, ..., -1)
/// Bounds: x_i in [-2, 2]
///
/// Parameter `alpha` (default 1/8) controls the sharpness of the ridge.
pub fn happy_cat(x: &Array1<f64>, params: &Parameters) -> f64 {
    let alpha = param(params, "alpha", 0.125);
    let n = x.len() as f64;
    let sum_squares: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_x: f64 = x.iter().sum();

    ((sum_squares - n).powi(2)).powf(alpha) + (0.5 * sum_squares + sum_x) / n + 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn known_values() {
        let params = Parameters::new();
        assert_abs_diff_eq!(
            happy_cat(&Array1::from_vec(vec![-1.0, -1.0]), &params),
            0.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            happy_cat(&Array1::from_vec(vec![-1.0; 4]), &params),
            0.0,
            epsilon = 1e-12
        );
    }
}
