//! Alpine N2 test function

use crate::Parameters;
use ndarray::Array1;

/// Alpine N.2 function - multimodal, only defined for x_i >= 0
/// Global minimum: f(x) = -2.808^N at x = (7.917, 7.917, ..., 7.917)
/// Bounds: x_i in [0, 10]
///
/// Negative coordinates take the square root of a negative number and
/// produce NaN; callers feeding out-of-domain positions get a non-finite
/// value back, not a panic.
pub fn alpine_n2(x: &Array1<f64>, _params: &Parameters) -> f64 {
    -x.iter().map(|&xi| xi.sqrt() * xi.sin()).product::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn known_values() {
        let params = Parameters::new();
        let optimum = Array1::from_vec(vec![7.917053, 7.917053]);
        assert_abs_diff_eq!(alpine_n2(&optimum, &params), -7.885601, epsilon = 1e-3);
    }

    #[test]
    fn out_of_domain_is_nan() {
        let params = Parameters::new();
        assert!(alpine_n2(&Array1::from_vec(vec![-1.0, 3.0]), &params).is_nan());
    }
}
