//! Branin test function

use crate::{param, Parameters};
use ndarray::Array1;

/// Branin function - multimodal, 2D only
/// Global minimum: f(x) = 0.397887 at x = (-pi, 12.275), (pi, 2.275), (9.42478, 2.475)
/// Bounds: x1 in [-5, 10], x2 in [0, 15]
///
/// The six scaling constants are exposed as parameters `a`, `b`, `c`, `r`,
/// `s`, `t` with the standard defaults.
pub fn branin(x: &Array1<f64>, params: &Parameters) -> f64 {
    use std::f64::consts::PI;

    let x1 = x[0];
    let x2 = x[1];
    let a = param(params, "a", 1.0);
    let b = param(params, "b", 5.1 / (4.0 * PI.powi(2)));
    let c = param(params, "c", 5.0 / PI);
    let r = param(params, "r", 6.0);
    let s = param(params, "s", 10.0);
    let t = param(params, "t", 1.0 / (8.0 * PI));

    a * (x2 - b * x1.powi(2) + c * x1 - r).powi(2) + s * (1.0 - t) * x1.cos() + s
}
