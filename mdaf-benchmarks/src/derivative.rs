//! Derivative access for objective functions.
//!
//! The engine consumes a deterministic scalar function; objective-side
//! entry points always hand it the noise-free, shift-applied view. A
//! finite-difference engine is provided; callers with an automatic
//! differentiation backend can implement [`DerivativeEngine`] over it
//! instead.

use ndarray::{Array1, Array2};

/// A collaborator producing gradients and Hessians of a scalar function.
pub trait DerivativeEngine {
    /// Gradient of `f` at `x`.
    fn gradient(&self, f: &dyn Fn(&Array1<f64>) -> f64, x: &Array1<f64>) -> Array1<f64>;

    /// Hessian of `f` at `x`.
    fn hessian(&self, f: &dyn Fn(&Array1<f64>) -> f64, x: &Array1<f64>) -> Array2<f64>;
}

/// Central finite differences.
///
/// Step sizes default to the usual truncation/roundoff compromise:
/// cube-root of machine epsilon for first derivatives, fourth root for
/// second derivatives.
#[derive(Debug, Clone, Copy)]
pub struct CentralDifference {
    /// Step for gradient evaluation.
    pub gradient_step: f64,
    /// Step for Hessian evaluation.
    pub hessian_step: f64,
}

impl Default for CentralDifference {
    fn default() -> Self {
        Self {
            gradient_step: f64::EPSILON.cbrt(),
            hessian_step: f64::EPSILON.powf(0.25),
        }
    }
}

impl DerivativeEngine for CentralDifference {
    fn gradient(&self, f: &dyn Fn(&Array1<f64>) -> f64, x: &Array1<f64>) -> Array1<f64> {
        let h = self.gradient_step;
        let n = x.len();
        let mut grad = Array1::zeros(n);
        let mut probe = x.clone();
        for i in 0..n {
            probe[i] = x[i] + h;
            let forward = f(&probe);
            probe[i] = x[i] - h;
            let backward = f(&probe);
            probe[i] = x[i];
            grad[i] = (forward - backward) / (2.0 * h);
        }
        grad
    }

    fn hessian(&self, f: &dyn Fn(&Array1<f64>) -> f64, x: &Array1<f64>) -> Array2<f64> {
        let h = self.hessian_step;
        let n = x.len();
        let mut hessian = Array2::zeros((n, n));
        let center = f(x);
        let mut probe = x.clone();

        for i in 0..n {
            // Diagonal: (f(x+h) - 2 f(x) + f(x-h)) / h^2
            probe[i] = x[i] + h;
            let forward = f(&probe);
            probe[i] = x[i] - h;
            let backward = f(&probe);
            probe[i] = x[i];
            hessian[[i, i]] = (forward - 2.0 * center + backward) / (h * h);

            // Off-diagonal via the four-point cross difference; the matrix
            // is symmetric so only the upper triangle is computed.
            for j in (i + 1)..n {
                probe[i] = x[i] + h;
                probe[j] = x[j] + h;
                let pp = f(&probe);
                probe[j] = x[j] - h;
                let pm = f(&probe);
                probe[i] = x[i] - h;
                let mm = f(&probe);
                probe[j] = x[j] + h;
                let mp = f(&probe);
                probe[i] = x[i];
                probe[j] = x[j];

                let value = (pp - pm - mp + mm) / (4.0 * h * h);
                hessian[[i, j]] = value;
                hessian[[j, i]] = value;
            }
        }
        hessian
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sphere(x: &Array1<f64>) -> f64 {
        x.iter().map(|&xi| xi * xi).sum()
    }

    #[test]
    fn gradient_of_sphere_is_two_x() {
        let engine = CentralDifference::default();
        let x = Array1::from_vec(vec![1.5, -2.0, 0.25]);
        let grad = engine.gradient(&sphere, &x);
        for i in 0..3 {
            assert_abs_diff_eq!(grad[i], 2.0 * x[i], epsilon = 1e-6);
        }
    }

    #[test]
    fn hessian_of_sphere_is_two_i() {
        let engine = CentralDifference::default();
        let x = Array1::from_vec(vec![0.5, 1.0]);
        let hessian = engine.hessian(&sphere, &x);
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 2.0 } else { 0.0 };
                assert_abs_diff_eq!(hessian[[i, j]], expected, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn mixed_partials_are_symmetric() {
        // f(x, y) = x^2 y + 3 x y^2 has d2f/dxdy = 2x + 6y.
        let f = |x: &Array1<f64>| x[0] * x[0] * x[1] + 3.0 * x[0] * x[1] * x[1];
        let engine = CentralDifference::default();
        let x = Array1::from_vec(vec![1.0, 2.0]);
        let hessian = engine.hessian(&f, &x);
        assert_abs_diff_eq!(hessian[[0, 1]], 14.0, epsilon = 1e-3);
        assert_abs_diff_eq!(hessian[[0, 1]], hessian[[1, 0]], epsilon = 1e-12);
    }
}
