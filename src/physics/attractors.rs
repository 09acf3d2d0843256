//! Chaotic flows written as second-order systems.
//!
//! For a flow `dx/dt = f(x)` the particle carries `r = x` and `v = f(x)`, and
//! the force law returns `dv/dt = J(x) v`, the time derivative of the flow.
//! Integrate them with unit mass; the charge is ignored.

use super::force::ForceLaw;
use crate::numerics::Vector3;
use serde::{Deserialize, Serialize};

/// E. N. Lorenz, J. Atmos. Sci. 20, 130 (1963).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lorenz {
    pub sigma: f64,
    pub b: f64,
    pub r: f64,
}

impl Default for Lorenz {
    fn default() -> Self {
        Lorenz {
            sigma: 10.0,
            b: 8.0 / 3.0,
            r: 28.0,
        }
    }
}

impl Lorenz {
    pub fn vector_field(&self, x: &Vector3) -> Vector3 {
        Vector3::new(
            self.sigma * (-x.x + x.y),
            -x.x * x.z + self.r * x.x - x.y,
            x.x * x.y - self.b * x.z,
        )
    }
}

impl ForceLaw for Lorenz {
    fn force(&self, r: &Vector3, v: &Vector3, _t: f64, _q: f64) -> Vector3 {
        Vector3::new(
            self.sigma * (-v.x + v.y),
            -(r.x * v.z + v.x * r.z) + self.r * v.x - v.y,
            (r.x * v.y + v.x * r.y) - self.b * v.z,
        )
    }
}

/// O. E. Rössler, Phys. Lett. A 57, 397 (1976).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rossler {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for Rossler {
    fn default() -> Self {
        Rossler {
            a: 0.2,
            b: 0.2,
            c: 5.7,
        }
    }
}

impl Rossler {
    pub fn vector_field(&self, x: &Vector3) -> Vector3 {
        Vector3::new(
            -x.y - x.z,
            x.x + self.a * x.y,
            self.b + x.x * x.z - self.c * x.z,
        )
    }
}

impl ForceLaw for Rossler {
    fn force(&self, r: &Vector3, v: &Vector3, _t: f64, _q: f64) -> Vector3 {
        Vector3::new(
            -v.y - v.z,
            v.x + self.a * v.y,
            (r.x * v.z + v.x * r.z) - self.c * v.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // central difference of the flow along itself
    fn flow_derivative(f: impl Fn(&Vector3) -> Vector3, x: &Vector3) -> Vector3 {
        let eps = 1e-6;
        let v = f(x);
        (f(&(*x + v * eps)) - f(&(*x - v * eps))) / (2.0 * eps)
    }

    #[test]
    fn test_lorenz_force_is_flow_derivative() {
        let lorenz = Lorenz::default();
        let x = Vector3::new(1.0, 2.0, 20.0);
        let v = lorenz.vector_field(&x);
        let expected = flow_derivative(|p| lorenz.vector_field(p), &x);
        assert_relative_eq!(lorenz.force(&x, &v, 0.0, 1.0), expected, max_relative = 1e-6);
    }

    #[test]
    fn test_rossler_force_is_flow_derivative() {
        let rossler = Rossler::default();
        let x = Vector3::new(0.5, -6.78, 0.3);
        let v = rossler.vector_field(&x);
        let expected = flow_derivative(|p| rossler.vector_field(p), &x);
        assert_relative_eq!(rossler.force(&x, &v, 0.0, 1.0), expected, max_relative = 1e-6);
    }

    #[test]
    fn test_lorenz_origin_is_fixed_point() {
        let lorenz = Lorenz::default();
        assert_eq!(lorenz.vector_field(&Vector3::zeros()), Vector3::zeros());
    }
}
