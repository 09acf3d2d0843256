//! Algebraic laws of `Vector3` and of the velocity mappings, checked with proptest.

use emtrace::numerics::{cross, dot, Vector3};
use proptest::prelude::*;

fn vector(range: f64) -> impl Strategy<Value = Vector3> {
    (-range..range, -range..range, -range..range).prop_map(|(x, y, z)| Vector3::new(x, y, z))
}

/// Ordinary velocity strictly below light speed.
fn sub_light_velocity() -> impl Strategy<Value = Vector3> {
    vector(1.0).prop_filter("|v| < 0.99", |v| v.abs() < 0.99)
}

proptest! {
    #[test]
    fn addition_commutes(a in vector(1e3), b in vector(1e3)) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn addition_associates(a in vector(1e3), b in vector(1e3), c in vector(1e3)) {
        let tolerance = 1e-12 * (a.abs() + b.abs() + c.abs());
        prop_assert!(((a + b) + c - (a + (b + c))).abs() <= tolerance);
    }

    #[test]
    fn cross_product_anticommutes(a in vector(1e3), b in vector(1e3)) {
        prop_assert_eq!(a * b, -(b * a));
        prop_assert_eq!(cross(&a, &b), a.cross(&b));
    }

    #[test]
    fn dot_product_is_symmetric(a in vector(1e3), b in vector(1e3)) {
        prop_assert_eq!(a % b, b % a);
        prop_assert_eq!(dot(&a, &b), a.dot(&b));
        prop_assert_eq!(a.abs2(), a % a);
    }

    /// The cross product is orthogonal to both factors.
    #[test]
    fn cross_product_is_orthogonal(a in vector(1e2), b in vector(1e2)) {
        let c = a * b;
        let tolerance = 1e-13 * a.abs() * b.abs() * (a.abs() + b.abs());
        prop_assert!((c % a).abs() <= tolerance);
        prop_assert!((c % b).abs() <= tolerance);
    }

    #[test]
    fn scaling_distributes(a in vector(1e3), b in vector(1e3), s in -1e3f64..1e3) {
        let lhs = (a + b) * s;
        let rhs = a * s + b * s;
        let tolerance = 1e-12 * (a.abs() + b.abs()) * s.abs();
        prop_assert!((lhs - rhs).abs() <= tolerance);
    }

    #[test]
    fn integer_and_float_scaling_agree(a in vector(1e3), n in -100i32..100) {
        prop_assert_eq!(a * n, a * n as f64);
        prop_assert_eq!(n * a, a * n as f64);
    }

    #[test]
    fn proper_velocity_round_trip(v in sub_light_velocity()) {
        let u = v.v2uv();
        prop_assert!(u.abs() >= v.abs());
        prop_assert!((u.uv2v() - v).abs() < 1e-12);
        prop_assert!((v.gamma() - u.ugamma()).abs() < 1e-9 * v.gamma());
    }

    #[test]
    fn velocity_round_trip(u in vector(50.0)) {
        let v = u.uv2v();
        prop_assert!(v.abs() < 1.0);
        prop_assert!((v.v2uv() - u).abs() <= 1e-9 * (1.0 + u.abs2()));
    }
}
