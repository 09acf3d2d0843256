use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use nalgebra as na;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

/// 3-dimensional vector used as the particle state.
///
/// `a * b` is the cross product and `a % b` the dot product. The algebra
/// is carried out by `nalgebra::Vector3<f64>`.
/// The relativistic helpers work in natural units (c = 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    pub const fn zeros() -> Self {
        Vector3::new(0.0, 0.0, 0.0)
    }

    /// Convenience for integer literals; converts eagerly to `f64`.
    pub fn from_ints(x: i32, y: i32, z: i32) -> Self {
        Vector3::new(f64::from(x), f64::from(y), f64::from(z))
    }

    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    pub fn reset(&mut self) {
        self.set(0.0, 0.0, 0.0);
    }

    pub fn to_na(self) -> na::Vector3<f64> {
        na::Vector3::new(self.x, self.y, self.z)
    }

    pub fn abs2(&self) -> f64 {
        self.to_na().norm_squared()
    }

    pub fn abs(&self) -> f64 {
        self.to_na().norm()
    }

    pub fn dot(&self, other: &Vector3) -> f64 {
        *self % *other
    }

    pub fn cross(&self, other: &Vector3) -> Vector3 {
        *self * *other
    }

    /// Lorentz factor of an ordinary velocity, `1/sqrt(1 - |v|^2)`.
    ///
    /// NaN for `|v| > 1` and infinite for `|v| == 1`.
    pub fn gamma(&self) -> f64 {
        1.0 / (1.0 - self.abs2()).sqrt()
    }

    /// Lorentz factor of a proper velocity, `sqrt(1 + |u|^2)`.
    pub fn ugamma(&self) -> f64 {
        (1.0 + self.abs2()).sqrt()
    }

    /// Velocity to proper velocity: `gamma * v`.
    pub fn v2uv(&self) -> Vector3 {
        *self * self.gamma()
    }

    /// Proper velocity to velocity: `u / ugamma`.
    pub fn uv2v(&self) -> Vector3 {
        *self * (1.0 / self.ugamma())
    }

    pub fn is_finite(&self) -> bool {
        self.to_na().iter().all(|c| c.is_finite())
    }
}

pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
    *a * *b
}

pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
    *a % *b
}

pub fn abs(v: &Vector3) -> f64 {
    v.abs()
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, b: Vector3) -> Vector3 {
        (self.to_na() + b.to_na()).into()
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, b: Vector3) -> Vector3 {
        (self.to_na() - b.to_na()).into()
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        (-self.to_na()).into()
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, v: Vector3) {
        *self = *self + v;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, v: Vector3) {
        *self = *self - v;
    }
}

/// Cross product.
impl Mul for Vector3 {
    type Output = Vector3;

    fn mul(self, b: Vector3) -> Vector3 {
        self.to_na().cross(&b.to_na()).into()
    }
}

/// Dot product.
impl Rem for Vector3 {
    type Output = f64;

    fn rem(self, b: Vector3) -> f64 {
        self.to_na().dot(&b.to_na())
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, d: f64) -> Vector3 {
        (self.to_na() * d).into()
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        (self * v.to_na()).into()
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;

    fn div(self, d: f64) -> Vector3 {
        (self.to_na() / d).into()
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, d: f64) {
        *self = *self * d;
    }
}

impl DivAssign<f64> for Vector3 {
    fn div_assign(&mut self, d: f64) {
        *self = *self / d;
    }
}

// Integer scalars convert to f64 first.
impl Mul<i32> for Vector3 {
    type Output = Vector3;

    fn mul(self, i: i32) -> Vector3 {
        self * f64::from(i)
    }
}

impl Mul<Vector3> for i32 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        f64::from(self) * v
    }
}

impl Div<i32> for Vector3 {
    type Output = Vector3;

    fn div(self, i: i32) -> Vector3 {
        self / f64::from(i)
    }
}

impl MulAssign<i32> for Vector3 {
    fn mul_assign(&mut self, i: i32) {
        *self *= f64::from(i);
    }
}

impl DivAssign<i32> for Vector3 {
    fn div_assign(&mut self, i: i32) {
        *self /= f64::from(i);
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Vector3::new(v[0], v[1], v[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl From<na::Vector3<f64>> for Vector3 {
    fn from(v: na::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for na::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        v.to_na()
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
