use super::tableau::{ButcherTableau, ST44, ST76};
use crate::numerics::Vector3;
use crate::physics::dynamics::EquationsOfMotion;
use std::ops::{Add, AddAssign, Mul};

/// Arithmetic a state needs to be advanced by [`RungeKutta`].
pub trait OdeState: Copy + Add<Output = Self> + AddAssign + Mul<f64, Output = Self> {}

impl OdeState for f64 {}
impl OdeState for Vector3 {}

/// Fixed-step explicit Runge-Kutta stepper driven by a Butcher tableau.
#[derive(Debug, Clone, Copy)]
pub struct RungeKutta<const STAGES: usize> {
    tableau: &'static ButcherTableau<STAGES>,
}

pub const RK4: RungeKutta<4> = RungeKutta::new(&ST44);
pub const RK6: RungeKutta<7> = RungeKutta::new(&ST76);

impl<const STAGES: usize> RungeKutta<STAGES> {
    pub const fn new(tableau: &'static ButcherTableau<STAGES>) -> Self {
        RungeKutta { tableau }
    }

    pub fn tableau(&self) -> &'static ButcherTableau<STAGES> {
        self.tableau
    }

    /// Advances `y` and `x` by one step `h` (which may be negative).
    pub fn step<S, E>(&self, y: &mut S, x: &mut f64, h: f64, eom: &E)
    where
        S: OdeState,
        E: EquationsOfMotion<S> + ?Sized,
    {
        let tableau = self.tableau;
        let mut k = [eom.compute_derivative(y, *x); STAGES];

        for i in 0..STAGES - 1 {
            let tmp = tableau.combine(i, &k[..=i]);
            k[i + 1] = eom.compute_derivative(&(*y + tmp * h), *x + tableau.node(i) * h);
        }

        let tmp = tableau.combine(STAGES - 1, &k);
        *x += h;
        *y += tmp * h;
    }
}

/// One 4th-order step of `dy/dx = f(y, x)`.
pub fn rk4<S: OdeState, E: EquationsOfMotion<S> + ?Sized>(y: &mut S, f: &E, x: &mut f64, h: f64) {
    RK4.step(y, x, h, f)
}

/// One 6th-order step of `dy/dx = f(y, x)`.
pub fn rk6<S: OdeState, E: EquationsOfMotion<S> + ?Sized>(y: &mut S, f: &E, x: &mut f64, h: f64) {
    RK6.step(y, x, h, f)
}
