use super::state::PhaseState;
use crate::integrators::{RungeKutta, RK4, RK6};
use crate::numerics::Vector3;
use crate::physics::dynamics::{EquationsOfMotion, NewtonianDynamics, RelativisticDynamics};
use crate::physics::force::ForceLaw;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Point particle advanced in place by fixed-step Runge-Kutta methods.
///
/// `rk4`/`rk6` treat `v` as an ordinary velocity. `rk4_relativistic`/
/// `rk6_relativistic` treat it as a proper velocity (c = 1); the caller picks
/// the regime and should stick to it for a whole trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub r: Vector3,
    pub v: Vector3,
    m: f64,
    m_inv: f64,
    q: f64,
    t: f64,
}

impl Default for Particle {
    fn default() -> Self {
        Particle {
            r: Vector3::zeros(),
            v: Vector3::zeros(),
            m: 1.0,
            m_inv: 1.0,
            q: 0.0,
            t: 0.0,
        }
    }
}

impl Particle {
    pub fn new(mass: f64, charge: f64) -> Self {
        Particle::default().with_mass(mass).with_charge(charge)
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.set_mass(mass);
        self
    }

    pub fn with_charge(mut self, charge: f64) -> Self {
        self.q = charge;
        self
    }

    pub fn with_time(mut self, time: f64) -> Self {
        self.t = time;
        self
    }

    pub fn with_position(mut self, r: Vector3) -> Self {
        self.r = r;
        self
    }

    pub fn with_velocity(mut self, v: Vector3) -> Self {
        self.v = v;
        self
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn charge(&self) -> f64 {
        self.q
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn position(&self) -> Vector3 {
        self.r
    }

    pub fn velocity(&self) -> Vector3 {
        self.v
    }

    /// Sets the mass and its cached inverse together. A zero mass gives an
    /// infinite inverse.
    pub fn set_mass(&mut self, mass: f64) {
        self.m = mass;
        self.m_inv = 1.0 / mass;
    }

    pub fn set_charge(&mut self, charge: f64) {
        self.q = charge;
    }

    pub fn set_time(&mut self, time: f64) {
        self.t = time;
    }

    pub fn set_position(&mut self, r: Vector3) {
        self.r = r;
    }

    pub fn set_velocity(&mut self, v: Vector3) {
        self.v = v;
    }

    /// Zeroes position, velocity and time. Mass and charge are kept.
    pub fn reset(&mut self) {
        self.r.reset();
        self.v.reset();
        self.t = 0.0;
    }

    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.v.is_finite() && self.t.is_finite()
    }

    /// Non-relativistic 4th-order step.
    pub fn rk4<F: ForceLaw + ?Sized>(&mut self, h: f64, force: &F) {
        self.advance(&RK4, h, &NewtonianDynamics::new(force, self.m_inv, self.q));
    }

    /// Non-relativistic 6th-order step.
    pub fn rk6<F: ForceLaw + ?Sized>(&mut self, h: f64, force: &F) {
        self.advance(&RK6, h, &NewtonianDynamics::new(force, self.m_inv, self.q));
    }

    /// Relativistic 4th-order step; `v` is the proper velocity.
    pub fn rk4_relativistic<F: ForceLaw + ?Sized>(&mut self, h: f64, force: &F) {
        self.advance(&RK4, h, &RelativisticDynamics::new(force, self.m_inv, self.q));
    }

    /// Relativistic 6th-order step; `v` is the proper velocity.
    pub fn rk6_relativistic<F: ForceLaw + ?Sized>(&mut self, h: f64, force: &F) {
        self.advance(&RK6, h, &RelativisticDynamics::new(force, self.m_inv, self.q));
    }

    fn advance<const N: usize, E>(&mut self, scheme: &RungeKutta<N>, h: f64, eom: &E)
    where
        E: EquationsOfMotion<PhaseState>,
    {
        let mut state = PhaseState::new(self.r, self.v);
        scheme.step(&mut state, &mut self.t, h, eom);
        self.r = state.position;
        self.v = state.velocity;
    }
}

/// The four stepping methods, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Rk4,
    Rk6,
    Rk4Relativistic,
    Rk6Relativistic,
}

impl Scheme {
    pub fn advance<F: ForceLaw + ?Sized>(&self, particle: &mut Particle, h: f64, force: &F) {
        match self {
            Scheme::Rk4 => particle.rk4(h, force),
            Scheme::Rk6 => particle.rk6(h, force),
            Scheme::Rk4Relativistic => particle.rk4_relativistic(h, force),
            Scheme::Rk6Relativistic => particle.rk6_relativistic(h, force),
        }
    }

    pub fn is_relativistic(&self) -> bool {
        matches!(self, Scheme::Rk4Relativistic | Scheme::Rk6Relativistic)
    }

    pub fn stages(&self) -> usize {
        match self {
            Scheme::Rk4 | Scheme::Rk4Relativistic => RK4.tableau().stages(),
            Scheme::Rk6 | Scheme::Rk6Relativistic => RK6.tableau().stages(),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scheme::Rk4 => "rk4",
            Scheme::Rk6 => "rk6",
            Scheme::Rk4Relativistic => "rk4_relativistic",
            Scheme::Rk6Relativistic => "rk6_relativistic",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::fields::{LorentzForce, UniformField};
    use crate::physics::force::FreeMotion;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::cell::Cell;
    use test_case::test_case;

    fn gyration() -> LorentzForce<UniformField, UniformField> {
        LorentzForce::new(
            UniformField(Vector3::zeros()),
            UniformField(Vector3::new(0.0, 0.0, 1.0)),
        )
    }

    #[test]
    fn test_default_state() {
        let p = Particle::default();
        assert_eq!(p.mass(), 1.0);
        assert_eq!(p.charge(), 0.0);
        assert_eq!(p.time(), 0.0);
        assert_eq!(p.position(), Vector3::zeros());
        assert_eq!(p.velocity(), Vector3::zeros());
    }

    #[test]
    fn test_mass_inverse_follows_mass() {
        let mut p = Particle::new(4.0, 1.0);
        assert_eq!(p.m_inv, 0.25);
        p.set_mass(0.5);
        assert_eq!(p.m_inv, 2.0);
        p.set_mass(0.0);
        assert!(p.m_inv.is_infinite());
    }

    #[test]
    fn test_reset_keeps_mass_and_charge() {
        let mut p = Particle::new(2.0, -1.0)
            .with_time(3.0)
            .with_position(Vector3::new(1.0, 1.0, 1.0))
            .with_velocity(Vector3::new(0.1, 0.2, 0.3));
        p.reset();
        assert_eq!(p, Particle::new(2.0, -1.0));
    }

    #[test]
    fn test_copy_is_independent() {
        let mut p = Particle::new(1.0, 1.0).with_velocity(Vector3::new(0.3, 0.0, 0.1));
        let snapshot = p;
        p.rk4(0.1, &gyration());
        assert_ne!(p, snapshot);
        assert_eq!(snapshot.time(), 0.0);
    }

    #[test_case(Scheme::Rk4; "rk4")]
    #[test_case(Scheme::Rk6; "rk6")]
    #[test_case(Scheme::Rk4Relativistic; "rk4 relativistic")]
    #[test_case(Scheme::Rk6Relativistic; "rk6 relativistic")]
    fn test_free_motion_is_straight_line(scheme: Scheme) {
        let mut p = Particle::default().with_velocity(Vector3::new(0.3, -0.4, 0.0));
        let drift = if scheme.is_relativistic() {
            p.velocity().uv2v()
        } else {
            p.velocity()
        };
        for _ in 0..10 {
            scheme.advance(&mut p, 0.5, &FreeMotion);
        }
        assert_abs_diff_eq!(p.time(), 5.0, epsilon = 1e-14);
        assert_relative_eq!(p.position(), drift * 5.0, epsilon = 1e-13);
        assert_eq!(p.velocity(), Vector3::new(0.3, -0.4, 0.0));
    }

    #[test_case(Scheme::Rk4, 4; "rk4")]
    #[test_case(Scheme::Rk6, 7; "rk6")]
    #[test_case(Scheme::Rk4Relativistic, 4; "rk4 relativistic")]
    #[test_case(Scheme::Rk6Relativistic, 7; "rk6 relativistic")]
    fn test_force_evaluations_per_step(scheme: Scheme, expected: usize) {
        let calls = Cell::new(0);
        let counting = |_r: &Vector3, _v: &Vector3, _t: f64, _q: f64| {
            calls.set(calls.get() + 1);
            Vector3::zeros()
        };
        let mut p = Particle::default();
        scheme.advance(&mut p, 0.1, &counting);
        assert_eq!(calls.get(), expected);
        assert_eq!(scheme.stages(), expected);
    }

    #[test]
    fn test_stage_times() {
        let times = std::cell::RefCell::new(Vec::new());
        let recording = |_r: &Vector3, _v: &Vector3, t: f64, _q: f64| {
            times.borrow_mut().push(t);
            Vector3::zeros()
        };
        let mut p = Particle::default().with_time(1.0);
        p.rk4(-0.2, &recording);
        let expected = [1.0, 0.9, 0.9, 0.8];
        for (t, e) in times.borrow().iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*t, *e, epsilon = 1e-15);
        }
        assert_abs_diff_eq!(p.time(), 0.8, epsilon = 1e-15);
    }

    #[test]
    fn test_constant_force_is_exact() {
        // uniform acceleration g / m: r = v0 t + a t^2 / 2
        let push = |_r: &Vector3, _v: &Vector3, _t: f64, _q: f64| Vector3::new(0.0, 0.0, -2.0);
        let v0 = Vector3::new(1.0, 0.0, 3.0);
        let mut p4 = Particle::default().with_mass(2.0).with_velocity(v0);
        let mut p6 = p4;
        for _ in 0..20 {
            p4.rk4(0.05, &push);
            p6.rk6(0.05, &push);
        }
        let t = p4.time();
        let expected = v0 * t + Vector3::new(0.0, 0.0, -0.5) * (t * t);
        assert_relative_eq!(p4.position(), expected, epsilon = 1e-13);
        assert_relative_eq!(p6.position(), expected, epsilon = 1e-13);
        assert_relative_eq!(p6.velocity(), v0 + Vector3::new(0.0, 0.0, -t), epsilon = 1e-13);
    }

    #[test]
    fn test_relativistic_speed_stays_below_light() {
        let mut p = Particle::new(1.0, 1.0).with_velocity(Vector3::new(0.0, 0.0, 0.5).v2uv());
        let accelerate = LorentzForce::new(
            UniformField(Vector3::new(0.0, 0.0, 1.0)),
            UniformField(Vector3::zeros()),
        );
        for _ in 0..1000 {
            p.rk4_relativistic(0.1, &accelerate);
        }
        let speed = p.velocity().uv2v().abs();
        assert!(speed < 1.0);
        assert!(speed > 0.99);
        // hyperbolic motion: u = u0 + q E t
        assert_relative_eq!(p.velocity().z, 0.5_f64 / 0.75_f64.sqrt() + p.time(), epsilon = 1e-9);
    }
}
