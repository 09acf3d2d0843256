use super::force::ForceLaw;
use crate::models::PhaseState;

/// Right-hand side `dy/dx = f(y, x)` of a first-order system.
pub trait EquationsOfMotion<S> {
    fn compute_derivative(&self, state: &S, x: f64) -> S;
}

impl<S, F> EquationsOfMotion<S> for F
where
    F: Fn(&S, f64) -> S,
{
    fn compute_derivative(&self, state: &S, x: f64) -> S {
        self(state, x)
    }
}

/// `dr/dt = v`, `dv/dt = F(r, v, t, q) / m`.
pub struct NewtonianDynamics<'a, F: ForceLaw + ?Sized> {
    force: &'a F,
    mass_inv: f64,
    charge: f64,
}

impl<'a, F: ForceLaw + ?Sized> NewtonianDynamics<'a, F> {
    pub fn new(force: &'a F, mass_inv: f64, charge: f64) -> Self {
        Self {
            force,
            mass_inv,
            charge,
        }
    }
}

impl<F: ForceLaw + ?Sized> EquationsOfMotion<PhaseState> for NewtonianDynamics<'_, F> {
    fn compute_derivative(&self, state: &PhaseState, t: f64) -> PhaseState {
        PhaseState {
            position: state.velocity,
            velocity: self.mass_inv
                * self
                    .force
                    .force(&state.position, &state.velocity, t, self.charge),
        }
    }
}

/// Proper-velocity form: `dr/dt = u / sqrt(1 + u^2)`, `du/dt = F(r, dr/dt, t, q) / m`.
pub struct RelativisticDynamics<'a, F: ForceLaw + ?Sized> {
    force: &'a F,
    mass_inv: f64,
    charge: f64,
}

impl<'a, F: ForceLaw + ?Sized> RelativisticDynamics<'a, F> {
    pub fn new(force: &'a F, mass_inv: f64, charge: f64) -> Self {
        Self {
            force,
            mass_inv,
            charge,
        }
    }
}

impl<F: ForceLaw + ?Sized> EquationsOfMotion<PhaseState> for RelativisticDynamics<'_, F> {
    fn compute_derivative(&self, state: &PhaseState, t: f64) -> PhaseState {
        let velocity = state.velocity.uv2v();
        PhaseState {
            position: velocity,
            velocity: self.mass_inv * self.force.force(&state.position, &velocity, t, self.charge),
        }
    }
}
