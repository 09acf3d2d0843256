use crate::integrators::OdeState;
use crate::numerics::Vector3;

/// Joint (position, velocity) state of the coupled first-order system.
///
/// In the relativistic regime `velocity` holds the proper velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseState {
    pub position: Vector3,
    pub velocity: Vector3,
}

impl PhaseState {
    pub fn new(position: Vector3, velocity: Vector3) -> Self {
        PhaseState { position, velocity }
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}

impl std::ops::Add for PhaseState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        PhaseState {
            position: self.position + other.position,
            velocity: self.velocity + other.velocity,
        }
    }
}

impl std::ops::AddAssign for PhaseState {
    fn add_assign(&mut self, other: Self) {
        self.position += other.position;
        self.velocity += other.velocity;
    }
}

impl std::ops::Mul<f64> for PhaseState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        PhaseState {
            position: self.position * scalar,
            velocity: self.velocity * scalar,
        }
    }
}

impl OdeState for PhaseState {}
