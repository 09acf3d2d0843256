pub mod particle;
pub mod state;

pub use particle::{Particle, Scheme};
pub use state::PhaseState;
