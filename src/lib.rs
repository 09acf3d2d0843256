pub mod config;
pub mod constants;
pub mod errors;
pub mod integrators;
pub mod models;
pub mod numerics;
pub mod physics;
pub mod simulation;

pub use errors::{TracerError, TracerResult};
pub use models::{Particle, Scheme};
pub use numerics::Vector3;
