pub mod attractors;
pub mod dynamics;
pub mod energy;
pub mod fields;
pub mod force;
