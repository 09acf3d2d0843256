pub mod vector3;

pub use vector3::{abs, cross, dot, Vector3};
