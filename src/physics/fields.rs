use super::force::ForceLaw;
use crate::numerics::Vector3;
use serde::{Deserialize, Serialize};

/// A vector field sampled in space and time.
pub trait VectorField {
    fn at(&self, r: &Vector3, t: f64) -> Vector3;
}

/// Spatially and temporally constant field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UniformField(pub Vector3);

impl VectorField for UniformField {
    fn at(&self, _r: &Vector3, _t: f64) -> Vector3 {
        self.0
    }
}

/// Thin current sheet with a normal component, `B = (z, 0, kappa)`.
///
/// `kappa` is the curvature parameter of the field lines crossing the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurrentSheet {
    pub kappa: f64,
}

impl VectorField for CurrentSheet {
    fn at(&self, r: &Vector3, _t: f64) -> Vector3 {
        Vector3::new(r.z, 0.0, self.kappa)
    }
}

/// Magnetic field models that can be chosen from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MagneticModel {
    Uniform { field: Vector3 },
    CurrentSheet { kappa: f64 },
}

impl VectorField for MagneticModel {
    fn at(&self, r: &Vector3, t: f64) -> Vector3 {
        match self {
            MagneticModel::Uniform { field } => UniformField(*field).at(r, t),
            MagneticModel::CurrentSheet { kappa } => CurrentSheet { kappa: *kappa }.at(r, t),
        }
    }
}

/// Lorentz force `q (E + v x B)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorentzForce<E: VectorField, B: VectorField> {
    pub electric: E,
    pub magnetic: B,
}

impl<E: VectorField, B: VectorField> LorentzForce<E, B> {
    pub fn new(electric: E, magnetic: B) -> Self {
        LorentzForce { electric, magnetic }
    }
}

impl<E: VectorField, B: VectorField> ForceLaw for LorentzForce<E, B> {
    fn force(&self, r: &Vector3, v: &Vector3, t: f64, q: f64) -> Vector3 {
        q * (self.electric.at(r, t) + *v * self.magnetic.at(r, t))
    }
}

/// Offset `-m (v x B) / (q |B|^2)` that puts the gyro-center of a particle
/// with velocity `v` in field `b` at the origin.
pub fn gyrocenter_offset(v: &Vector3, b: &Vector3, mass: f64, charge: f64) -> Vector3 {
    -mass * (*v * *b) / (charge * b.abs2())
}
