use crate::models::Particle;
use crate::numerics::Vector3;

/// State interpolated onto the mid-plane `z = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    pub position: Vector3,
    pub velocity: Vector3,
}

/// Linear interpolation of the crossing when `z` changes sign between two
/// consecutive states. Only meaningful when the step is small compared to the
/// scale on which the orbit bends.
pub fn midplane_crossing(prev: &Particle, curr: &Particle) -> Option<Crossing> {
    let (z0, z1) = (prev.r.z, curr.r.z);
    if z0 * z1 >= 0.0 {
        return None;
    }
    Some(Crossing {
        position: (z1 * prev.r - z0 * curr.r) / (z1 - z0),
        velocity: (z1 * prev.v - z0 * curr.v) / (z1 - z0),
    })
}
