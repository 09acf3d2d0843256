use crate::numerics::Vector3;

/// Force acting on a particle at position `r` with velocity `v`, time `t` and charge `q`.
///
/// Implementations must be pure: the integrator also evaluates them at the
/// trial states of intermediate stages.
pub trait ForceLaw {
    fn force(&self, r: &Vector3, v: &Vector3, t: f64, q: f64) -> Vector3;
}

impl<F> ForceLaw for F
where
    F: Fn(&Vector3, &Vector3, f64, f64) -> Vector3,
{
    fn force(&self, r: &Vector3, v: &Vector3, t: f64, q: f64) -> Vector3 {
        self(r, v, t, q)
    }
}

/// No force at all; free streaming.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeMotion;

impl ForceLaw for FreeMotion {
    fn force(&self, _r: &Vector3, _v: &Vector3, _t: f64, _q: f64) -> Vector3 {
        Vector3::zeros()
    }
}
