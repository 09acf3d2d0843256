use crate::models::Particle;

/// `|v|^2` of the stored velocity state (proper velocity in the relativistic regime).
pub fn speed_squared(particle: &Particle) -> f64 {
    particle.velocity().abs2()
}

pub fn kinetic_energy(particle: &Particle) -> f64 {
    0.5 * particle.mass() * speed_squared(particle)
}

/// Lorentz factor of a particle whose velocity state is a proper velocity.
pub fn lorentz_factor(particle: &Particle) -> f64 {
    particle.velocity().ugamma()
}

/// `(m c^2)(gamma - 1)` with c = 1, for proper-velocity states.
pub fn relativistic_kinetic_energy(particle: &Particle) -> f64 {
    particle.mass() * (lorentz_factor(particle) - 1.0)
}

pub fn relative_drift(initial: f64, current: f64) -> f64 {
    if initial == 0.0 {
        (current - initial).abs()
    } else {
        (current - initial).abs() / initial.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::Vector3;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(1.0, Vector3::new(0.0, 0.0, 0.0), 0.0; "at rest")]
    #[test_case(2.0, Vector3::new(3.0, 4.0, 0.0), 25.0; "mass two")]
    #[test_case(1.0, Vector3::new(0.3, 0.0, 0.1), 0.05; "cyclotron preset")]
    fn test_kinetic_energy(mass: f64, velocity: Vector3, expected: f64) {
        let particle = Particle::default().with_mass(mass).with_velocity(velocity);
        assert_abs_diff_eq!(kinetic_energy(&particle), expected, epsilon = 1e-15);
    }

    #[test]
    fn test_relativistic_energy() {
        // u = 0.75 is v = 0.6, gamma = 1.25
        let particle = Particle::default()
            .with_mass(2.0)
            .with_velocity(Vector3::new(0.75, 0.0, 0.0));
        assert_abs_diff_eq!(lorentz_factor(&particle), 1.25, epsilon = 1e-15);
        assert_abs_diff_eq!(relativistic_kinetic_energy(&particle), 0.5, epsilon = 1e-15);
    }

    #[test_case(2.0, 2.0, 0.0; "no drift")]
    #[test_case(-4.0, -3.0, 0.25; "negative reference")]
    #[test_case(0.0, 1e-3, 1e-3; "zero reference")]
    fn test_relative_drift(initial: f64, current: f64, expected: f64) {
        assert_abs_diff_eq!(relative_drift(initial, current), expected, epsilon = 1e-15);
    }
}
