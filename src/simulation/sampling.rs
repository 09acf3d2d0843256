use crate::constants::TWO_PI;
use crate::numerics::Vector3;
use rand::Rng;

/// Velocity of the given speed with a direction uniform on the sphere.
pub fn isotropic_velocity<R: Rng + ?Sized>(rng: &mut R, speed: f64) -> Vector3 {
    let cos_theta: f64 = rng.gen_range(-1.0..=1.0);
    let phi: f64 = rng.gen_range(0.0..TWO_PI);
    let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
    speed * Vector3::new(cos_theta, sin_theta * phi.cos(), sin_theta * phi.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_speed_is_fixed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let v = isotropic_velocity(&mut rng, 0.8);
            assert_abs_diff_eq!(v.abs(), 0.8, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_mean_direction_vanishes() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20_000;
        let mut sum = Vector3::zeros();
        for _ in 0..n {
            sum += isotropic_velocity(&mut rng, 1.0);
        }
        let mean = sum / n as f64;
        assert!(mean.abs() < 0.03, "mean = {mean}");
    }

    #[test]
    fn test_seed_reproducible() {
        let a = isotropic_velocity(&mut StdRng::seed_from_u64(3), 1.0);
        let b = isotropic_velocity(&mut StdRng::seed_from_u64(3), 1.0);
        assert_eq!(a, b);
    }
}
