//! Random direction generators

use pointplot_core::Vector3d;
use rand::Rng;
use std::f64::consts::PI;

/// A uniformly distributed unit vector, by rejection inside the unit cube
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vector3d {
    loop {
        let p = Vector3d::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let len_sq = p.norm_squared();
        // Tiny vectors would blow up on normalization.
        if 1e-160 < len_sq && len_sq <= 1.0 {
            return p / len_sq.sqrt();
        }
    }
}

/// A direction in the +z hemisphere with density proportional to `cos(theta)`
pub fn random_cosine_direction<R: Rng + ?Sized>(rng: &mut R) -> Vector3d {
    let r1: f64 = rng.gen();
    let r2: f64 = rng.gen();

    let phi = 2.0 * PI * r1;
    let x = phi.cos() * r2.sqrt();
    let y = phi.sin() * r2.sqrt();
    let z = (1.0 - r2).sqrt();

    Vector3d::new(x, y, z)
}

/// A direction around +z inside the cone subtended by a sphere of `radius`
/// seen from `distance_squared` away
pub fn random_to_sphere<R: Rng + ?Sized>(rng: &mut R, radius: f64, distance_squared: f64) -> Vector3d {
    let r1: f64 = rng.gen();
    let r2: f64 = rng.gen();
    let z = 1.0 + r2 * ((1.0 - radius * radius / distance_squared).sqrt() - 1.0);

    let phi = 2.0 * PI * r1;
    let sin_theta = (1.0 - z * z).max(0.0).sqrt();
    let x = phi.cos() * sin_theta;
    let y = phi.sin() * sin_theta;

    Vector3d::new(x, y, z)
}
