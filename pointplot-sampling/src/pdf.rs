//! Probability densities over directions

use crate::onb::Onb;
use crate::random::{random_cosine_direction, random_to_sphere, random_unit_vector};
use crate::sphere::Sphere;
use pointplot_core::{Point3d, Vector3d};
use rand::RngCore;
use std::f64::consts::PI;

/// Minimum ray parameter counted as a hit when evaluating sphere densities
const HIT_EPSILON: f64 = 0.001;

/// A density over directions that can be evaluated and sampled
pub trait Pdf {
    /// Density of `direction` (need not be normalized)
    fn value(&self, direction: &Vector3d) -> f64;

    /// Draw a direction distributed according to this density
    fn generate(&self, rng: &mut dyn RngCore) -> Vector3d;
}

/// Uniform density over the whole sphere of directions
#[derive(Debug, Clone, Copy, Default)]
pub struct SpherePdf;

impl Pdf for SpherePdf {
    fn value(&self, _direction: &Vector3d) -> f64 {
        1.0 / (4.0 * PI)
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Vector3d {
        random_unit_vector(rng)
    }
}

/// Cosine-weighted density over the hemisphere around `w`
#[derive(Debug, Clone, Copy)]
pub struct CosinePdf {
    uvw: Onb,
}

impl CosinePdf {
    pub fn new(w: &Vector3d) -> Self {
        Self { uvw: Onb::new(w) }
    }
}

impl Pdf for CosinePdf {
    fn value(&self, direction: &Vector3d) -> f64 {
        let cosine_theta = direction.normalize().dot(self.uvw.w());
        (cosine_theta / PI).max(0.0)
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Vector3d {
        self.uvw.transform(&random_cosine_direction(rng))
    }
}

/// Uniform density over the cone of directions from `origin` that hit `sphere`
#[derive(Debug, Clone, Copy)]
pub struct SphereConePdf {
    sphere: Sphere,
    origin: Point3d,
}

impl SphereConePdf {
    /// `origin` is expected to lie outside the sphere
    pub fn new(sphere: Sphere, origin: Point3d) -> Self {
        Self { sphere, origin }
    }

    fn distance_squared(&self) -> f64 {
        (self.sphere.center() - self.origin).norm_squared()
    }
}

impl Pdf for SphereConePdf {
    fn value(&self, direction: &Vector3d) -> f64 {
        if self
            .sphere
            .hit(&self.origin, direction, HIT_EPSILON, f64::INFINITY)
            .is_none()
        {
            return 0.0;
        }

        let radius = self.sphere.radius();
        let cos_theta_max = (1.0 - radius * radius / self.distance_squared()).sqrt();
        let solid_angle = 2.0 * PI * (1.0 - cos_theta_max);

        1.0 / solid_angle
    }

    fn generate(&self, rng: &mut dyn RngCore) -> Vector3d {
        let direction = self.sphere.center() - self.origin;
        let uvw = Onb::new(&direction);
        uvw.transform(&random_to_sphere(rng, self.sphere.radius(), direction.norm_squared()))
    }
}
