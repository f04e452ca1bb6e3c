//! Static spheres and ray intersection

use pointplot_core::{Point3d, Vector3d};
use serde::{Deserialize, Serialize};

/// A sphere at a fixed center
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    center: Point3d,
    radius: f64,
}

impl Sphere {
    /// Negative radii are clamped to zero
    pub fn new(center: Point3d, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> &Point3d {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Ray parameter of the nearest hit strictly inside `(t_min, t_max)`
    pub fn hit(&self, origin: &Point3d, direction: &Vector3d, t_min: f64, t_max: f64) -> Option<f64> {
        let oc = self.center - origin;
        let a = direction.norm_squared();
        let h = direction.dot(&oc);
        let c = oc.norm_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let surrounds = |t: f64| t_min < t && t < t_max;

        let root = (h - sqrtd) / a;
        if surrounds(root) {
            return Some(root);
        }
        let root = (h + sqrtd) / a;
        if surrounds(root) {
            return Some(root);
        }
        None
    }
}
