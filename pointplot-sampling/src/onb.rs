//! Orthonormal bases

use pointplot_core::Vector3d;

/// An orthonormal basis `(u, v, w)` built around a given direction `w`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Onb {
    axis: [Vector3d; 3],
}

impl Onb {
    /// Build a basis whose `w` axis points along `n`
    pub fn new(n: &Vector3d) -> Self {
        let w = n.normalize();
        let a = if w.x.abs() > 0.9 {
            Vector3d::new(0.0, 1.0, 0.0)
        } else {
            Vector3d::new(1.0, 0.0, 0.0)
        };
        let v = w.cross(&a).normalize();
        let u = w.cross(&v);
        Self { axis: [u, v, w] }
    }

    pub fn u(&self) -> &Vector3d {
        &self.axis[0]
    }

    pub fn v(&self) -> &Vector3d {
        &self.axis[1]
    }

    pub fn w(&self) -> &Vector3d {
        &self.axis[2]
    }

    /// Express a vector given in basis coordinates in world coordinates
    pub fn transform(&self, local: &Vector3d) -> Vector3d {
        self.axis[0] * local.x + self.axis[1] * local.y + self.axis[2] * local.z
    }
}
