//! Core traits for pointplot

use crate::{point::*, point_cloud::*};
use serde::{Deserialize, Serialize};

/// Axis-aligned bounds over the finite points of a set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds3 {
    pub min: Point3d,
    pub max: Point3d,
}

impl Bounds3 {
    /// Compute bounds over the finite points of an iterator.
    ///
    /// Points with a NaN or infinite coordinate are ignored. Returns `None`
    /// when no finite point remains.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3d>,
    {
        let mut bounds: Option<Self> = None;

        for p in points.into_iter().filter(|p| is_finite_point(p)) {
            match bounds.as_mut() {
                None => {
                    bounds = Some(Self { min: *p, max: *p });
                }
                Some(b) => {
                    b.min.x = b.min.x.min(p.x);
                    b.min.y = b.min.y.min(p.y);
                    b.min.z = b.min.z.min(p.z);

                    b.max.x = b.max.x.max(p.x);
                    b.max.y = b.max.y.max(p.y);
                    b.max.z = b.max.z.max(p.z);
                }
            }
        }

        bounds
    }

    /// `(min, max)` along axis 0 (x), 1 (y) or 2 (z)
    pub fn extent(&self, axis: usize) -> (f64, f64) {
        (self.min[axis], self.max[axis])
    }

    pub fn center(&self) -> Point3d {
        nalgebra::center(&self.min, &self.max)
    }
}

/// Trait for drawable objects
pub trait Drawable {
    /// Get the bounding box of the object, if it has any finite point
    fn bounding_box(&self) -> Option<Bounds3>;

    /// Get the center point of the object
    fn center(&self) -> Option<Point3d> {
        self.bounding_box().map(|b| b.center())
    }
}

impl Drawable for PointCloud<Point3d> {
    fn bounding_box(&self) -> Option<Bounds3> {
        Bounds3::from_points(self.iter())
    }
}
