//! Point types and related functionality

use nalgebra::{Point3, Vector3};

/// A 3D point with single precision coordinates
pub type Point3f = Point3<f32>;

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// Returns true when all three coordinates are finite (no NaN or infinity)
pub fn is_finite_point(point: &Point3d) -> bool {
    point.x.is_finite() && point.y.is_finite() && point.z.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_check() {
        assert!(is_finite_point(&Point3d::new(1.0, -2.0, 0.0)));
        assert!(!is_finite_point(&Point3d::new(f64::NAN, 0.0, 0.0)));
        assert!(!is_finite_point(&Point3d::new(0.0, f64::INFINITY, 0.0)));
        assert!(!is_finite_point(&Point3d::new(0.0, 0.0, f64::NEG_INFINITY)));
    }

    #[test]
    fn test_widen_single_precision() {
        let p = Point3f::new(1.5, -2.0, 0.25);
        assert_eq!(p.cast::<f64>(), Point3d::new(1.5, -2.0, 0.25));
    }
}
