//! Camera utilities for 3D visualization

use nalgebra::{Matrix4, Perspective3, Point2, Point3, Vector3};

/// A 3D camera for viewing the plot box
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
    pub up: Vector3<f64>,
    pub fov: f64,
    pub aspect_ratio: f64,
    pub near: f64,
    pub far: f64,
}

/// A point after projection: normalized device coordinates (y up) and view depth
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub ndc: Point2<f64>,
    /// Distance in front of the camera along its view axis
    pub depth: f64,
}

impl Camera {
    /// Distance of an orbiting camera from its target
    pub const ORBIT_DISTANCE: f64 = 10.0;

    /// Create a new camera
    pub fn new(
        position: Point3<f64>,
        target: Point3<f64>,
        up: Vector3<f64>,
        fov: f64,
        aspect_ratio: f64,
        near: f64,
        far: f64,
    ) -> Self {
        Self {
            position,
            target,
            up,
            fov,
            aspect_ratio,
            near,
            far,
        }
    }

    /// A camera on a sphere around the origin, z up.
    ///
    /// `elevation` is the angle above the xy plane and `azimuth` the angle
    /// around z measured from +x, both in degrees.
    pub fn orbit(elevation: f64, azimuth: f64) -> Self {
        let position = Point3::from(Self::view_direction(elevation, azimuth) * Self::ORBIT_DISTANCE);
        Self::new(
            position,
            Point3::origin(),
            Vector3::z(),
            std::f64::consts::FRAC_PI_2,
            1.0,
            0.1,
            100.0,
        )
    }

    /// Unit vector from the target toward an orbiting eye
    pub fn view_direction(elevation: f64, azimuth: f64) -> Vector3<f64> {
        let (e, a) = (elevation.to_radians(), azimuth.to_radians());
        Vector3::new(e.cos() * a.cos(), e.cos() * a.sin(), e.sin())
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f64> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Matrix4<f64> {
        let perspective = Perspective3::new(self.aspect_ratio, self.fov, self.near, self.far);
        perspective.into_inner()
    }

    /// Project a world point into normalized device coordinates
    pub fn project(&self, point: &Point3<f64>) -> Projected {
        let view_point = self.view_matrix().transform_point(point);
        let ndc = self.projection_matrix().transform_point(&view_point);
        Projected {
            ndc: Point2::new(ndc.x, ndc.y),
            depth: -view_point.z,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::orbit(30.0, -60.0)
    }
}
