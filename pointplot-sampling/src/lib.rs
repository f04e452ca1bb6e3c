//! Direction sampling for pointplot
//!
//! This crate generates the point sets that the plotter visualizes. Each
//! sample is a direction drawn from a probability density and stored as a
//! point, so plotting the set shows the shape of the density:
//! - [`SpherePdf`]: uniform over the unit sphere
//! - [`CosinePdf`]: cosine-weighted over a hemisphere
//! - [`SphereConePdf`]: uniform over the cone of directions toward a sphere

pub mod onb;
pub mod pdf;
pub mod random;
pub mod sphere;

pub use onb::Onb;
pub use pdf::{CosinePdf, Pdf, SphereConePdf, SpherePdf};
pub use sphere::Sphere;

use pointplot_core::{Error, Point3d, PointCloud, Vector3d};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Draw `count` directions from `pdf` and return them as points, in draw order
pub fn sample_points(pdf: &dyn Pdf, count: usize, rng: &mut dyn RngCore) -> PointCloud<Point3d> {
    let mut cloud = PointCloud::with_capacity(count);
    for _ in 0..count {
        cloud.push(Point3d::from(pdf.generate(rng)));
    }
    debug!(count, "sampled directions");
    cloud
}

/// The densities the generator knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    /// Uniform over the unit sphere
    #[default]
    Sphere,
    /// Cosine-weighted around +z
    Cosine,
    /// Toward a unit sphere at the origin, seen from two units up the +z axis
    SphereCone,
}

impl Distribution {
    pub const ALL: [Distribution; 3] = [Distribution::Sphere, Distribution::Cosine, Distribution::SphereCone];

    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Sphere => "sphere",
            Distribution::Cosine => "cosine",
            Distribution::SphereCone => "sphere-cone",
        }
    }

    /// Build the density this variant names
    pub fn pdf(&self) -> Box<dyn Pdf> {
        match self {
            Distribution::Sphere => Box::new(SpherePdf),
            Distribution::Cosine => Box::new(CosinePdf::new(&Vector3d::z())),
            Distribution::SphereCone => Box::new(SphereConePdf::new(
                Sphere::new(Point3d::origin(), 1.0),
                Point3d::new(0.0, 0.0, 2.0),
            )),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Distribution {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == lower)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|d| d.name()).collect();
                Error::InvalidData(format!(
                    "unknown distribution '{}', expected one of: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}
