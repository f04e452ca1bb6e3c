//! Core data structures and traits for pointplot
//!
//! This crate provides the fundamental types shared by the loader, the sampler
//! and the plotter: points, point clouds, coordinate columns and bounds,
//! together with the common error type and tracing setup.

pub mod point;
pub mod point_cloud;
pub mod traits;
pub mod error;
pub mod logging;

pub use point::*;
pub use point_cloud::*;
pub use traits::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
