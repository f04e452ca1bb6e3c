//! # pointplot
//!
//! Load, sample and plot 3D point distributions.
//!
//! This is the umbrella crate that provides access to all pointplot functionality.
//! Use it to get everything in one place, or depend on the individual crates for
//! more granular control over dependencies.
//!
//! ## Features
//!
//! - **Core**: Point types, point clouds, coordinate columns and errors
//! - **I/O**: Whitespace-delimited numeric tables and `x y z` point files
//! - **Sampling**: Direction sampling densities (uniform sphere, cosine, sphere cone)
//! - **Visualization**: Static 3D scatter plots in a native window
//!
//! ## Quick Start
//!
//! ```rust
//! use pointplot::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let cloud = sample_points(&SpherePdf, 100, &mut rng);
//! assert_eq!(cloud.len(), 100);
//! ```
//!
//! ## Feature Flags
//!
//! - `default`: Enables io and sampling
//! - `io`: Point file loading and writing
//! - `sampling`: Direction sampling
//! - `visualization`: Scatter plot window
//! - `all`: Enables all features

// Re-export core functionality
pub use pointplot_core::*;

// Re-export sub-crates
#[cfg(feature = "io")]
pub use pointplot_io as io;

#[cfg(feature = "sampling")]
pub use pointplot_sampling as sampling;

#[cfg(feature = "visualization")]
pub use pointplot_visualization as visualization;

/// Convenient imports for common use cases
pub mod prelude {
    pub use pointplot_core::*;

    #[cfg(feature = "io")]
    pub use pointplot_io::{expand_home, read_point_cloud, XyzReader, XyzWriter, DEFAULT_POINTS_PATH};

    #[cfg(feature = "sampling")]
    pub use pointplot_sampling::{sample_points, Distribution, Pdf, SpherePdf, CosinePdf, SphereConePdf};

    #[cfg(feature = "visualization")]
    pub use pointplot_visualization::{show_point_cloud, show_scatter, PlotConfig};
}
