//! Visualization for 3D point clouds
//!
//! This crate turns a point cloud into a static 3D scatter figure and shows
//! it in a native window using egui:
//! - Plot configuration with fixed defaults
//! - Viridis coloring by elevation
//! - Axis limits, ticks and labels
//! - Camera projection of the plot box

pub mod camera;
pub mod colormap;
pub mod config;
pub mod scene;
pub mod ticks;
pub mod viewer;

pub use camera::*;
pub use colormap::*;
pub use config::*;
pub use scene::*;
pub use viewer::*;

use pointplot_core::{PointCloud, Result, Point3d};

/// Show a point cloud as a scatter plot and block until the window is closed
pub fn show_scatter(cloud: &PointCloud<Point3d>, config: PlotConfig) -> Result<()> {
    let scene = ScatterScene::build(cloud, &config)?;
    PlotWindow::new(scene, config).run()
}

/// Show a point cloud with the default figure settings
pub fn show_point_cloud(cloud: &PointCloud<Point3d>) -> Result<()> {
    show_scatter(cloud, PlotConfig::default())
}
