//! Plot the sampled points as a 3D scatter
//!
//! Loads `~/raytracer/points.txt` (as written by `sphere_points > points.txt`),
//! takes columns 0, 1 and 2 as x, y and z, and shows them colored by z in a
//! window until it is closed.

use anyhow::Context;
use pointplot_core::logging::enable_tracing;
use pointplot_io::{expand_home, XyzReader, DEFAULT_POINTS_PATH};
use pointplot_visualization::{show_scatter, PlotConfig};
use tracing::info;

fn main() -> anyhow::Result<()> {
    enable_tracing(false);

    let path = expand_home(DEFAULT_POINTS_PATH);
    let columns = XyzReader::read_columns(&path)
        .with_context(|| format!("failed to load points from {}", path.display()))?;
    info!(points = columns.len(), "plotting point distribution");

    let cloud = columns.to_point_cloud();
    show_scatter(&cloud, PlotConfig::default()).context("failed to show the scatter plot")?;

    Ok(())
}
