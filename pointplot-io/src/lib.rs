//! I/O operations for point clouds
//!
//! This crate reads whitespace-delimited numeric tables, slices them into
//! x/y/z coordinates and writes point clouds back out in the same layout.

pub mod table;
pub mod xyz;
pub mod path;

pub use table::{Table, TableReader};
pub use xyz::{XyzReader, XyzWriter};
pub use path::{expand_home, DEFAULT_POINTS_PATH};

use pointplot_core::{PointCloud, Point3d, Result};

/// Trait for reading point clouds from files
pub trait PointCloudReader {
    fn read_point_cloud<P: AsRef<std::path::Path>>(path: P) -> Result<PointCloud<Point3d>>;
}

/// Trait for writing point clouds to files
pub trait PointCloudWriter {
    fn write_point_cloud<P: AsRef<std::path::Path>>(cloud: &PointCloud<Point3d>, path: P) -> Result<()>;
}

/// Read a point cloud from a whitespace-delimited text file
pub fn read_point_cloud<P: AsRef<std::path::Path>>(path: P) -> Result<PointCloud<Point3d>> {
    <XyzReader as PointCloudReader>::read_point_cloud(path)
}
