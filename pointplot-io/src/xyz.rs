//! XYZ point cloud support
//!
//! Points are read positionally from a numeric table: column 0 is x, column 1
//! is y and column 2 is z. Any further columns are ignored. Written files use
//! one `x y z` row per point, which [`XyzReader`] loads back unchanged.

use crate::table::{Table, TableReader};
use crate::{PointCloudReader, PointCloudWriter};
use pointplot_core::{CoordinateColumns, Error, Point3d, PointCloud, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Minimum number of columns a point table must have
pub const MIN_COLUMNS: usize = 3;

/// XYZ reader implementation
pub struct XyzReader;

impl XyzReader {
    /// Slice columns 0, 1 and 2 of a table into coordinate sequences
    pub fn extract(table: &Table) -> Result<CoordinateColumns> {
        let found = table.column_count();
        let missing = || Error::InsufficientColumns { found };

        if found < MIN_COLUMNS {
            return Err(missing());
        }

        let x = table.column(0).ok_or_else(missing)?;
        let y = table.column(1).ok_or_else(missing)?;
        let z = table.column(2).ok_or_else(missing)?;
        CoordinateColumns::new(x, y, z)
    }

    /// Load a file and return its coordinate columns
    pub fn read_columns<P: AsRef<Path>>(path: P) -> Result<CoordinateColumns> {
        let path = path.as_ref();
        let table = TableReader::read_table(path)?;
        let columns = Self::extract(&table)?;
        info!(
            path = %path.display(),
            points = columns.len(),
            extra_columns = table.column_count() - MIN_COLUMNS,
            "loaded point table"
        );
        Ok(columns)
    }
}

impl PointCloudReader for XyzReader {
    fn read_point_cloud<P: AsRef<Path>>(path: P) -> Result<PointCloud<Point3d>> {
        Ok(Self::read_columns(path)?.to_point_cloud())
    }
}

/// XYZ writer implementation
pub struct XyzWriter;

impl XyzWriter {
    /// Write points as `x y z` rows to any writer
    pub fn write_points<'a, W, I>(writer: &mut W, points: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = &'a Point3d>,
    {
        for point in points {
            writeln!(writer, "{} {} {}", point.x, point.y, point.z)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl PointCloudWriter for XyzWriter {
    fn write_point_cloud<P: AsRef<Path>>(cloud: &PointCloud<Point3d>, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_points(&mut writer, cloud)
    }
}
