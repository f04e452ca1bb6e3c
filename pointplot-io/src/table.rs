//! Numeric text table loading
//!
//! Tables are plain text with one row per line and whitespace-separated
//! floating point values:
//! - `#` starts a comment that runs to the end of the line
//! - blank and comment-only lines are skipped
//! - every data row must have as many values as the first one

use pointplot_core::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

const COMMENT: char = '#';

/// A rectangular table of `f64` values stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    values: Vec<f64>,
    column_count: usize,
}

impl Table {
    /// Number of data rows
    pub fn row_count(&self) -> usize {
        if self.column_count == 0 {
            0
        } else {
            self.values.len() / self.column_count
        }
    }

    /// Number of values per row
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// The values of one row, or `None` past the last row
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.row_count() {
            return None;
        }
        let start = index * self.column_count;
        Some(&self.values[start..start + self.column_count])
    }

    /// Iterate over the rows in file order
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.values.chunks_exact(self.column_count.max(1))
    }

    /// Copy one column out, or `None` if the table is narrower than `index + 1`
    pub fn column(&self, index: usize) -> Option<Vec<f64>> {
        if index >= self.column_count {
            return None;
        }
        Some(self.rows().map(|row| row[index]).collect())
    }
}

/// Reader for whitespace-delimited numeric tables
pub struct TableReader;

impl TableReader {
    /// Read a table from a file
    pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let table = Self::parse_table(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded table"
        );
        Ok(table)
    }

    /// Parse a table from any buffered reader
    pub fn parse_table<R: BufRead>(reader: R) -> Result<Table> {
        let mut values = Vec::new();
        let mut column_count: Option<usize> = None;

        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line_number = index + 1;

            let content = match line.find(COMMENT) {
                Some(pos) => &line[..pos],
                None => line.as_str(),
            };

            let before = values.len();
            for (column, token) in content.split_whitespace().enumerate() {
                let value = token.parse::<f64>().map_err(|_| Error::Parse {
                    line: line_number,
                    column: column + 1,
                    token: token.to_string(),
                })?;
                values.push(value);
            }

            let found = values.len() - before;
            if found == 0 {
                continue;
            }

            match column_count {
                None => column_count = Some(found),
                Some(expected) if expected != found => {
                    return Err(Error::InconsistentColumns {
                        line: line_number,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
        }

        match column_count {
            Some(column_count) => Ok(Table { values, column_count }),
            None => Err(Error::EmptyInput),
        }
    }
}
