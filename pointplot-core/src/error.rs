//! Error types for pointplot

use thiserror::Error;

/// Main error type for pointplot operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}, column {column}: could not parse {token:?} as a number")]
    Parse {
        line: usize,
        column: usize,
        token: String,
    },

    #[error("line {line}: expected {expected} columns, found {found}")]
    InconsistentColumns {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("need at least 3 columns (x, y, z), found {found}")]
    InsufficientColumns { found: usize },

    #[error("input contains no data rows")]
    EmptyInput,

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias for pointplot operations
pub type Result<T> = std::result::Result<T, Error>;
