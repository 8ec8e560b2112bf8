//! Error types for the grid crate.

use thiserror::Error;

/// Errors that can occur when loading rasters or generating coordinate fields.
#[derive(Debug, Error)]
pub enum GridError {
    /// I/O error reading a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input file does not carry the expected extension.
    #[error("File type not matched: expected a .{expected} file, got {path}")]
    FileTypeMismatch {
        /// Extension the loader accepts (without the dot).
        expected: &'static str,
        /// The offending path.
        path: String,
    },

    /// A sample could not be parsed as a number.
    #[error("Invalid sample {token:?} on line {line}")]
    Parse {
        /// 1-based line number in the input file.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// A data row has a different number of columns than the first row.
    #[error("Ragged row on line {line}: expected {expected} columns, found {found}")]
    RaggedRow {
        /// 1-based line number in the input file.
        line: usize,
        /// Column count of the first data row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// No data rows remained after skipping header lines.
    #[error("No data rows after skipping {skip_rows} lines")]
    EmptyGrid {
        /// Number of lines that were skipped.
        skip_rows: usize,
    },

    /// A grid dimension is zero.
    #[error("Invalid grid shape: {rows} rows x {cols} columns (both must be positive)")]
    InvalidShape {
        /// Row count of the rejected shape.
        rows: usize,
        /// Column count of the rejected shape.
        cols: usize,
    },

    /// A coordinate range is empty or inverted.
    #[error("Invalid {axis} range: min {min} must be less than max {max}")]
    InvalidRange {
        /// Which axis the range belongs to ("latitude" or "longitude").
        axis: &'static str,
        /// Lower bound of the rejected range.
        min: f64,
        /// Upper bound of the rejected range.
        max: f64,
    },
}
