//! ASCII grid raster loading.
//!
//! Input files are plain text: an optional block of header lines (skipped by
//! count, like numpy's `loadtxt(skiprows=...)`), followed by one line per
//! raster row of whitespace-separated numeric samples. All data rows must
//! have the same number of columns.

use crate::{GridError, GridShape, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Extension the loader accepts (without the dot).
const ASC_EXTENSION: &str = "asc";

/// Reject paths that do not end in `.asc`.
pub fn check_extension<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case(ASC_EXTENSION) => Ok(()),
        _ => Err(GridError::FileTypeMismatch {
            expected: ASC_EXTENSION,
            path: path.display().to_string(),
        }),
    }
}

/// An elevation raster loaded from an ASCII grid file.
///
/// Samples are stored row-major in file order (for ESRI-style grids that is
/// north to south, west to east). The tile-pyramid core only consumes the
/// [`GridShape`]; sample values are kept for a future raster-to-tile slicer.
#[derive(Debug, Clone, PartialEq)]
pub struct AscGrid {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl AscGrid {
    /// Load a raster from a file, skipping `skip_rows` leading lines.
    pub fn from_file<P: AsRef<Path>>(path: P, skip_rows: usize) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file), skip_rows)
    }

    /// Load a raster from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R, skip_rows: usize) -> Result<Self> {
        let mut data = Vec::new();
        let mut rows = 0usize;
        let mut cols = None;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;
            if index < skip_rows {
                continue;
            }
            // Blank trailing lines are common in exported grids
            if line.trim().is_empty() {
                continue;
            }

            let mut count = 0usize;
            for token in line.split_whitespace() {
                let value: f64 = token.parse().map_err(|_| GridError::Parse {
                    line: line_number,
                    token: token.to_string(),
                })?;
                data.push(value);
                count += 1;
            }

            match cols {
                None => cols = Some(count),
                Some(expected) if expected != count => {
                    return Err(GridError::RaggedRow {
                        line: line_number,
                        expected,
                        found: count,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let Some(cols) = cols else {
            return Err(GridError::EmptyGrid { skip_rows });
        };
        Ok(Self { data, rows, cols })
    }

    /// Dimensions of the loaded raster.
    pub fn shape(&self) -> GridShape {
        GridShape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Sample value at (row, col), or `None` when out of range.
    pub fn value(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[row * self.cols + col])
    }

    /// All samples in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}
