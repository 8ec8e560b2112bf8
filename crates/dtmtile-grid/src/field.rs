//! Per-cell geographic coordinate fields.
//!
//! An elevation raster covers a known geographic bounding box, but the file
//! itself carries no per-sample coordinates. The [`CoordinateField`]
//! constructors fill that gap: linear interpolation across the box produces
//! one degree value per raster cell, latitude varying by row and longitude
//! varying by column. A downstream raster-to-tile slicer consumes both
//! fields together with the sample grid.

use crate::{GridError, Result};

/// Dimensions of a loaded raster grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    /// Number of rows (latitude axis).
    pub rows: usize,
    /// Number of columns (longitude axis).
    pub cols: usize,
}

impl GridShape {
    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(GridError::InvalidShape {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

/// A rows x cols matrix of degree values, one per raster cell.
///
/// Stored row-major; immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateField {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl CoordinateField {
    /// Generate the per-cell latitude field for a raster covering
    /// `min_lat..max_lat`.
    ///
    /// Values ascend by row from `min_lat` with a uniform step of
    /// `(max_lat - min_lat) / rows` and are constant across columns. The
    /// sequence is half-open: the last row is strictly below `max_lat`.
    pub fn latitude(shape: GridShape, min_lat: f64, max_lat: f64) -> Result<Self> {
        let axis = axis_values(shape.rows, min_lat, max_lat, "latitude", &shape)?;
        let mut values = Vec::with_capacity(shape.len());
        for &lat in &axis {
            values.extend(std::iter::repeat(lat).take(shape.cols));
        }
        Ok(Self {
            values,
            rows: shape.rows,
            cols: shape.cols,
        })
    }

    /// Generate the per-cell longitude field for a raster covering
    /// `min_lon..max_lon`.
    ///
    /// Values ascend by column from `min_lon` and are constant across rows;
    /// same half-open stepping as [`CoordinateField::latitude`].
    pub fn longitude(shape: GridShape, min_lon: f64, max_lon: f64) -> Result<Self> {
        let axis = axis_values(shape.cols, min_lon, max_lon, "longitude", &shape)?;
        let mut values = Vec::with_capacity(shape.len());
        for _ in 0..shape.rows {
            values.extend_from_slice(&axis);
        }
        Ok(Self {
            values,
            rows: shape.rows,
            cols: shape.cols,
        })
    }

    /// Shape of the field.
    pub fn shape(&self) -> GridShape {
        GridShape {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value at (row, col), or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.values[row * self.cols + col])
    }

    /// All values in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Half-open ascending sequence of `count` values from `min` with stride
/// `(max - min) / count`.
fn axis_values(
    count: usize,
    min: f64,
    max: f64,
    axis: &'static str,
    shape: &GridShape,
) -> Result<Vec<f64>> {
    shape.validate()?;
    if !(max > min) {
        return Err(GridError::InvalidRange { axis, min, max });
    }
    let step = (max - min) / count as f64;
    Ok((0..count).map(|i| min + i as f64 * step).collect())
}
