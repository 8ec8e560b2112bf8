//! # dtmtile-grid
//!
//! Elevation raster loading and per-cell coordinate field generation.
//!
//! This crate provides the input side of the tile pyramid pipeline:
//! - [`AscGrid`] loads an ASCII grid raster (skip-rows plus rows of
//!   whitespace-separated samples) and exposes its [`GridShape`].
//! - [`CoordinateField`] interpolates a geographic bounding box across the
//!   grid shape, producing one latitude and one longitude value per cell.
//!
//! ## Example
//!
//! ```no_run
//! use dtmtile_grid::{check_extension, AscGrid, CoordinateField};
//!
//! check_extension("Whole_HK_DTM_5m_data.asc")?;
//! let grid = AscGrid::from_file("Whole_HK_DTM_5m_data.asc", 0)?;
//! let shape = grid.shape();
//!
//! // Per-cell coordinates for the raster's known extent
//! let lat = CoordinateField::latitude(shape, 22.15, 22.56)?;
//! let lon = CoordinateField::longitude(shape, 113.83, 114.44)?;
//! assert_eq!(lat.shape(), lon.shape());
//! # Ok::<(), dtmtile_grid::GridError>(())
//! ```

mod asc;
mod error;
mod field;

pub use asc::{check_extension, AscGrid};
pub use error::GridError;
pub use field::{CoordinateField, GridShape};

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
