//! # dtmtile-pyramid
//!
//! Slippy-map tile pyramid enumeration for a geographic bounding box.
//!
//! This crate is the computational core of the pipeline: the bidirectional
//! mapping between geographic coordinates and Web-Mercator tile indices
//! ([`TileIndex`]), and the per-zoom enumeration of tiles covering a
//! [`BoundingBox`] ([`TilePyramid`]), each carrying its four geographic
//! corners. The enumeration is a lazy iterator; callers decide whether to
//! print, serialize, or feed the records to a renderer.
//!
//! ## Example
//!
//! ```
//! use dtmtile_pyramid::{BoundingBox, PyramidConfig, TilePyramid};
//!
//! let bbox = BoundingBox::new(0.0, 10.0, 0.0, 10.0)?;
//! let pyramid = TilePyramid::new(bbox, PyramidConfig::new(1, 3))?;
//! for record in pyramid {
//!     println!(
//!         "z{} ({}, {}) nw=({:.4}, {:.4})",
//!         record.zoom, record.x, record.y,
//!         record.corners.top_left.lat, record.corners.top_left.lon,
//!     );
//! }
//! # Ok::<(), dtmtile_pyramid::PyramidError>(())
//! ```

mod error;
mod geo;
mod pyramid;
mod tile;

pub use error::PyramidError;
pub use geo::{BoundingBox, GeoPoint};
pub use pyramid::{tiles_at_zoom, PyramidConfig, TilePyramid, TileRecord, DEFAULT_MAX_TILES};
pub use tile::{tiles_per_axis, TileCorners, TileIndex, MAX_ZOOM, MERCATOR_MAX_LAT, MIN_ZOOM};

/// Result type for pyramid operations.
pub type Result<T> = std::result::Result<T, PyramidError>;
