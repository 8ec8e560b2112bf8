//! Slippy-map tile index math.
//!
//! Uses the OpenStreetMap Slippy Map tile naming convention:
//! - `zoom` divides the world into 2^zoom x 2^zoom tiles
//! - `x` is the column (0 at 180 degrees W, increasing eastward)
//! - `y` is the row (0 at the north edge, increasing southward)
//!
//! Forward mapping (coordinate to tile):
//! - `x = floor((lon + 180) / 360 * 2^zoom)`
//! - `y = floor((1 - asinh(tan(lat)) / pi) / 2 * 2^zoom)`
//!
//! Inverse mapping ([`TileIndex::top_left`]) gives a tile's north-west
//! corner; evaluating it at the east and south neighbours yields the other
//! three corners.

use crate::GeoPoint;
use serde::Serialize;
use std::f64::consts::PI;

/// Minimum supported zoom level.
pub const MIN_ZOOM: u8 = 1;

/// Maximum supported zoom level.
pub const MAX_ZOOM: u8 = 20;

/// Latitude of the Web Mercator north edge, `atan(sinh(pi))` in degrees.
///
/// The tile scheme only covers latitudes within this limit; `y` runs from 0
/// at this latitude to 2^zoom at its negation.
pub const MERCATOR_MAX_LAT: f64 = 85.05112877980659;

/// OSM-style tile index (x, y, zoom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileIndex {
    /// Column, 0 to 2^zoom - 1 from west to east.
    pub x: u32,
    /// Row, 0 to 2^zoom - 1 from north to south.
    pub y: u32,
    /// Zoom level.
    pub zoom: u8,
}

/// The four geographic corners of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileCorners {
    /// North-west corner.
    pub top_left: GeoPoint,
    /// North-east corner.
    pub top_right: GeoPoint,
    /// South-west corner.
    pub bottom_left: GeoPoint,
    /// South-east corner.
    pub bottom_right: GeoPoint,
}

impl TileIndex {
    /// Convert a geographic coordinate to the tile containing it.
    ///
    /// No clamping is applied: latitudes beyond [`MERCATOR_MAX_LAT`]
    /// (where `asinh(tan(lat))` passes pi) or longitudes outside -180..180
    /// produce indices outside the valid 0..2^zoom range, and a coordinate
    /// exactly on the east or south world edge maps to the virtual index
    /// 2^zoom. Callers validate geographic input once, at the enumeration
    /// boundary ([`crate::BoundingBox::validate`]), and clamp the
    /// exact-edge case when deriving index ranges, rather than here in the
    /// hot path. The `as u32` casts saturate, so an expression that floors
    /// below zero lands on index 0.
    pub fn from_geo(lat: f64, lon: f64, zoom: u8) -> Self {
        let n = f64::from(tiles_per_axis(zoom));
        let x = ((lon + 180.0) / 360.0 * n).floor() as u32;
        let lat_rad = lat.to_radians();
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n).floor() as u32;
        Self { x, y, zoom }
    }

    /// Geographic coordinate of this tile's north-west (top-left) corner.
    pub fn top_left(&self) -> GeoPoint {
        let n = f64::from(tiles_per_axis(self.zoom));
        let lon = f64::from(self.x) / n * 360.0 - 180.0;
        let lat = (PI * (1.0 - 2.0 * f64::from(self.y) / n)).sinh().atan().to_degrees();
        GeoPoint { lat, lon }
    }

    /// The four geographic corners of this tile.
    ///
    /// Since `y` grows southward and `x` eastward, the corners are the
    /// top-left points of this tile and of its east, south, and south-east
    /// neighbours.
    pub fn corners(&self) -> TileCorners {
        let at = |x: u32, y: u32| TileIndex { x, y, zoom: self.zoom }.top_left();
        TileCorners {
            top_left: at(self.x, self.y),
            top_right: at(self.x + 1, self.y),
            bottom_left: at(self.x, self.y + 1),
            bottom_right: at(self.x + 1, self.y + 1),
        }
    }
}

/// Number of tiles per axis at a zoom level.
///
/// `zoom` must be at most [`MAX_ZOOM`].
pub fn tiles_per_axis(zoom: u8) -> u32 {
    debug_assert!(zoom <= MAX_ZOOM, "zoom {zoom} exceeds MAX_ZOOM");
    1u32 << zoom
}
