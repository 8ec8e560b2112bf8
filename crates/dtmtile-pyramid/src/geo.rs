//! Geographic primitives: points and bounding boxes.

use crate::{PyramidError, Result, MERCATOR_MAX_LAT};
use serde::Serialize;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    /// Latitude in degrees (positive north).
    pub lat: f64,
    /// Longitude in degrees (positive east).
    pub lon: f64,
}

/// Geographic bounds of the input raster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Minimum latitude (south edge).
    pub min_lat: f64,
    /// Maximum latitude (north edge).
    pub max_lat: f64,
    /// Minimum longitude (west edge).
    pub min_lon: f64,
    /// Maximum longitude (east edge).
    pub max_lon: f64,
}

impl BoundingBox {
    /// Create a validated bounding box.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self> {
        let bbox = Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        };
        bbox.validate()?;
        Ok(bbox)
    }

    /// Check finiteness, ordering, and geographic range.
    ///
    /// The error names the specific violated bound. Latitudes must lie
    /// within the Web Mercator limit ([`MERCATOR_MAX_LAT`], about 85.05
    /// degrees); beyond it the `y` mapping leaves the tile grid.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("min_lat", self.min_lat),
            ("max_lat", self.max_lat),
            ("min_lon", self.min_lon),
            ("max_lon", self.max_lon),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(PyramidError::NonFiniteBound { name, value });
            }
        }
        if self.min_lat >= self.max_lat {
            return Err(PyramidError::InvalidBoundingBox {
                axis: "lat",
                min: self.min_lat,
                max: self.max_lat,
            });
        }
        if self.min_lon >= self.max_lon {
            return Err(PyramidError::InvalidBoundingBox {
                axis: "lon",
                min: self.min_lon,
                max: self.max_lon,
            });
        }
        for lat in [self.min_lat, self.max_lat] {
            if lat.abs() > MERCATOR_MAX_LAT {
                return Err(PyramidError::LatitudeOutOfRange(lat));
            }
        }
        for lon in [self.min_lon, self.max_lon] {
            if lon.abs() > 180.0 {
                return Err(PyramidError::LongitudeOutOfRange(lon));
            }
        }
        Ok(())
    }

    /// Check if a coordinate is within the bounds.
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}
