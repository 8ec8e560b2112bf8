//! Error types for the pyramid crate.

use thiserror::Error;

/// Errors that can occur when validating input or enumerating a pyramid.
#[derive(Debug, Error)]
pub enum PyramidError {
    /// A bounding box bound is inverted or zero-extent.
    #[error("Invalid bounding box: min_{axis} {min} must be less than max_{axis} {max}")]
    InvalidBoundingBox {
        /// Which axis is violated ("lat" or "lon").
        axis: &'static str,
        /// Lower bound of the rejected pair.
        min: f64,
        /// Upper bound of the rejected pair.
        max: f64,
    },

    /// A bounding box bound is NaN or infinite.
    #[error("Bounding box {name} is not finite: {value}")]
    NonFiniteBound {
        /// Field name of the offending bound.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// A latitude lies outside the meaningful Web Mercator domain.
    #[error(
        "Latitude {0} is out of range (must lie within the Web Mercator limit, \
         -85.0511 to 85.0511 degrees)"
    )]
    LatitudeOutOfRange(f64),

    /// A longitude lies outside the valid range.
    #[error("Longitude {0} is out of range (must lie within -180 to 180 degrees)")]
    LongitudeOutOfRange(f64),

    /// Zoom bounds are inverted or outside the supported range.
    #[error("Invalid zoom range {min}..={max} (zoom levels must lie within 1..=20 with min <= max)")]
    InvalidZoomRange {
        /// Requested coarsest zoom.
        min: u8,
        /// Requested finest zoom.
        max: u8,
    },

    /// The bounding box would enumerate more tiles than the configured cap.
    #[error("Tile budget exceeded: zoom range spans {tiles} tiles, cap is {max_tiles}")]
    TileBudgetExceeded {
        /// Total records the enumeration would produce.
        tiles: u64,
        /// The configured cap.
        max_tiles: u64,
    },
}
