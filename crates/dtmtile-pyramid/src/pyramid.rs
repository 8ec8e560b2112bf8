//! Tile pyramid enumeration over a bounding box.
//!
//! For each zoom level in a configured range, the builder locates the tiles
//! containing the box's lower-left and upper-right corners and emits a
//! [`TileRecord`] for every tile in the inclusive index range between them.
//! Levels coarse enough that both corners fall in the same tile are skipped
//! entirely; they cannot distinguish the box and are not useful output.
//!
//! Records are produced lazily so a deep zoom range over a large box never
//! materializes the full list; the total is additionally capped up front by
//! [`PyramidConfig::max_tiles`] (tile count grows as 4^zoom).

use crate::{
    tiles_per_axis, BoundingBox, PyramidError, Result, TileCorners, TileIndex, MAX_ZOOM, MIN_ZOOM,
};
use rayon::prelude::*;
use serde::Serialize;

/// Default cap on the total number of records a pyramid may produce.
pub const DEFAULT_MAX_TILES: u64 = 1_000_000;

/// Configuration for pyramid enumeration.
///
/// Passed explicitly into [`TilePyramid::new`]; the engine never reads
/// process-wide defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PyramidConfig {
    /// Coarsest zoom level to enumerate (inclusive).
    pub min_zoom: u8,
    /// Finest zoom level to enumerate (inclusive).
    pub max_zoom: u8,
    /// Hard cap on the total number of emitted records.
    pub max_tiles: u64,
}

impl PyramidConfig {
    /// Configuration for an explicit zoom range with the default tile cap.
    pub fn new(min_zoom: u8, max_zoom: u8) -> Self {
        Self {
            min_zoom,
            max_zoom,
            max_tiles: DEFAULT_MAX_TILES,
        }
    }

    /// Configuration from zoom 1 up to `max_zoom`, the reference behavior.
    pub fn up_to(max_zoom: u8) -> Self {
        Self::new(MIN_ZOOM, max_zoom)
    }

    fn validate(&self) -> Result<()> {
        if self.min_zoom < MIN_ZOOM || self.max_zoom > MAX_ZOOM || self.min_zoom > self.max_zoom {
            return Err(PyramidError::InvalidZoomRange {
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        Ok(())
    }
}

/// One enumerated tile with its geographic corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TileRecord {
    /// Zoom level of the tile.
    pub zoom: u8,
    /// Tile column.
    pub x: u32,
    /// Tile row.
    pub y: u32,
    /// The tile's four geographic corners.
    pub corners: TileCorners,
}

/// Inclusive tile index ranges covering a box at one zoom level.
#[derive(Debug, Clone, Copy)]
struct ZoomSpan {
    zoom: u8,
    x_min: u32,
    x_max: u32,
    y_min: u32,
    y_max: u32,
}

impl ZoomSpan {
    fn len(&self) -> u64 {
        u64::from(self.x_max - self.x_min + 1) * u64::from(self.y_max - self.y_min + 1)
    }

    fn record(&self, x: u32, y: u32) -> TileRecord {
        let tile = TileIndex { x, y, zoom: self.zoom };
        TileRecord {
            zoom: self.zoom,
            x,
            y,
            corners: tile.corners(),
        }
    }
}

/// Tile ranges covering `bbox` at `zoom`, or `None` when both corners fall
/// in the same tile (the level is skipped).
///
/// Corner indices are clamped to the last real tile before comparison: a
/// bound exactly on the east or south world edge (`lon = 180`, or latitude
/// at the Mercator limit) maps to the virtual index `2^zoom`, one past the
/// grid.
fn zoom_span(bbox: &BoundingBox, zoom: u8) -> Option<ZoomSpan> {
    let max_index = tiles_per_axis(zoom) - 1;
    let clamp = |tile: TileIndex| TileIndex {
        x: tile.x.min(max_index),
        y: tile.y.min(max_index),
        zoom,
    };
    let ll = clamp(TileIndex::from_geo(bbox.min_lat, bbox.min_lon, zoom));
    let ur = clamp(TileIndex::from_geo(bbox.max_lat, bbox.max_lon, zoom));
    if ll == ur {
        return None;
    }
    // y is swapped: north (max_lat) has the smaller tile row
    Some(ZoomSpan {
        zoom,
        x_min: ll.x,
        x_max: ur.x,
        y_min: ur.y,
        y_max: ll.y,
    })
}

/// Cursor over one zoom level's inclusive index range, x-major.
#[derive(Debug)]
struct SpanCursor {
    span: ZoomSpan,
    x: u32,
    y: u32,
}

impl SpanCursor {
    fn new(span: ZoomSpan) -> Self {
        Self {
            x: span.x_min,
            y: span.y_min,
            span,
        }
    }

    fn advance(&mut self) -> Option<TileRecord> {
        if self.x > self.span.x_max {
            return None;
        }
        let record = self.span.record(self.x, self.y);
        if self.y < self.span.y_max {
            self.y += 1;
        } else {
            self.y = self.span.y_min;
            self.x += 1;
        }
        Some(record)
    }
}

/// Lazy iterator over every tile record covering a bounding box across a
/// zoom range, coarsest level first.
#[derive(Debug)]
pub struct TilePyramid {
    bbox: BoundingBox,
    config: PyramidConfig,
    next_zoom: u8,
    current: Option<SpanCursor>,
    total: u64,
}

impl TilePyramid {
    /// Validate the inputs and prepare an enumeration.
    ///
    /// Fails fast, before any tile is produced: the bounding box must be
    /// non-degenerate and geographically valid, the zoom range ordered and
    /// in-range, and the total record count within `config.max_tiles`.
    pub fn new(bbox: BoundingBox, config: PyramidConfig) -> Result<Self> {
        bbox.validate()?;
        config.validate()?;

        let mut total = 0u64;
        for zoom in config.min_zoom..=config.max_zoom {
            if let Some(span) = zoom_span(&bbox, zoom) {
                total += span.len();
            }
        }
        if total > config.max_tiles {
            return Err(PyramidError::TileBudgetExceeded {
                tiles: total,
                max_tiles: config.max_tiles,
            });
        }

        Ok(Self {
            bbox,
            config,
            next_zoom: config.min_zoom,
            current: None,
            total,
        })
    }

    /// Total number of records this pyramid will produce.
    pub fn total_tiles(&self) -> u64 {
        self.total
    }

    /// The bounding box being enumerated.
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }
}

impl Iterator for TilePyramid {
    type Item = TileRecord;

    fn next(&mut self) -> Option<TileRecord> {
        loop {
            if let Some(cursor) = &mut self.current {
                if let Some(record) = cursor.advance() {
                    return Some(record);
                }
                self.current = None;
            }
            if self.next_zoom > self.config.max_zoom {
                return None;
            }
            let zoom = self.next_zoom;
            self.next_zoom += 1;
            if let Some(span) = zoom_span(&self.bbox, zoom) {
                self.current = Some(SpanCursor::new(span));
            }
        }
    }
}

/// Materialize every record at a single zoom level, computing corner
/// geometry in parallel across the tile columns.
///
/// Returns an empty vector when the level is skipped (box within one tile).
pub fn tiles_at_zoom(bbox: &BoundingBox, zoom: u8) -> Result<Vec<TileRecord>> {
    bbox.validate()?;
    if !(MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
        return Err(PyramidError::InvalidZoomRange {
            min: zoom,
            max: zoom,
        });
    }
    let Some(span) = zoom_span(bbox, zoom) else {
        return Ok(Vec::new());
    };
    let records = (span.x_min..=span.x_max)
        .into_par_iter()
        .flat_map_iter(|x| (span.y_min..=span.y_max).map(move |y| span.record(x, y)))
        .collect();
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MERCATOR_MAX_LAT;

    fn unit_box() -> BoundingBox {
        BoundingBox::new(0.0, 10.0, 0.0, 10.0).unwrap()
    }

    #[test]
    fn test_reference_scenario_zoom_2() {
        // Corner tiles at zoom 2 are (2,2) and (2,1): exactly two records
        let pyramid = TilePyramid::new(unit_box(), PyramidConfig::new(2, 2)).unwrap();
        let records: Vec<_> = pyramid.collect();
        assert_eq!(records.len(), 2);
        assert_eq!((records[0].x, records[0].y, records[0].zoom), (2, 1, 2));
        assert_eq!((records[1].x, records[1].y, records[1].zoom), (2, 2, 2));
    }

    #[test]
    fn test_ascending_zoom_order() {
        let pyramid = TilePyramid::new(unit_box(), PyramidConfig::up_to(4)).unwrap();
        let zooms: Vec<u8> = pyramid.map(|r| r.zoom).collect();
        let mut sorted = zooms.clone();
        sorted.sort_unstable();
        assert_eq!(zooms, sorted, "records must come coarsest level first");
        assert_eq!(zooms.first(), Some(&1));
    }

    #[test]
    fn test_skip_rule_single_tile_level() {
        // A 1-degree box near (20, 20) fits inside one tile at zoom 1
        let bbox = BoundingBox::new(20.0, 21.0, 20.0, 21.0).unwrap();
        let records: Vec<_> = TilePyramid::new(bbox, PyramidConfig::new(1, 1))
            .unwrap()
            .collect();
        assert!(records.is_empty(), "single-tile level must emit nothing");
        assert_eq!(tiles_at_zoom(&bbox, 1).unwrap().len(), 0);
    }

    #[test]
    fn test_total_matches_iteration() {
        let pyramid = TilePyramid::new(unit_box(), PyramidConfig::up_to(6)).unwrap();
        let total = pyramid.total_tiles();
        assert_eq!(pyramid.count() as u64, total);
    }

    #[test]
    fn test_monotonic_refinement() {
        let bbox = BoundingBox::new(22.15, 22.56, 113.83, 114.44).unwrap();
        let mut previous = 0usize;
        for zoom in MIN_ZOOM..=14 {
            let count = tiles_at_zoom(&bbox, zoom).unwrap().len();
            assert!(
                count >= previous,
                "tile count shrank from {previous} to {count} at zoom {zoom}"
            );
            previous = count;
        }
    }

    #[test]
    fn test_corner_ordering() {
        for record in TilePyramid::new(unit_box(), PyramidConfig::up_to(5)).unwrap() {
            let c = record.corners;
            assert!(c.top_left.lat >= c.bottom_left.lat);
            assert!(c.top_left.lon <= c.top_right.lon);
        }
    }

    #[test]
    fn test_records_overlap_bbox() {
        let bbox = BoundingBox::new(22.15, 22.56, 113.83, 114.44).unwrap();
        for record in TilePyramid::new(bbox, PyramidConfig::new(8, 10)).unwrap() {
            let c = record.corners;
            assert!(c.top_left.lat > bbox.min_lat, "tile entirely south of box");
            assert!(c.bottom_left.lat < bbox.max_lat, "tile entirely north of box");
            assert!(c.top_right.lon > bbox.min_lon, "tile entirely west of box");
            assert!(c.top_left.lon < bbox.max_lon, "tile entirely east of box");
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let bbox = BoundingBox::new(22.15, 22.56, 113.83, 114.44).unwrap();
        let sequential: Vec<_> = TilePyramid::new(bbox, PyramidConfig::new(11, 11))
            .unwrap()
            .collect();
        let parallel = tiles_at_zoom(&bbox, 11).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_antimeridian_box_stays_on_grid() {
        // max_lon = 180 maps to the virtual column 2^zoom; the span must
        // clamp to the last real column instead of emitting it
        let bbox = BoundingBox::new(0.0, 10.0, 170.0, 180.0).unwrap();
        let records: Vec<_> = TilePyramid::new(bbox, PyramidConfig::new(2, 2))
            .unwrap()
            .collect();
        assert_eq!(records.len(), 2);
        for record in &records {
            assert_eq!(record.x, 3, "emitted column past the antimeridian");
            assert!(record.corners.top_right.lon <= 180.0);
        }
        assert_eq!((records[0].y, records[1].y), (1, 2));
    }

    #[test]
    fn test_edge_box_in_last_column_is_skipped() {
        // A box flush against the antimeridian but inside one tile must
        // still trigger the skip rule after clamping
        let bbox = BoundingBox::new(20.0, 21.0, 179.0, 180.0).unwrap();
        let records: Vec<_> = TilePyramid::new(bbox, PyramidConfig::new(1, 1))
            .unwrap()
            .collect();
        assert!(records.is_empty());
    }

    #[test]
    fn test_full_mercator_world() {
        // Bounds at the exact domain limits cover every tile, none beyond
        let bbox =
            BoundingBox::new(-MERCATOR_MAX_LAT, MERCATOR_MAX_LAT, -180.0, 180.0).unwrap();
        let records: Vec<_> = TilePyramid::new(bbox, PyramidConfig::new(1, 1))
            .unwrap()
            .collect();
        assert_eq!(records.len(), 4);
        for record in &records {
            assert!(record.x <= 1 && record.y <= 1);
        }
    }

    #[test]
    fn test_tile_budget_enforced() {
        let config = PyramidConfig {
            min_zoom: 1,
            max_zoom: 12,
            max_tiles: 10,
        };
        let err = TilePyramid::new(unit_box(), config).unwrap_err();
        assert!(matches!(
            err,
            PyramidError::TileBudgetExceeded { max_tiles: 10, .. }
        ));
    }

    #[test]
    fn test_invalid_zoom_range_rejected() {
        let err = TilePyramid::new(unit_box(), PyramidConfig::new(0, 4)).unwrap_err();
        assert!(matches!(err, PyramidError::InvalidZoomRange { min: 0, max: 4 }));
        let err = TilePyramid::new(unit_box(), PyramidConfig::new(5, 3)).unwrap_err();
        assert!(matches!(err, PyramidError::InvalidZoomRange { min: 5, max: 3 }));
    }

    #[test]
    fn test_degenerate_box_rejected_before_enumeration() {
        let bbox = BoundingBox {
            min_lat: 10.0,
            max_lat: 10.0,
            min_lon: 0.0,
            max_lon: 10.0,
        };
        let err = TilePyramid::new(bbox, PyramidConfig::up_to(4)).unwrap_err();
        assert!(matches!(err, PyramidError::InvalidBoundingBox { .. }));
    }
}
