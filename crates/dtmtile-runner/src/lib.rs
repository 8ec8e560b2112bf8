//! # dtmtile-runner
//!
//! CLI runner tying the pipeline together: load an ASC elevation raster,
//! generate its per-cell coordinate fields, then stream the slippy-map tile
//! pyramid covering the raster's bounding box to stdout.

pub mod output;

use clap::Parser;
use dtmtile_grid::{check_extension, AscGrid, CoordinateField, GridError};
use dtmtile_pyramid::{
    tiles_at_zoom, BoundingBox, PyramidConfig, PyramidError, TilePyramid, DEFAULT_MAX_TILES,
    MIN_ZOOM,
};
use output::{Format, RecordWriter};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while running the pipeline.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// Raster loading or coordinate field generation failed.
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    /// Bounding box validation or pyramid enumeration failed.
    #[error("Pyramid error: {0}")]
    Pyramid(#[from] PyramidError),

    /// Writing records to the output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Enumerate the slippy-map tiles covering an elevation raster's extent.
#[derive(Debug, Parser)]
#[command(name = "dtmtile", version, about)]
pub struct Args {
    /// Input ASC raster path.
    #[arg(long, default_value = "Whole_HK_DTM_5m_data.asc")]
    pub input_file: PathBuf,

    /// Header lines to skip in the input file.
    #[arg(long, default_value_t = 0)]
    pub skip_rows: usize,

    /// Southern edge of the raster's extent (degrees).
    #[arg(long, allow_negative_numbers = true)]
    pub min_lat: f64,

    /// Northern edge of the raster's extent (degrees).
    #[arg(long, allow_negative_numbers = true)]
    pub max_lat: f64,

    /// Western edge of the raster's extent (degrees).
    #[arg(long, allow_negative_numbers = true)]
    pub min_lon: f64,

    /// Eastern edge of the raster's extent (degrees).
    #[arg(long, allow_negative_numbers = true)]
    pub max_lon: f64,

    /// Coarsest zoom level to enumerate.
    #[arg(long, default_value_t = MIN_ZOOM)]
    pub min_zoom: u8,

    /// Finest zoom level to enumerate.
    #[arg(long, default_value_t = 12)]
    pub max_zoom: u8,

    /// Cap on the total number of emitted records.
    #[arg(long, default_value_t = DEFAULT_MAX_TILES)]
    pub max_tiles: u64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Materialize each zoom level in parallel instead of streaming.
    #[arg(long)]
    pub parallel: bool,
}

/// Run the pipeline, writing tile records to `out`.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), RunnerError> {
    check_extension(&args.input_file)?;

    info!(path = %args.input_file.display(), "loading asc file");
    let start = Instant::now();
    let grid = AscGrid::from_file(&args.input_file, args.skip_rows)?;
    let shape = grid.shape();
    info!(
        rows = shape.rows,
        cols = shape.cols,
        elapsed = ?start.elapsed(),
        "asc file loaded"
    );

    let bbox = BoundingBox::new(args.min_lat, args.max_lat, args.min_lon, args.max_lon)?;
    let lat_field = CoordinateField::latitude(shape, bbox.min_lat, bbox.max_lat)?;
    let lon_field = CoordinateField::longitude(shape, bbox.min_lon, bbox.max_lon)?;
    debug!(
        rows = lat_field.rows(),
        cols = lon_field.cols(),
        "coordinate fields generated"
    );

    let config = PyramidConfig {
        min_zoom: args.min_zoom,
        max_zoom: args.max_zoom,
        max_tiles: args.max_tiles,
    };
    // Validation and the tile budget check happen here, before any output
    let pyramid = TilePyramid::new(bbox, config)?;
    info!(total = pyramid.total_tiles(), "enumerating tile pyramid");

    let mut writer = RecordWriter::new(out, args.format);
    let mut emitted = 0u64;
    if args.parallel {
        for zoom in config.min_zoom..=config.max_zoom {
            for record in tiles_at_zoom(&bbox, zoom)? {
                writer.write(&record)?;
                emitted += 1;
            }
        }
    } else {
        for record in pyramid {
            writer.write(&record)?;
            emitted += 1;
        }
    }
    writer.flush()?;
    info!(tiles = emitted, "pyramid enumeration complete");
    Ok(())
}
