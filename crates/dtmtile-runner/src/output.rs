//! Tile record output formatting.
//!
//! The engine yields records; this module is the presentation side, writing
//! them to any `io::Write` sink as aligned text or JSON lines.

use clap::ValueEnum;
use dtmtile_pyramid::TileRecord;
use std::io::Write;

/// Output format for tile records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable aligned columns.
    Text,
    /// One JSON object per line.
    Json,
}

/// Writes tile records to an output stream in the selected format.
#[derive(Debug)]
pub struct RecordWriter<'a, W: Write> {
    out: &'a mut W,
    format: Format,
}

impl<'a, W: Write> RecordWriter<'a, W> {
    /// Create a writer over an output sink.
    pub fn new(out: &'a mut W, format: Format) -> Self {
        Self { out, format }
    }

    /// Write one record.
    pub fn write(&mut self, record: &TileRecord) -> std::io::Result<()> {
        match self.format {
            Format::Text => {
                let c = &record.corners;
                writeln!(
                    self.out,
                    "z{:<2} x{:<7} y{:<7} nw({:.6}, {:.6}) ne({:.6}, {:.6}) sw({:.6}, {:.6}) se({:.6}, {:.6})",
                    record.zoom,
                    record.x,
                    record.y,
                    c.top_left.lat,
                    c.top_left.lon,
                    c.top_right.lat,
                    c.top_right.lon,
                    c.bottom_left.lat,
                    c.bottom_left.lon,
                    c.bottom_right.lat,
                    c.bottom_right.lon,
                )
            }
            Format::Json => {
                serde_json::to_writer(&mut *self.out, record).map_err(std::io::Error::from)?;
                writeln!(self.out)
            }
        }
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtmtile_pyramid::TileIndex;

    fn sample_record() -> TileRecord {
        let tile = TileIndex { x: 2, y: 1, zoom: 2 };
        TileRecord {
            zoom: 2,
            x: 2,
            y: 1,
            corners: tile.corners(),
        }
    }

    #[test]
    fn test_text_line_shape() {
        let mut buffer = Vec::new();
        let mut writer = RecordWriter::new(&mut buffer, Format::Text);
        writer.write(&sample_record()).unwrap();
        let line = String::from_utf8(buffer).unwrap();
        assert!(line.starts_with("z2 "));
        assert!(line.contains("x2"));
        assert!(line.contains("nw("));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_json_lines_parse_back() {
        let mut buffer = Vec::new();
        let mut writer = RecordWriter::new(&mut buffer, Format::Json);
        writer.write(&sample_record()).unwrap();
        writer.write(&sample_record()).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 2);
        for line in text.lines() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["zoom"], 2);
            assert_eq!(value["x"], 2);
            assert!(value["corners"]["top_left"]["lat"].is_f64());
        }
    }
}
