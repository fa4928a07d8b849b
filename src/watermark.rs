//! Watermark compositing.
//!
//! A watermark is anchored to one of nine grid cells over the base image:
//!
//! ```text
//! 1  2  3
//! 4  5  6
//! 7  8  9
//! ```
//!
//! Edge cells keep a 5px margin; middle rows/columns center exactly. The
//! overlay is written by plain pixel replacement (no alpha blending),
//! clipped at the base canvas, and the composite is encoded in the base
//! image's own format.

use crate::decode::decode;
use crate::error::ImagingError;
use crate::naming::sibling_with_suffix;
use std::path::{Path, PathBuf};

/// Margin in pixels between a watermark and any edge its cell touches.
const EDGE_MARGIN: i64 = 5;

/// One of the nine anchor cells for watermark placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorPosition {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    #[default]
    Center,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl AnchorPosition {
    /// Map a grid cell number (1..=9, reading order) to its position.
    pub fn from_cell(cell: u8) -> Option<Self> {
        match cell {
            1 => Some(Self::TopLeft),
            2 => Some(Self::TopCenter),
            3 => Some(Self::TopRight),
            4 => Some(Self::MiddleLeft),
            5 => Some(Self::Center),
            6 => Some(Self::MiddleRight),
            7 => Some(Self::BottomLeft),
            8 => Some(Self::BottomCenter),
            9 => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// Pixel offset of an overlay of size `(w, h)` over a base of size
    /// `(base_w, base_h)`.
    ///
    /// Offsets are signed: an overlay larger than the base centers to a
    /// negative coordinate and gets clipped at composite time.
    ///
    /// `MiddleRight` intentionally omits the trailing edge margin that
    /// `TopRight` and `BottomRight` apply, matching observed behavior of
    /// the original offset table.
    pub fn offset(self, base: (u32, u32), overlay: (u32, u32)) -> (i64, i64) {
        let (bw, bh) = (base.0 as i64, base.1 as i64);
        let (ow, oh) = (overlay.0 as i64, overlay.1 as i64);

        match self {
            Self::TopLeft => (EDGE_MARGIN, EDGE_MARGIN),
            Self::TopCenter => ((bw - ow) / 2, EDGE_MARGIN),
            Self::TopRight => (bw - ow - EDGE_MARGIN, EDGE_MARGIN),
            Self::MiddleLeft => (EDGE_MARGIN, (bh - oh) / 2),
            Self::Center => ((bw - ow) / 2, (bh - oh) / 2),
            Self::MiddleRight => (bw - ow, (bh - oh) / 2),
            Self::BottomLeft => (EDGE_MARGIN, bh - oh - EDGE_MARGIN),
            Self::BottomCenter => ((bw - ow) / 2, bh - oh - EDGE_MARGIN),
            Self::BottomRight => (bw - ow - EDGE_MARGIN, bh - oh - EDGE_MARGIN),
        }
    }
}

/// Composite `overlay_path` onto `base_path` at the given anchor and
/// return the output path.
///
/// The composite keeps the base's format and lands next to the base as
/// `<stem>-water.<ext>`.
pub fn apply_watermark(
    base_path: &Path,
    overlay_path: &Path,
    position: AnchorPosition,
) -> Result<PathBuf, ImagingError> {
    let base = decode(base_path)?;
    let overlay = decode(overlay_path)?;

    let (x, y) = position.offset((base.width, base.height), (overlay.width, overlay.height));

    let mut canvas = base.pixels;
    // Plain pixel replacement, clipped at the canvas edges.
    image::imageops::replace(&mut canvas, &overlay.pixels, x, y);

    let dir = base_path.parent().unwrap_or(Path::new(".")).to_path_buf();
    let output = sibling_with_suffix(base_path, &dir, "water");
    base.kind.encode(&canvas, &output)?;

    if !output.is_file() {
        return Err(ImagingError::WriteFailed(output));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_images::{read_dimensions, write_jpeg, write_solid_png};

    #[test]
    fn offset_table_matches_all_nine_cells() {
        // 1000x800 base, 200x100 overlay — the reference table.
        let base = (1000, 800);
        let overlay = (200, 100);
        let expected = [
            (1, (5, 5)),
            (2, (400, 5)),
            (3, (795, 5)),
            (4, (5, 350)),
            (5, (400, 350)),
            (6, (800, 350)), // no trailing margin on this cell
            (7, (5, 695)),
            (8, (400, 695)),
            (9, (795, 695)),
        ];
        for (cell, want) in expected {
            let pos = AnchorPosition::from_cell(cell).unwrap();
            assert_eq!(pos.offset(base, overlay), want, "cell {cell}");
        }
    }

    #[test]
    fn from_cell_rejects_out_of_range() {
        assert_eq!(AnchorPosition::from_cell(0), None);
        assert_eq!(AnchorPosition::from_cell(10), None);
    }

    #[test]
    fn default_position_is_center() {
        assert_eq!(AnchorPosition::default(), AnchorPosition::Center);
    }

    #[test]
    fn oversized_overlay_centers_negative() {
        let pos = AnchorPosition::Center;
        assert_eq!(pos.offset((100, 100), (300, 100)), (-100, 0));
    }

    #[test]
    fn watermark_replaces_pixels_at_offset() {
        let tmp = tempfile::TempDir::new().unwrap();
        let base = tmp.path().join("base.png");
        let mark = tmp.path().join("mark.png");
        write_solid_png(&base, 100, 80, [0, 0, 255]);
        write_solid_png(&mark, 10, 10, [255, 0, 0]);

        let out = apply_watermark(&base, &mark, AnchorPosition::TopLeft).unwrap();
        assert_eq!(out, tmp.path().join("base-water.png"));
        assert_eq!(read_dimensions(&out), (100, 80));

        let img = image::open(&out).unwrap().to_rgb8();
        // Inside the overlay: replaced, not blended.
        assert_eq!(img.get_pixel(5, 5).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(14, 14).0, [255, 0, 0]);
        // Outside the overlay: untouched base.
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 255]);
        assert_eq!(img.get_pixel(20, 20).0, [0, 0, 255]);
    }

    #[test]
    fn output_keeps_base_format() {
        let tmp = tempfile::TempDir::new().unwrap();
        let base = tmp.path().join("base.jpg");
        let mark = tmp.path().join("mark.png");
        write_jpeg(&base, 64, 64);
        write_solid_png(&mark, 8, 8, [255, 255, 255]);

        let out = apply_watermark(&base, &mark, AnchorPosition::BottomRight).unwrap();
        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
    }

    #[test]
    fn overlay_is_clipped_at_canvas_edge() {
        let tmp = tempfile::TempDir::new().unwrap();
        let base = tmp.path().join("base.png");
        let mark = tmp.path().join("mark.png");
        write_solid_png(&base, 20, 20, [0, 255, 0]);
        // Overlay wider than the base; MiddleRight puts x at W-w = -10.
        write_solid_png(&mark, 30, 10, [255, 0, 0]);

        let out = apply_watermark(&base, &mark, AnchorPosition::MiddleRight).unwrap();
        let img = image::open(&out).unwrap().to_rgb8();
        assert_eq!((img.width(), img.height()), (20, 20));
        // Row inside the overlay band is fully replaced.
        assert_eq!(img.get_pixel(0, 7).0, [255, 0, 0]);
        // Rows outside the band keep the base color.
        assert_eq!(img.get_pixel(0, 0).0, [0, 255, 0]);
    }

    #[test]
    fn decode_errors_propagate() {
        let tmp = tempfile::TempDir::new().unwrap();
        let base = tmp.path().join("base.png");
        write_solid_png(&base, 20, 20, [0, 0, 0]);

        let err =
            apply_watermark(&base, Path::new("/nonexistent/mark.png"), AnchorPosition::Center)
                .unwrap_err();
        assert!(matches!(err, ImagingError::SourceNotFound(_)));
    }
}
