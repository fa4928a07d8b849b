//! Raster image loading with header-based format detection.
//!
//! [`decode`] sniffs the file header, probes dimensions from the header
//! alone, then decodes the pixel buffer with the detected format forced —
//! the extension is never consulted. Dimensions are therefore reliable even
//! if a later full decode were to disagree with them.

use crate::error::ImagingError;
use crate::format::ImageKind;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// A decoded image: pixel buffer, header-reported dimensions, and format.
///
/// Owned exclusively by the caller and dropped when the operation that
/// needed it completes; nothing is cached across calls.
#[derive(Debug)]
pub struct RasterImage {
    pub pixels: DynamicImage,
    pub width: u32,
    pub height: u32,
    pub kind: ImageKind,
}

/// Decode the image at `path`.
///
/// Fails with [`ImagingError::SourceNotFound`] if `path` is not a regular
/// file, [`ImagingError::UnsupportedFormat`] if the header is not one of
/// GIF/JPEG/PNG, and [`ImagingError::Decode`] if pixel decoding fails.
pub fn decode(path: &Path) -> Result<RasterImage, ImagingError> {
    if !path.is_file() {
        return Err(ImagingError::SourceNotFound(path.to_path_buf()));
    }

    // An existing but unreadable source counts as not found, same as a
    // missing one.
    let bytes = std::fs::read(path)
        .map_err(|_| ImagingError::SourceNotFound(path.to_path_buf()))?;
    let kind = ImageKind::sniff(&bytes)
        .ok_or_else(|| ImagingError::UnsupportedFormat(path.to_path_buf()))?;

    // Dimensions come from the header, independent of the pixel decode.
    let (width, height) = ImageReader::with_format(Cursor::new(&bytes), kind.format())
        .into_dimensions()
        .map_err(|source| ImagingError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    let pixels = ImageReader::with_format(Cursor::new(&bytes), kind.format())
        .decode()
        .map_err(|source| ImagingError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(RasterImage {
        pixels,
        width,
        height,
        kind,
    })
}
