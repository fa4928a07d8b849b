//! Thumbnail generation.
//!
//! Combines the pure dimension planner with the codec: decode the source,
//! compute the bounded size, then either copy the file untouched (when no
//! scaling is needed) or crop-and-resample into a JPEG.

use crate::calculations::scaled_dimensions;
use crate::decode::decode;
use crate::error::ImagingError;
use crate::format::ImageKind;
use crate::naming::sibling_with_suffix;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

/// Create a thumbnail of `source` bounded by `max_width` × `max_height`
/// (0 disables a bound), returning the output path.
///
/// The output lands in `output_dir` (created if absent) or next to the
/// source, named `<stem>-thumb.<ext>`. When the bounds don't require any
/// scaling the source is copied byte-for-byte, preserving its original
/// format and quality. Otherwise the source is resampled from offset
/// `(crop_x, crop_y)` with Lanczos3 and encoded as JPEG regardless of
/// source format — the original extension is kept either way.
pub fn create_thumbnail(
    source: &Path,
    max_width: u32,
    max_height: u32,
    output_dir: Option<&Path>,
    crop_x: u32,
    crop_y: u32,
) -> Result<PathBuf, ImagingError> {
    if !source.is_file() {
        return Err(ImagingError::SourceNotFound(source.to_path_buf()));
    }

    let dir = match output_dir {
        Some(dir) => {
            if !dir.is_dir() {
                std::fs::create_dir_all(dir).map_err(|source| {
                    ImagingError::DirectoryCreateFailed {
                        path: dir.to_path_buf(),
                        source,
                    }
                })?;
            }
            dir.to_path_buf()
        }
        None => source.parent().unwrap_or(Path::new(".")).to_path_buf(),
    };

    let img = decode(source)?;
    let output = sibling_with_suffix(source, &dir, "thumb");

    let (new_w, new_h) = scaled_dimensions(img.width, img.height, max_width, max_height);
    let target_w = new_w.round() as u32;
    let target_h = new_h.round() as u32;

    if target_w == img.width && target_h == img.height {
        // No scaling needed: byte-for-byte copy, no re-encode.
        std::fs::copy(source, &output)?;
    } else {
        // Sample the full source extent starting at the crop offset; the
        // crop clips at the image edges.
        let region = img.pixels.crop_imm(crop_x, crop_y, img.width, img.height);
        let resized = region.resize_exact(target_w, target_h, FilterType::Lanczos3);
        ImageKind::Jpeg.encode(&resized, &output)?;
    }

    if !output.is_file() {
        return Err(ImagingError::WriteFailed(output));
    }
    Ok(output)
}
