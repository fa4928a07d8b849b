//! Closed set of supported raster formats.
//!
//! [`ImageKind`] replaces extension-based guessing with header sniffing:
//! a file is GIF, JPEG, or PNG because its magic bytes say so, and anything
//! else is rejected up front. The table of formats is static and read-only
//! for the life of the process.
//!
//! Each variant carries its own encode path — JPEG drops alpha before
//! encoding since the format has no alpha channel.

use crate::error::ImagingError;
use image::codecs::gif::GifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageFormat};
use std::io::BufWriter;
use std::path::Path;

/// A raster format this crate can decode and encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Gif,
    Jpeg,
    Png,
}

impl ImageKind {
    /// Detect the format from file header bytes.
    ///
    /// Returns `None` for anything outside the supported set, including
    /// buffers too short to hold a recognizable header.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes).ok()? {
            ImageFormat::Gif => Some(Self::Gif),
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Png => Some(Self::Png),
            _ => None,
        }
    }

    /// The `image` crate format for explicit-format decoding.
    pub fn format(self) -> ImageFormat {
        match self {
            Self::Gif => ImageFormat::Gif,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
        }
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Gif => "gif",
            Self::Jpeg => "jpg",
            Self::Png => "png",
        }
    }

    /// Encode `img` to `path` in this format.
    pub fn encode(self, img: &DynamicImage, path: &Path) -> Result<(), ImagingError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);

        let encoded = match self {
            Self::Jpeg => {
                // JPEG has no alpha channel
                let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
                rgb.write_with_encoder(JpegEncoder::new(writer))
            }
            Self::Png => img.write_with_encoder(PngEncoder::new(writer)),
            Self::Gif => {
                let rgba = img.to_rgba8();
                let (w, h) = (rgba.width(), rgba.height());
                GifEncoder::new(writer).encode(rgba.as_raw(), w, h, ExtendedColorType::Rgba8)
            }
        };

        encoded.map_err(|source| ImagingError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}
