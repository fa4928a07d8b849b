//! Shared helpers for synthesizing small test images.
//!
//! Every fixture is generated in-process with the `image` crate encoders,
//! so tests never depend on binary files checked into the repo.

use image::{ImageEncoder, RgbImage};
use std::path::Path;

/// Write a valid JPEG with a deterministic gradient pattern.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write a valid PNG with a deterministic gradient pattern.
pub fn write_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Write a single-color PNG, handy for pixel-exact compositing checks.
pub fn write_solid_png(path: &Path, width: u32, height: u32, rgb: [u8; 3]) {
    let img = RgbImage::from_pixel(width, height, image::Rgb(rgb));
    img.save_with_format(path, image::ImageFormat::Png).unwrap();
}

/// Dimensions of an image file on disk.
pub fn read_dimensions(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).unwrap()
}
