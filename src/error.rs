//! Error taxonomy for image operations.
//!
//! Every fallible operation returns a typed [`ImagingError`] directly to the
//! caller. Nothing is retried internally and nothing is logged here — logging
//! is a caller concern. EXIF extraction is the one exception to this enum:
//! "no metadata" is an expected outcome, not a fault, so
//! [`read_exif`](crate::exif::read_exif) models it as `None` instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    /// The source path does not exist or is not a regular file.
    #[error("source not found: {0}")]
    SourceNotFound(PathBuf),

    /// Header inspection found a format outside the supported set
    /// (GIF, JPEG, PNG), or no recognizable image header at all.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(PathBuf),

    /// The codec failed to decode the pixel data.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The codec failed to encode the output image.
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The requested output directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output file did not exist after the write completed.
    #[error("output file missing after write: {0}")]
    WriteFailed(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
