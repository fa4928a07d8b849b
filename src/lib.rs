//! # Darkroom
//!
//! Image helper routines for photo-centric applications: header-sniffed
//! decoding, aspect-preserving thumbnails, anchored watermarks, and
//! normalized EXIF extraction.
//!
//! Every operation is synchronous, stateless, and self-contained: it owns
//! its decoded buffers for the duration of one call and releases them on
//! return. There is no cache, no shared state, and no locking — callers
//! running these operations concurrently just need distinct output paths.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`format`] | Closed set of supported formats (GIF/JPEG/PNG): sniffing + per-variant encoding |
//! | [`decode`] | Raster loading with dimensions taken from header inspection |
//! | [`calculations`] | Pure dimension math for bounded, aspect-preserving scaling |
//! | [`naming`] | `<stem>-thumb.<ext>` / `<stem>-water.<ext>` output convention |
//! | [`thumbnail`] | Thumbnail generation: plan, then copy-or-resample |
//! | [`watermark`] | 9-cell anchored watermark compositing by pixel replacement |
//! | [`exif`] | Validated, derived EXIF brief plus raw section map |
//! | [`error`] | [`ImagingError`] taxonomy shared by the fallible operations |
//!
//! # Design Decisions
//!
//! ## Formats Are a Closed Enum
//!
//! Format detection reads file headers, never extensions, and admits
//! exactly GIF, JPEG, and PNG. Each variant carries its own decode format
//! and encode path, so an unsupported format is rejected at the boundary
//! instead of failing somewhere inside the codec.
//!
//! ## Copy, Don't Re-encode
//!
//! A thumbnail whose bounds don't force any scaling is a byte-for-byte
//! copy of the source. Re-encoding would cost quality for nothing; the
//! copy preserves the original format and bytes exactly.
//!
//! ## "No Metadata" Is Not an Error
//!
//! Many photos simply lack EXIF. [`exif::read_exif`] returns an `Option`
//! so that absent metadata — whatever the cause — reads as an ordinary
//! outcome, while decode and write failures elsewhere stay typed errors.
//!
//! ## Pure-Rust Imaging
//!
//! All pixel work goes through the `image` crate and all metadata through
//! `kamadak-exif` — no system libraries, nothing to install next to the
//! binary.

pub mod calculations;
pub mod decode;
pub mod error;
pub mod exif;
pub mod format;
pub mod naming;
pub mod thumbnail;
pub mod watermark;

#[cfg(test)]
pub(crate) mod test_images;

pub use decode::{RasterImage, decode};
pub use error::ImagingError;
pub use exif::{ExifBrief, RawExif, read_exif};
pub use format::ImageKind;
pub use thumbnail::create_thumbnail;
pub use watermark::{AnchorPosition, apply_watermark};
