//! Centralized output filename convention.
//!
//! Derived images sit next to their source (or in a caller-chosen
//! directory) under a suffixed name that keeps the original extension:
//!
//! - `hancock.jpg` + `thumb` → `hancock-thumb.jpg`
//! - `banner.png` + `water` → `banner-water.png`
//!
//! The extension is kept even when the encoded content differs (thumbnails
//! are always JPEG regardless of source format).

use std::path::{Path, PathBuf};

/// Build `<stem>-<suffix>.<ext>` from `source`, placed inside `dir`.
///
/// A source without an extension yields `<stem>-<suffix>` with no dot.
pub fn sibling_with_suffix(source: &Path, dir: &Path, suffix: &str) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match source.extension() {
        Some(ext) => format!("{}-{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{stem}-{suffix}"),
    };

    dir.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_name_keeps_extension() {
        let out = sibling_with_suffix(Path::new("/photos/hancock.jpg"), Path::new("/photos"), "thumb");
        assert_eq!(out, PathBuf::from("/photos/hancock-thumb.jpg"));
    }

    #[test]
    fn water_name_in_other_directory() {
        let out = sibling_with_suffix(Path::new("/photos/banner.png"), Path::new("/tmp/out"), "water");
        assert_eq!(out, PathBuf::from("/tmp/out/banner-water.png"));
    }

    #[test]
    fn dotted_stem_splits_on_last_dot() {
        let out = sibling_with_suffix(Path::new("a.b.jpeg"), Path::new("."), "thumb");
        assert_eq!(out, PathBuf::from("./a.b-thumb.jpeg"));
    }

    #[test]
    fn no_extension_gets_no_dot() {
        let out = sibling_with_suffix(Path::new("/photos/raw"), Path::new("/photos"), "thumb");
        assert_eq!(out, PathBuf::from("/photos/raw-thumb"));
    }
}
