//! Normalized EXIF extraction for photographs.
//!
//! [`read_exif`] reads structured metadata from a JPEG or TIFF photo and
//! reduces it to a validated [`ExifBrief`] plus the full raw section map.
//! Absence of metadata is an expected outcome, not a fault: a missing or
//! unreadable file, a non-photo format, or a photo without the required
//! tags all yield `None` rather than an error.
//!
//! A photo qualifies only when Model, ExposureTime, and FNumber are all
//! present. FNumber itself is consumed to derive the `ApertureFNumber`
//! display value and is not exposed in the brief.

use exif::{Context, Field, In, Reader, Tag, Value};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// The reduced, validated subset of photographic metadata.
///
/// Exactly the eight fields callers get; FNumber is folded into
/// `aperture_f_number` and never exposed raw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExifBrief {
    /// Raw exposure time as recorded, e.g. `"10/2500"`.
    pub exposure_time: String,
    pub make: Option<String>,
    pub model: String,
    /// Display aperture, e.g. `"f1.8"`. Derived from FNumber.
    pub aperture_f_number: String,
    #[serde(rename = "ISOSpeedRatings")]
    pub iso_speed_ratings: Option<u32>,
    pub date_time_original: Option<String>,
    /// Focal length in millimetres, rounded to 2 decimal places.
    pub focal_length: Option<f64>,
    pub flash: Option<u16>,
}

/// Full structured metadata: section name → field name → display value.
///
/// Sections follow the conventional IFD names (IFD0, THUMBNAIL, EXIF, GPS,
/// INTEROP). The opaque MakerNote blob is stripped and never included.
pub type RawExif = BTreeMap<String, BTreeMap<String, String>>;

/// Read and normalize EXIF metadata from the photo at `path`.
///
/// Returns `None` when the file is missing or unreadable, is not a JPEG or
/// TIFF, carries no EXIF or primary-image metadata, or lacks any of the
/// required tags (Model, ExposureTime, FNumber).
pub fn read_exif(path: &Path) -> Option<(ExifBrief, RawExif)> {
    if !is_photo_container(path) {
        return None;
    }

    let file = File::open(path).ok()?;
    let exif = Reader::new()
        .read_from_container(&mut BufReader::new(file))
        .ok()?;

    // Both the Exif sub-IFD and the primary image IFD must exist.
    let has_exif_section = exif
        .fields()
        .any(|f| f.ifd_num == In::PRIMARY && f.tag.0 == Context::Exif);
    let has_primary_section = exif
        .fields()
        .any(|f| f.ifd_num == In::PRIMARY && f.tag.0 == Context::Tiff);
    if !has_exif_section || !has_primary_section {
        return None;
    }

    let get = |tag: Tag| exif.get_field(tag, In::PRIMARY);

    // Required to count as an actual photograph.
    let model = get(Tag::Model).and_then(|f| ascii_value(&f.value))?;
    let exposure_time = get(Tag::ExposureTime).map(|f| rational_string(&f.value))?;
    let f_number = get(Tag::FNumber).and_then(|f| fraction_value(&f.value))?;

    let brief = ExifBrief {
        exposure_time,
        make: get(Tag::Make).and_then(|f| ascii_value(&f.value)),
        model,
        aperture_f_number: format!("f{}", round2(f_number)),
        iso_speed_ratings: get(Tag::PhotographicSensitivity).and_then(|f| uint_value(&f.value)),
        date_time_original: get(Tag::DateTimeOriginal).and_then(|f| ascii_value(&f.value)),
        focal_length: get(Tag::FocalLength)
            .and_then(|f| fraction_value(&f.value))
            .map(round2),
        flash: get(Tag::Flash)
            .and_then(|f| uint_value(&f.value))
            .map(|v| v as u16),
    };

    Some((brief, raw_sections(exif.fields())))
}

/// Magic-byte gate: JPEG, TIFF little-endian, or TIFF big-endian.
fn is_photo_container(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };
    let mut header = [0u8; 4];
    if file.read_exact(&mut header).is_err() {
        return false;
    }
    matches!(
        header,
        [0xFF, 0xD8, 0xFF, _] | [0x49, 0x49, 0x2A, 0x00] | [0x4D, 0x4D, 0x00, 0x2A]
    )
}

/// Group every field by IFD section, dropping the MakerNote blob.
fn raw_sections<'a>(fields: impl Iterator<Item = &'a Field>) -> RawExif {
    let mut sections = RawExif::new();
    for field in fields {
        if field.tag == Tag::MakerNote {
            continue;
        }
        let section = match field.tag.0 {
            Context::Tiff if field.ifd_num == In::PRIMARY => "IFD0",
            Context::Tiff => "THUMBNAIL",
            Context::Exif => "EXIF",
            Context::Gps => "GPS",
            Context::Interop => "INTEROP",
            _ => continue,
        };
        sections
            .entry(section.to_string())
            .or_default()
            .insert(field.tag.to_string(), field.display_value().to_string());
    }
    sections
}

/// First ASCII component as a trimmed string.
fn ascii_value(value: &Value) -> Option<String> {
    if let Value::Ascii(parts) = value {
        parts.first().map(|bytes| {
            String::from_utf8_lossy(bytes)
                .trim_end_matches('\0')
                .trim()
                .to_string()
        })
    } else {
        None
    }
}

/// A rational value as its raw `num/denom` form, or the display value for
/// anything else.
fn rational_string(value: &Value) -> String {
    match value {
        Value::Rational(parts) if !parts.is_empty() => {
            format!("{}/{}", parts[0].num, parts[0].denom)
        }
        other => other.display_as(Tag::ExposureTime).to_string(),
    }
}

/// Numeric value of a possibly-fractional field.
///
/// Typed rationals divide directly (a zero denominator yields the bare
/// numerator); ASCII values fall back to the textual `a/b` rule.
fn fraction_value(value: &Value) -> Option<f64> {
    match value {
        Value::Rational(parts) => parts.first().map(|r| {
            if r.denom == 0 {
                r.num as f64
            } else {
                r.to_f64()
            }
        }),
        Value::SRational(parts) => parts.first().map(|r| {
            if r.denom == 0 {
                r.num as f64
            } else {
                r.to_f64()
            }
        }),
        Value::Ascii(_) => ascii_value(value).as_deref().and_then(parse_fraction),
        _ => None,
    }
}

/// First component of an unsigned integer field.
fn uint_value(value: &Value) -> Option<u32> {
    match value {
        Value::Short(parts) => parts.first().map(|&v| v as u32),
        Value::Long(parts) => parts.first().copied(),
        _ => None,
    }
}

/// Parse `"a/b"` or a plain decimal. A zero or missing denominator yields
/// the numerator alone.
fn parse_fraction(s: &str) -> Option<f64> {
    match s.split_once('/') {
        None => s.trim().parse().ok(),
        Some((num, denom)) => {
            let num: f64 = num.trim().parse().ok()?;
            let denom: f64 = denom.trim().parse().unwrap_or(0.0);
            Some(if denom == 0.0 { num } else { num / denom })
        }
    }
}

/// Round to 2 decimal places.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
