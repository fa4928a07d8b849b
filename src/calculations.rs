//! Pure calculation functions for thumbnail dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Scale source dimensions to fit within optional bounds, preserving
/// aspect ratio.
///
/// A bound of `0` means "no constraint" on that axis. If the source
/// already fits within every active bound, it is returned unchanged —
/// no upscaling ever occurs. When both bounds are violated, the smaller
/// of the two ratios governs so the result fits inside both.
///
/// The result is deliberately not rounded: a single shared scale factor
/// multiplies both axes, and the caller rounds to whole pixels at
/// resample time.
///
/// # Examples
/// ```
/// # use darkroom::calculations::scaled_dimensions;
/// // 1200x1600 bounded by 600x800 → exactly half on both axes
/// assert_eq!(scaled_dimensions(1200, 1600, 600, 800), (600.0, 800.0));
///
/// // Already fits → unchanged
/// assert_eq!(scaled_dimensions(500, 400, 800, 800), (500.0, 400.0));
/// ```
pub fn scaled_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (f64, f64) {
    let width_active = max_width > 0 && width > max_width;
    let height_active = max_height > 0 && height > max_height;

    if !width_active && !height_active {
        return (width as f64, height as f64);
    }

    let width_ratio = max_width as f64 / width as f64;
    let height_ratio = max_height as f64 / height as f64;

    let ratio = if width_active && height_active {
        width_ratio.min(height_ratio)
    } else if width_active {
        width_ratio
    } else {
        height_ratio
    };

    (width as f64 * ratio, height as f64 * ratio)
}
