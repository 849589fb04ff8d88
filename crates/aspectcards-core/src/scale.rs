//! Export scale policy.
//!
//! Output is capped at a maximum pixel dimension and never upscaled.

/// Default cap on the longest side of an exported image.
pub const DEFAULT_TARGET_MAX_DIMENSION: u32 = 3000;

/// Uniform downscale factor: `min(target / width, target / height, 1)`.
///
/// Both dimensions must be non-zero.
pub fn export_scale(width: u32, height: u32, target: u32) -> f64 {
    debug_assert!(width > 0 && height > 0, "cannot scale an empty subject");
    let target = target as f64;
    (target / width as f64)
        .min(target / height as f64)
        .min(1.0)
}

/// Pixel size of the rasterized output.
///
/// Rounded to whole pixels and clamped to `1..=target` on each side.
pub fn scaled_size(width: u32, height: u32, target: u32) -> (u32, u32) {
    let scale = export_scale(width, height, target);
    let fit = |side: u32| ((side as f64 * scale).round() as u32).clamp(1, target.max(1));
    (fit(width), fit(height))
}
