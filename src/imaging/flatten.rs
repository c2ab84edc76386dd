//! Pixel-mode normalization before resampling.
//!
//! All functions here are pure: they take a decoded image and return the image
//! that is safe to resample and encode for the destination format.
//!
//! Palette-indexed sources (PNG with `tRNS`, GIF) never reach this module as
//! palettes. The `image` decoders expand them to `Rgb8`, or to `Rgba8` when the
//! palette carries transparency, so "palette with transparency" is handled as
//! ordinary alpha.

use super::params::OutputFormat;
use crate::config::FlattenPolicy;
use image::{ColorType, DynamicImage, Rgb, RgbImage};

/// Decide whether an image with `color` must be composited onto a background.
pub fn needs_flattening(color: ColorType, format: OutputFormat, policy: FlattenPolicy) -> bool {
    if !color.has_alpha() {
        return false;
    }
    match policy {
        FlattenPolicy::Always => true,
        FlattenPolicy::WhenNeeded => !format.supports_alpha(),
    }
}

/// Blend one channel of a foreground pixel over the background.
///
/// `alpha` 255 keeps `fg`, 0 yields `bg`; values in between mix linearly,
/// rounded to nearest.
pub fn blend_channel(fg: u8, alpha: u8, bg: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}

/// Composite `img` onto a solid `background` canvas of the same size,
/// using its alpha channel as the mask. The result is opaque 8-bit RGB.
pub fn flatten_onto(img: &DynamicImage, background: Rgb<u8>) -> RgbImage {
    let rgba = img.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        Rgb([
            blend_channel(r, a, background[0]),
            blend_channel(g, a, background[1]),
            blend_channel(b, a, background[2]),
        ])
    })
}

/// Convert to a layout the destination encoder accepts, keeping alpha if present.
pub fn conform_to(img: DynamicImage, format: OutputFormat) -> DynamicImage {
    if format.accepts(img.color()) {
        img
    } else if img.color().has_alpha() {
        DynamicImage::ImageRgba8(img.to_rgba8())
    } else {
        DynamicImage::ImageRgb8(img.to_rgb8())
    }
}

/// Full normalization step. Returns the prepared image and whether it was flattened.
pub fn normalize(
    img: DynamicImage,
    format: OutputFormat,
    policy: FlattenPolicy,
    background: Rgb<u8>,
) -> (DynamicImage, bool) {
    let flattened = needs_flattening(img.color(), format, policy);
    let img = if flattened {
        DynamicImage::ImageRgb8(flatten_onto(&img, background))
    } else {
        img
    };
    (conform_to(img, format), flattened)
}
