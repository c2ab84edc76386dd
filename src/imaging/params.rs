//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between [`operations`](super::operations), which decides the
//! target, and the [`backend`](super::backend), which does the pixel work.
//!
//! ## Types
//!
//! - [`Quality`] — Lossy encoding quality (1–100, default 95). Clamped on construction.
//! - [`OutputFormat`] — Destination format, chosen from the output extension.
//! - [`ResizeParams`] — Full specification for one resize: paths, target size,
//!   format, optional quality, and transparency handling.

use crate::config::FlattenPolicy;
use image::{ColorType, ImageFormat, Rgb};
use std::path::{Path, PathBuf};

/// Quality setting for lossy image encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quality(u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// The value as encoders take it.
    pub fn percent(self) -> u8 {
        u8::try_from(self.0).unwrap_or(100)
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(95)
    }
}

/// Formats the resizer can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    Tiff,
    WebP,
    Avif,
    Gif,
    Bmp,
}

impl OutputFormat {
    /// Pick the format from a path's extension, case-insensitively.
    ///
    /// Returns `None` for missing or unrecognised extensions.
    pub fn from_path(path: &Path) -> Option<Self> {
        match ImageFormat::from_path(path).ok()? {
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::Tiff => Some(Self::Tiff),
            ImageFormat::WebP => Some(Self::WebP),
            ImageFormat::Avif => Some(Self::Avif),
            ImageFormat::Gif => Some(Self::Gif),
            ImageFormat::Bmp => Some(Self::Bmp),
            _ => None,
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::Tiff => ImageFormat::Tiff,
            Self::WebP => ImageFormat::WebP,
            Self::Avif => ImageFormat::Avif,
            Self::Gif => ImageFormat::Gif,
            Self::Bmp => ImageFormat::Bmp,
        }
    }

    /// Whether the format can store an alpha channel.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, Self::Jpeg)
    }

    /// Pixel layouts the encoder for this format writes without conversion.
    pub fn accepts(self, color: ColorType) -> bool {
        use ColorType::*;
        match self {
            Self::Jpeg => matches!(color, L8 | Rgb8),
            Self::Png => matches!(
                color,
                L8 | La8 | Rgb8 | Rgba8 | L16 | La16 | Rgb16 | Rgba16
            ),
            Self::Tiff => matches!(color, L8 | Rgb8 | Rgba8 | L16 | Rgb16 | Rgba16),
            Self::WebP | Self::Avif | Self::Gif | Self::Bmp => matches!(color, Rgb8 | Rgba8),
        }
    }
}

/// Whether the path ends in `.jpg` or `.jpeg`, case-insensitively.
///
/// Narrower than [`OutputFormat::Jpeg`]: `.jfif` and `.jpe` also encode as
/// JPEG but do not get a forced quality.
pub fn has_jpeg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg"))
}

/// Parameters for a single fixed-size resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    /// Forced encoder quality. `None` leaves the format's defaults alone.
    pub quality: Option<Quality>,
    pub flatten: FlattenPolicy,
    /// Canvas color transparent pixels are composited onto.
    pub background: Rgb<u8>,
}
