//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP, GIF, BMP) | `image::ImageReader` with format guessed from content |
//! | Normalize | [`flatten::normalize`](super::flatten::normalize) |
//! | Resize | `image::DynamicImage::resize_exact` with `Lanczos3` |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` at the planned quality |
//! | Encode → other | `image::DynamicImage::write_to` with encoder defaults |

use super::backend::{Dimensions, ImageBackend, ResizeError, ResizeOutcome};
use super::flatten;
use super::params::{OutputFormat, Quality, ResizeParams};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Pure Rust backend using the `image` crate.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Load and decode an image from disk.
///
/// The format is sniffed from the file contents, so a mislabelled extension
/// still decodes.
fn load_image(path: &Path) -> Result<DynamicImage, ResizeError> {
    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ResizeError::NotFound(path.to_path_buf()),
        _ => ResizeError::from(e),
    })?;
    reader
        .with_guessed_format()?
        .decode()
        .map_err(|e| {
            ResizeError::Processing(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Encode `img` to `path`, truncating any existing file.
fn save_image(
    img: &DynamicImage,
    path: &Path,
    format: OutputFormat,
    quality: Option<Quality>,
) -> Result<(), ResizeError> {
    let file = std::fs::File::create(path)?;
    let mut writer = BufWriter::new(file);

    let encoded = match (format, quality) {
        (OutputFormat::Jpeg, Some(q)) => img.write_with_encoder(
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, q.percent()),
        ),
        _ => img.write_to(&mut writer, format.image_format()),
    };
    encoded.map_err(|e| {
        ResizeError::Processing(format!("{:?} encode failed: {}", format, e))
    })?;

    writer.flush()?;
    Ok(())
}

impl ImageBackend for RustBackend {
    fn resize(&self, params: &ResizeParams) -> Result<ResizeOutcome, ResizeError> {
        let img = load_image(&params.source)?;
        let source = Dimensions {
            width: img.width(),
            height: img.height(),
        };
        let source_color = img.color();
        debug!(
            source = %params.source.display(),
            dimensions = %source,
            color = ?source_color,
            "decoded source image"
        );

        let (prepared, flattened) =
            flatten::normalize(img, params.format, params.flatten, params.background);
        debug!(flattened, color = ?prepared.color(), "normalized pixel mode");

        let resized = prepared.resize_exact(params.width, params.height, FilterType::Lanczos3);
        debug!(
            width = params.width,
            height = params.height,
            "resampled with Lanczos3"
        );

        save_image(&resized, &params.output, params.format, params.quality)?;
        debug!(
            output = %params.output.display(),
            format = ?params.format,
            quality = params.quality.map(Quality::value),
            "encoded output"
        );

        Ok(ResizeOutcome {
            source,
            source_color,
            flattened,
        })
    }
}
