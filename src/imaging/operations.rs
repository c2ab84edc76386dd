//! High-level resize operation.
//!
//! [`plan_resize`] turns configuration into [`ResizeParams`] without touching
//! the filesystem; [`resize_image`] runs the plan through a backend and
//! gathers the numbers for the final report.

use super::backend::{Dimensions, ImageBackend, ResizeError, ResizeOutcome};
use super::params::{OutputFormat, Quality, ResizeParams, has_jpeg_extension};
use crate::config::ResizeConfig;
use crate::naming::derive_output_path;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, ResizeError>;

/// Everything the CLI prints after a successful resize.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeReport {
    pub target: Dimensions,
    pub output: PathBuf,
    pub original_bytes: u64,
    pub new_bytes: u64,
    pub outcome: ResizeOutcome,
}

impl ResizeReport {
    pub fn original_kb(&self) -> f64 {
        kilobytes(self.original_bytes)
    }

    pub fn new_kb(&self) -> f64 {
        kilobytes(self.new_bytes)
    }
}

/// Bytes to KiB.
pub fn kilobytes(bytes: u64) -> f64 {
    bytes as f64 / 1024.0
}

/// Plan a resize without executing it.
///
/// Resolves the output path (given, or derived from `input`), picks the output
/// format from its extension and decides the encoder quality: `.jpg`/`.jpeg`
/// outputs get the configured quality, everything else (including `.jfif`)
/// keeps its encoder defaults.
pub fn plan_resize(
    input: &Path,
    output: Option<&Path>,
    config: &ResizeConfig,
) -> Result<ResizeParams> {
    let target = config.target();
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => derive_output_path(input, target),
    };

    let format = OutputFormat::from_path(&output).ok_or_else(|| {
        let ext = output
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        ResizeError::Processing(format!("Unsupported output format: {:?}", ext))
    })?;

    let quality = (format == OutputFormat::Jpeg && has_jpeg_extension(&output))
        .then(|| Quality::new(config.jpeg.quality));

    Ok(ResizeParams {
        source: input.to_path_buf(),
        output,
        width: target.width,
        height: target.height,
        format,
        quality,
        flatten: config.transparency.flatten,
        background: config.background(),
    })
}

/// Resize `input` to the configured size and write it out.
///
/// Fails with [`ResizeError::NotFound`] before anything else when `input` is
/// missing; no output is written in that case.
pub fn resize_image(
    backend: &impl ImageBackend,
    input: &Path,
    output: Option<&Path>,
    config: &ResizeConfig,
) -> Result<ResizeReport> {
    let original_bytes = match std::fs::metadata(input) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ResizeError::NotFound(input.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let params = plan_resize(input, output, config)?;
    debug!(?params, "planned resize");

    let outcome = backend.resize(&params)?;
    let new_bytes = std::fs::metadata(&params.output)?.len();

    Ok(ResizeReport {
        target: config.target(),
        output: params.output,
        original_bytes,
        new_bytes,
        outcome,
    })
}
