//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait is the seam between the orchestration in
//! [`operations`](super::operations) and the pixel work. The production
//! implementation is [`RustBackend`](super::rust_backend::RustBackend); tests
//! swap in a recording mock.

use super::params::ResizeParams;
use image::ColorType;
use std::path::PathBuf;
use thiserror::Error;

/// The two ways a resize can fail.
///
/// `NotFound` is reported distinctly so the CLI can echo the offending path.
/// Everything else (undecodable input, unsupported output, I/O on either end)
/// collapses into `Processing` with the underlying message.
#[derive(Error, Debug)]
pub enum ResizeError {
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),
    #[error("{0}")]
    Processing(String),
}

impl From<std::io::Error> for ResizeError {
    fn from(e: std::io::Error) -> Self {
        ResizeError::Processing(e.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// What the backend observed while executing a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOutcome {
    /// Decoded source dimensions.
    pub source: Dimensions,
    /// Pixel layout the decoder produced.
    pub source_color: ColorType,
    /// Whether the alpha channel was composited onto the background.
    pub flattened: bool,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Decode `params.source`, normalize, resample and write `params.output`.
    fn resize(&self, params: &ResizeParams) -> Result<ResizeOutcome, ResizeError>;
}
