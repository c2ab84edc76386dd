//! # fixed-resize
//!
//! Resize one image to fixed dimensions (512×512 by default), flattening any
//! transparency onto a white background first, and write it next to the
//! input as `name_512x512.ext` or to an explicit path.
//!
//! # Pipeline
//!
//! ```text
//! stat input → plan (output path, format, quality) → decode
//!            → flatten alpha → Lanczos3 resample → encode → report
//! ```
//!
//! The run is a single synchronous pass with two outcomes: a report of the
//! target size, output path and before/after file sizes, or a
//! [`ResizeError`](imaging::ResizeError) that is either `NotFound` (the input
//! is missing) or `Processing` (anything else).
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Backend trait, pixel normalization, Lanczos3 resize, encoding |
//! | [`naming`] | Pure `name_WxH.ext` output path derivation |
//! | [`config`] | Layered TOML configuration: stock defaults → file → CLI flags |
//! | [`output`] | CLI status and error line formatting |
//!
//! # Design Decisions
//!
//! ## Stretch, Don't Fit
//!
//! The target size is exact. Aspect ratio is not preserved; a 300×30 banner
//! becomes a 512×512 square. Callers who want fit-or-fill semantics should
//! crop first.
//!
//! ## Flatten by Default
//!
//! Alpha is composited onto the background for every destination, including
//! PNG. This keeps outputs uniform whatever the extension. Set
//! `transparency.flatten = "when-needed"` (or pass `--keep-alpha`) to keep
//! alpha wherever the destination format can store it.
//!
//! ## Quality Only Where It Means Something
//!
//! `.jpg`/`.jpeg` outputs are encoded at quality 95. Every other extension,
//! `.jfif` included, is written with its encoder defaults: PNG, TIFF, WebP and
//! BMP are lossless here.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;

#[cfg(test)]
pub(crate) mod test_helpers;
