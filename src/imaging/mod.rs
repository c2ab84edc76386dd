//! Image processing — pure Rust.
//!
//! | Step | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` |
//! | **Normalize** | alpha composited onto a solid background ([`flatten`]) |
//! | **Resample** | `resize_exact` with Lanczos3 |
//! | **Encode** | JPEG at a fixed quality, other formats with encoder defaults |
//!
//! The module is split into:
//! - **Flatten**: Pure pixel-mode rules (unit testable)
//! - **Parameters**: Data structures describing the operation
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: Planning and orchestration on top of a backend

pub mod backend;
pub mod flatten;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{Dimensions, ImageBackend, ResizeError, ResizeOutcome};
pub use operations::{ResizeReport, plan_resize, resize_image};
pub use params::{OutputFormat, Quality, ResizeParams};
pub use rust_backend::RustBackend;
