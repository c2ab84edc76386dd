//! Output filename derivation.
//!
//! When no output path is given, the resized file lands next to the input
//! with a `_{width}x{height}` suffix before the extension:
//!
//! - `emoji.png` → `emoji_512x512.png`
//! - `shots/photo.tar.jpg` → `shots/photo.tar_512x512.jpg`
//! - `README` → `README_512x512`
//!
//! Only the last `.` of the file name starts the extension, and a leading run
//! of dots never does (`.hidden` has no extension). Directories are kept as-is.

use crate::imaging::Dimensions;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Split a file name into `(stem, extension)`; the extension excludes its dot.
///
/// Works on raw OS strings so names that are not valid UTF-8 survive intact.
pub fn split_extension(file_name: &OsStr) -> (&OsStr, Option<&OsStr>) {
    let path = Path::new(file_name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) if !stem.as_encoded_bytes().iter().all(|&b| b == b'.') => {
            (stem, Some(ext))
        }
        _ => (file_name, None),
    }
}

/// Derive the default output path for `input` resized to `size`.
pub fn derive_output_path(input: &Path, size: Dimensions) -> PathBuf {
    let suffix = format!("_{size}");
    let Some(file_name) = input.file_name() else {
        let mut name = input.as_os_str().to_owned();
        name.push(&suffix);
        return PathBuf::from(name);
    };
    let (stem, ext) = split_extension(file_name);
    let mut name = OsString::from(stem);
    name.push(&suffix);
    if let Some(ext) = ext {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}
