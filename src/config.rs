//! Resize configuration.
//!
//! Settings are resolved in three layers, each overriding the previous:
//!
//! ```text
//! stock defaults  →  --config FILE  →  command-line flags
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [size]
//! width = 512               # 1-16384
//! height = 512              # 1-16384
//!
//! [jpeg]
//! quality = 95              # Only applied to .jpg/.jpeg outputs (1-100)
//!
//! [transparency]
//! flatten = "always"        # "always" | "when-needed"
//! background = "#ffffff"    # Canvas color for transparent pixels
//! ```
//!
//! Config files are sparse. Unknown keys are rejected so typos surface early.

use crate::imaging::Dimensions;
use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Full resize configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResizeConfig {
    /// Target dimensions.
    pub size: SizeConfig,
    /// JPEG encoder settings.
    pub jpeg: JpegConfig,
    /// How alpha channels are handled before resampling.
    pub transparency: TransparencyConfig,
}

/// Largest accepted target edge, in pixels.
pub const MAX_DIMENSION: u32 = 16384;

impl ResizeConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(ConfigError::Validation(
                "size.width and size.height must be non-zero".into(),
            ));
        }
        if self.size.width > MAX_DIMENSION || self.size.height > MAX_DIMENSION {
            return Err(ConfigError::Validation(format!(
                "size.width and size.height must be at most {MAX_DIMENSION}"
            )));
        }
        if !(1..=100).contains(&self.jpeg.quality) {
            return Err(ConfigError::Validation(
                "jpeg.quality must be 1-100".into(),
            ));
        }
        parse_hex_color(&self.transparency.background)?;
        Ok(())
    }

    pub fn target(&self) -> Dimensions {
        Dimensions {
            width: self.size.width,
            height: self.size.height,
        }
    }

    /// Background color as RGB. Falls back to white if the string is malformed;
    /// [`validate`](Self::validate) rejects such configs before they get here.
    pub fn background(&self) -> Rgb<u8> {
        parse_hex_color(&self.transparency.background).unwrap_or(Rgb([255, 255, 255]))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SizeConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SizeConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JpegConfig {
    /// Encoding quality (1 = worst, 100 = best).
    pub quality: u32,
}

impl Default for JpegConfig {
    fn default() -> Self {
        Self { quality: 95 }
    }
}

/// When to composite transparent images onto the background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlattenPolicy {
    /// Flatten every image with an alpha channel, whatever the destination.
    #[default]
    Always,
    /// Flatten only when the destination format cannot store alpha.
    WhenNeeded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransparencyConfig {
    pub flatten: FlattenPolicy,
    /// `#rrggbb` hex color.
    pub background: String,
}

impl Default for TransparencyConfig {
    fn default() -> Self {
        Self {
            flatten: FlattenPolicy::default(),
            background: "#ffffff".to_string(),
        }
    }
}

/// Parse a `#rrggbb` color.
pub fn parse_hex_color(s: &str) -> Result<Rgb<u8>, ConfigError> {
    let invalid = || {
        ConfigError::Validation(format!(
            "transparency.background must be #rrggbb, got {s:?}"
        ))
    };
    let hex = s.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// Settings supplied on the command line. `None`/`false` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub jpeg_quality: Option<u32>,
    pub keep_alpha: bool,
}

impl Overrides {
    /// Render as a sparse TOML table suitable for [`merge_toml`].
    pub fn to_toml(&self) -> toml::Value {
        let mut root = toml::Table::new();

        let mut size = toml::Table::new();
        if let Some(w) = self.width {
            size.insert("width".into(), toml::Value::Integer(w.into()));
        }
        if let Some(h) = self.height {
            size.insert("height".into(), toml::Value::Integer(h.into()));
        }
        if !size.is_empty() {
            root.insert("size".into(), toml::Value::Table(size));
        }

        if let Some(q) = self.jpeg_quality {
            let mut jpeg = toml::Table::new();
            jpeg.insert("quality".into(), toml::Value::Integer(q.into()));
            root.insert("jpeg".into(), toml::Value::Table(jpeg));
        }

        if self.keep_alpha {
            let mut transparency = toml::Table::new();
            transparency.insert("flatten".into(), toml::Value::String("when-needed".into()));
            root.insert("transparency".into(), toml::Value::Table(transparency));
        }

        toml::Value::Table(root)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ResizeConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file as a raw TOML value. A missing file is an error:
/// the path was asked for explicitly.
pub fn load_raw_config(path: &Path) -> Result<toml::Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Merge layers in order onto the stock defaults, then deserialize and validate.
pub fn resolve_config(
    layers: impl IntoIterator<Item = toml::Value>,
) -> Result<ResizeConfig, ConfigError> {
    let merged = layers.into_iter().fold(stock_defaults_value(), merge_toml);
    let config: ResizeConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the effective config: stock defaults, optional file, then CLI overrides.
pub fn load_config(
    file: Option<&Path>,
    overrides: &Overrides,
) -> Result<ResizeConfig, ConfigError> {
    let mut layers = Vec::with_capacity(2);
    if let Some(path) = file {
        layers.push(load_raw_config(path)?);
    }
    layers.push(overrides.to_toml());
    resolve_config(layers)
}

/// Returns a fully-commented stock config with all keys and explanations.
///
/// Printed by `--print-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# fixed-resize configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Command-line flags override this file.

# ---------------------------------------------------------------------------
# Target size
# ---------------------------------------------------------------------------
# The image is stretched to exactly these dimensions; aspect ratio is not
# preserved. Also used in the derived output name (photo.jpg -> photo_512x512.jpg).
[size]
width = 512
height = 512

# ---------------------------------------------------------------------------
# JPEG encoding
# ---------------------------------------------------------------------------
# Applied only when the output ends in .jpg or .jpeg. Other formats use their
# encoder defaults (PNG, TIFF and WebP are lossless).
[jpeg]
quality = 95

# ---------------------------------------------------------------------------
# Transparency
# ---------------------------------------------------------------------------
# flatten = "always"       composite every image with alpha onto the background
# flatten = "when-needed"  keep alpha for PNG/TIFF/WebP/AVIF, flatten for JPEG
[transparency]
flatten = "always"
background = "#ffffff"
"##
}
