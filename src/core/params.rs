use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{FitMode, IconSet, RasterBackend};

/// Near-white cut-off used by the transparency pass.
pub const DEFAULT_THRESHOLD: u8 = 240;

/// Program invoked by the ImageMagick rasterizer backend.
pub const DEFAULT_MAGICK_PROGRAM: &str = "convert";

/// Icon generation parameters suitable for config files and presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateParams {
    pub icon_set: IconSet,
    pub fit: FitMode,
    pub backend: RasterBackend,
    pub magick_program: String,
    /// Run the transparency pass over every generated icon
    pub transparent: bool,
    pub threshold: u8,
    /// Where to write the web app manifest `icons` fragment, relative to the output directory
    pub webmanifest: Option<String>,
    /// Prefix joined onto each `src` in the web app manifest fragment
    pub src_prefix: String,
    pub continue_on_error: bool,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            icon_set: IconSet::Full,
            fit: FitMode::Stretch,
            backend: RasterBackend::Resvg,
            magick_program: DEFAULT_MAGICK_PROGRAM.to_string(),
            transparent: false,
            threshold: DEFAULT_THRESHOLD,
            webmanifest: None,
            src_prefix: String::new(),
            continue_on_error: true,
        }
    }
}

impl GenerateParams {
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Transparency pass parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransparencyParams {
    pub threshold: u8,
    pub continue_on_error: bool,
}

impl Default for TransparencyParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            continue_on_error: true,
        }
    }
}
