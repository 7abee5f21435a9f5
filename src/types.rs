//! Shared types and enums used across favforge.
//! Includes `Dimensions`, the built-in `IconSet` selector, `FitMode`, `RasterBackend`
//! and the detected `SourceKind` of an input image.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Target pixel size of one icon.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self::new(side, side)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconSet {
    /// Favicons, the default Apple touch icon and the two web-app-manifest icons
    Essential,
    /// Every favicon, Apple touch icon, Android and Windows tile size
    Full,
    /// Android Chrome, Apple touch, favicon and tile icons for a web app
    WebApp,
}

impl std::fmt::Display for IconSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconSet::Essential => write!(f, "Essential"),
            IconSet::Full => write!(f, "Full"),
            IconSet::WebApp => write!(f, "WebApp"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Scale to exactly the target size, ignoring aspect ratio
    Stretch,
    /// Scale to fit inside the target, centred on a transparent canvas
    Pad,
}

impl std::fmt::Display for FitMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitMode::Stretch => write!(f, "Stretch"),
            FitMode::Pad => write!(f, "Pad"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RasterBackend {
    /// In-process rendering (resvg)
    Resvg,
    /// External ImageMagick `convert`/`magick` command
    Magick,
}

impl std::fmt::Display for RasterBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterBackend::Resvg => write!(f, "Resvg"),
            RasterBackend::Magick => write!(f, "Magick"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SourceKind {
    Raster,
    Vector,
}

impl SourceKind {
    /// Detects the kind from a file extension; `.svg` and `.svgz` are vector.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("svg") | Some("svgz") => SourceKind::Vector,
            _ => SourceKind::Raster,
        }
    }
}
