//! Icon manifests: the ordered mapping of output file name to target dimensions
//! that drives a generation run. Three built-in sets cover the usual favicon,
//! Apple touch icon, Android and Windows tile sizes; custom sets load from JSON.
use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Dimensions, IconSet};

/// Size of one manifest entry as written in JSON: `16` or `[310, 150]`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconSize {
    Square(u32),
    Rect(u32, u32),
}

impl From<IconSize> for Dimensions {
    fn from(size: IconSize) -> Self {
        match size {
            IconSize::Square(side) => Dimensions::square(side),
            IconSize::Rect(width, height) => Dimensions::new(width, height),
        }
    }
}

impl From<Dimensions> for IconSize {
    fn from(dims: Dimensions) -> Self {
        if dims.is_square() {
            IconSize::Square(dims.width)
        } else {
            IconSize::Rect(dims.width, dims.height)
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IconEntry {
    pub name: String,
    #[serde(with = "size_repr")]
    pub size: Dimensions,
}

impl IconEntry {
    pub fn new<S: Into<String>>(name: S, size: Dimensions) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

mod size_repr {
    use super::IconSize;
    use crate::types::Dimensions;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(dims: &Dimensions, s: S) -> Result<S::Ok, S::Error> {
        IconSize::from(*dims).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Dimensions, D::Error> {
        IconSize::deserialize(d).map(Dimensions::from)
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IconManifest {
    pub icons: Vec<IconEntry>,
}

/// Largest width or height a manifest entry may ask for.
pub const MAX_ICON_SIDE: u32 = 16384;

const ESSENTIAL: &[(&str, u32, u32)] = &[
    ("favicon-16x16.png", 16, 16),
    ("favicon-32x32.png", 32, 32),
    ("favicon-96x96.png", 96, 96),
    ("apple-touch-icon.png", 180, 180),
    ("web-app-manifest-192x192.png", 192, 192),
    ("web-app-manifest-512x512.png", 512, 512),
];

const FULL: &[(&str, u32, u32)] = &[
    ("favicon-16x16.png", 16, 16),
    ("favicon-32x32.png", 32, 32),
    ("favicon-96x96.png", 96, 96),
    ("favicon-196x196.png", 196, 196),
    ("apple-touch-icon-57x57.png", 57, 57),
    ("apple-touch-icon-60x60.png", 60, 60),
    ("apple-touch-icon-72x72.png", 72, 72),
    ("apple-touch-icon-76x76.png", 76, 76),
    ("apple-touch-icon-114x114.png", 114, 114),
    ("apple-touch-icon-120x120.png", 120, 120),
    ("apple-touch-icon-144x144.png", 144, 144),
    ("apple-touch-icon-152x152.png", 152, 152),
    ("apple-touch-icon.png", 180, 180),
    ("web-app-manifest-192x192.png", 192, 192),
    ("web-app-manifest-512x512.png", 512, 512),
    ("mstile-70x70.png", 70, 70),
    ("mstile-144x144.png", 144, 144),
    ("mstile-150x150.png", 150, 150),
    // Wide tile
    ("mstile-310x150.png", 310, 150),
    ("mstile-310x310.png", 310, 310),
];

const WEB_APP: &[(&str, u32, u32)] = &[
    ("android-chrome-192x192.png", 192, 192),
    ("android-chrome-512x512.png", 512, 512),
    ("apple-touch-icon.png", 180, 180),
    ("apple-touch-icon-152x152.png", 152, 152),
    ("apple-touch-icon-144x144.png", 144, 144),
    ("apple-touch-icon-120x120.png", 120, 120),
    ("apple-touch-icon-114x114.png", 114, 114),
    ("apple-touch-icon-76x76.png", 76, 76),
    ("apple-touch-icon-72x72.png", 72, 72),
    ("apple-touch-icon-57x57.png", 57, 57),
    ("favicon-32x32.png", 32, 32),
    ("favicon-16x16.png", 16, 16),
    ("mstile-144x144.png", 144, 144),
];

impl IconManifest {
    /// Builds a manifest from entries, rejecting anything `validate` would reject.
    pub fn new(icons: Vec<IconEntry>) -> Result<Self> {
        let manifest = Self { icons };
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn builtin(set: IconSet) -> Self {
        let table = match set {
            IconSet::Essential => ESSENTIAL,
            IconSet::Full => FULL,
            IconSet::WebApp => WEB_APP,
        };
        Self {
            icons: table
                .iter()
                .map(|&(name, w, h)| IconEntry::new(name, Dimensions::new(w, h)))
                .collect(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let manifest: IconManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!("Loading icon manifest from {:?}", path);
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.icons.is_empty() {
            return Err(Error::invalid_manifest("manifest lists no icons"));
        }

        let mut seen = HashSet::with_capacity(self.icons.len());
        for entry in &self.icons {
            validate_file_name(&entry.name)?;
            if entry.size.is_empty() {
                return Err(Error::invalid_manifest(format!(
                    "{} has a zero dimension ({})",
                    entry.name, entry.size
                )));
            }
            if entry.size.width > MAX_ICON_SIDE || entry.size.height > MAX_ICON_SIDE {
                return Err(Error::invalid_manifest(format!(
                    "{} is {}, larger than the {MAX_ICON_SIDE}px limit",
                    entry.name, entry.size
                )));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(Error::invalid_manifest(format!(
                    "duplicate icon name {}",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IconEntry> {
        self.icons.iter()
    }
}

impl<'a> IntoIterator for &'a IconManifest {
    type Item = &'a IconEntry;
    type IntoIter = std::slice::Iter<'a, IconEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}

fn validate_file_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_manifest("icon name is empty"));
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(Error::invalid_manifest(format!(
            "icon name must be a plain file name, got {name}"
        )));
    }
    if !name.to_ascii_lowercase().ends_with(".png") || name.len() <= 4 {
        return Err(Error::invalid_manifest(format!(
            "icon name must end in .png, got {name}"
        )));
    }
    Ok(())
}
