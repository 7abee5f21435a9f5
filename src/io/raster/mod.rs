//! SVG rasterization. A parsed `SvgDocument` is rendered to an RGBA buffer of an
//! exact pixel size by one of the `Rasterizer` backends: in-process `resvg`, or the
//! external ImageMagick command.
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;
use resvg::usvg;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{Dimensions, RasterBackend};

pub mod magick;
pub mod resvg_backend;

pub use magick::MagickRasterizer;
pub use resvg_backend::ResvgRasterizer;

/// A parsed SVG source: the file it came from and its usvg tree.
#[derive(Debug)]
pub struct SvgDocument {
    pub path: PathBuf,
    pub tree: usvg::Tree,
}

impl SvgDocument {
    pub fn open(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_data(path, &data)
    }

    pub fn from_data(path: &Path, data: &[u8]) -> Result<Self> {
        let mut opt = usvg::Options::default();
        // Text is converted to paths at parse time and needs a font database
        Arc::make_mut(&mut opt.fontdb).load_system_fonts();
        opt.resources_dir = std::fs::canonicalize(path)
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()));

        let tree = usvg::Tree::from_data(data, &opt).map_err(|e| Error::Svg(e.to_string()))?;
        debug!(
            "Parsed SVG {:?}: intrinsic size {}x{}",
            path,
            tree.size().width(),
            tree.size().height()
        );
        Ok(Self {
            path: path.to_path_buf(),
            tree,
        })
    }

    /// Intrinsic size in CSS pixels.
    pub fn size(&self) -> (f32, f32) {
        let size = self.tree.size();
        (size.width(), size.height())
    }

    /// Intrinsic size rounded to whole pixels, at least 1x1.
    pub fn pixel_size(&self) -> (u32, u32) {
        let (w, h) = self.size();
        ((w.round() as u32).max(1), (h.round() as u32).max(1))
    }
}

pub trait Rasterizer {
    fn name(&self) -> &str;

    /// Renders the whole document stretched to exactly `size` on a transparent background.
    fn rasterize(&self, svg: &SvgDocument, size: Dimensions) -> Result<RgbaImage>;
}

/// Builds the rasterizer for a backend selection.
pub fn rasterizer_for(backend: RasterBackend, magick_program: &str) -> Box<dyn Rasterizer> {
    match backend {
        RasterBackend::Resvg => Box::new(ResvgRasterizer),
        RasterBackend::Magick => Box::new(MagickRasterizer::new(magick_program)),
    }
}
