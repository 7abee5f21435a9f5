//! Source image loading. A raster is decoded once to RGBA; an SVG is parsed once
//! and rasterized directly at each requested size.
use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader, RgbaImage};
use tracing::info;

use crate::core::processing::padding::pad_to_canvas;
use crate::core::processing::resize::{calculate_fit_dimensions, fit_image};
use crate::error::{Error, Result};
use crate::io::raster::{Rasterizer, SvgDocument};
use crate::types::{Dimensions, FitMode, SourceKind};

/// Decodes a raster file, picking the decoder from its content rather than its extension.
pub fn decode_raster(path: &Path) -> Result<DynamicImage> {
    Ok(ImageReader::open(path)?.with_guessed_format()?.decode()?)
}

pub enum SourceData {
    Raster(RgbaImage),
    Vector(SvgDocument),
}

pub struct SourceImage {
    pub path: PathBuf,
    pub data: SourceData,
}

impl SourceImage {
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let data = match SourceKind::from_path(path) {
            SourceKind::Vector => SourceData::Vector(SvgDocument::open(path)?),
            SourceKind::Raster => SourceData::Raster(decode_raster(path)?.to_rgba8()),
        };

        let source = Self {
            path: path.to_path_buf(),
            data,
        };
        let (w, h) = source.dimensions();
        info!("Loaded {:?} source {:?} ({}x{})", source.kind(), path, w, h);
        Ok(source)
    }

    pub fn from_rgba(path: &Path, img: RgbaImage) -> Self {
        Self {
            path: path.to_path_buf(),
            data: SourceData::Raster(img),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self.data {
            SourceData::Raster(_) => SourceKind::Raster,
            SourceData::Vector(_) => SourceKind::Vector,
        }
    }

    /// Pixel size of a raster, or the rounded intrinsic size of an SVG.
    pub fn dimensions(&self) -> (u32, u32) {
        match &self.data {
            SourceData::Raster(img) => img.dimensions(),
            SourceData::Vector(svg) => svg.pixel_size(),
        }
    }

    /// Produces an image of exactly `target` size.
    pub fn render(
        &self,
        target: Dimensions,
        fit: FitMode,
        rasterizer: &dyn Rasterizer,
    ) -> Result<RgbaImage> {
        match &self.data {
            SourceData::Raster(img) => fit_image(img, target, fit),
            SourceData::Vector(svg) => match fit {
                FitMode::Stretch => rasterizer.rasterize(svg, target),
                FitMode::Pad => {
                    let (w, h) = svg.pixel_size();
                    let inner = calculate_fit_dimensions(w, h, target);
                    let rendered = rasterizer.rasterize(svg, inner)?;
                    Ok(pad_to_canvas(&rendered, target))
                }
            },
        }
    }
}
