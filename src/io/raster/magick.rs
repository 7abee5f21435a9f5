use std::process::Command;

use image::RgbaImage;
use tracing::{debug, warn};

use super::{Rasterizer, SvgDocument};
use crate::core::processing::resize::resize_rgba;
use crate::error::{Error, Result};
use crate::types::Dimensions;

/// Rasterizes by shelling out to ImageMagick and reading the PNG back.
#[derive(Debug, Clone)]
pub struct MagickRasterizer {
    program: String,
}

impl MagickRasterizer {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn tool_error<S: Into<String>>(&self, reason: S) -> Error {
        Error::ExternalTool {
            program: self.program.clone(),
            reason: reason.into(),
        }
    }
}

impl Rasterizer for MagickRasterizer {
    fn name(&self) -> &str {
        "magick"
    }

    fn rasterize(&self, svg: &SvgDocument, size: Dimensions) -> Result<RgbaImage> {
        let scratch = tempfile::tempdir()?;
        let out_path = scratch.path().join("raster.png");

        // `!` forces the exact geometry instead of fitting inside it
        let geometry = format!("{}x{}!", size.width, size.height);
        debug!(
            "Running {} -background none -density 300 {:?} -resize {} {:?}",
            self.program, svg.path, geometry, out_path
        );

        let output = Command::new(&self.program)
            .args(["-background", "none", "-density", "300"])
            .arg(&svg.path)
            .arg("-resize")
            .arg(&geometry)
            .arg(&out_path)
            .output()
            .map_err(|e| self.tool_error(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.tool_error(format!("{}: {}", output.status, stderr.trim())));
        }
        if !out_path.exists() {
            return Err(self.tool_error("no output file was produced"));
        }

        let img = image::open(&out_path)?.to_rgba8();
        if img.dimensions() != (size.width, size.height) {
            warn!(
                "{} produced {}x{} instead of {}; resampling",
                self.program,
                img.width(),
                img.height(),
                size
            );
            return resize_rgba(&img, size);
        }
        Ok(img)
    }
}
