use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::error::Result;

pub fn write_rgba_png(output: &Path, img: &RgbaImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    img.write_to(&mut writer, ImageFormat::Png)?;
    Ok(())
}
