use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::core::processing::padding::pad_to_canvas;
use crate::error::{Error, Result};
use crate::types::{Dimensions, FitMode};

/// Largest size with the source aspect ratio that fits inside `target`.
/// Each side is rounded and never drops below one pixel.
pub fn calculate_fit_dimensions(src_width: u32, src_height: u32, target: Dimensions) -> Dimensions {
    if src_width == 0 || src_height == 0 {
        return target;
    }

    let scale_x = target.width as f64 / src_width as f64;
    let scale_y = target.height as f64 / src_height as f64;
    let scale = scale_x.min(scale_y);

    let width = ((src_width as f64 * scale).round() as u32).clamp(1, target.width.max(1));
    let height = ((src_height as f64 * scale).round() as u32).clamp(1, target.height.max(1));
    Dimensions::new(width, height)
}

/// Lanczos3 resample of an RGBA image to exactly `target`.
pub fn resize_rgba(src: &RgbaImage, target: Dimensions) -> Result<RgbaImage> {
    let (src_width, src_height) = src.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(Error::Processing(format!(
            "cannot resize an empty {}x{} image",
            src_width, src_height
        )));
    }
    if target.is_empty() {
        return Err(Error::Processing(format!("invalid target size {target}")));
    }
    if (src_width, src_height) == (target.width, target.height) {
        return Ok(src.clone());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        src_width,
        src_height,
        src.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target.width, target.height, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RgbaImage::from_raw(target.width, target.height, dst_image.into_vec())
        .ok_or_else(|| Error::resize("resized buffer does not match target size"))
}

/// Resizes a raster to `target` following the fit mode. The result is always
/// exactly `target` in size.
pub fn fit_image(src: &RgbaImage, target: Dimensions, fit: FitMode) -> Result<RgbaImage> {
    match fit {
        FitMode::Stretch => resize_rgba(src, target),
        FitMode::Pad => {
            let (src_width, src_height) = src.dimensions();
            let inner = calculate_fit_dimensions(src_width, src_height, target);
            debug!(
                "Fitting {}x{} into {} as {}",
                src_width, src_height, target, inner
            );
            let resized = resize_rgba(src, inner)?;
            Ok(pad_to_canvas(&resized, target))
        }
    }
}
