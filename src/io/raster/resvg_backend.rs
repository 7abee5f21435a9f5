use image::RgbaImage;
use resvg::tiny_skia;

use super::{Rasterizer, SvgDocument};
use crate::error::{Error, Result};
use crate::types::Dimensions;

/// In-process renderer backed by resvg/tiny-skia.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResvgRasterizer;

impl Rasterizer for ResvgRasterizer {
    fn name(&self) -> &str {
        "resvg"
    }

    fn rasterize(&self, svg: &SvgDocument, size: Dimensions) -> Result<RgbaImage> {
        let mut pixmap = tiny_skia::Pixmap::new(size.width, size.height)
            .ok_or_else(|| Error::Svg(format!("cannot allocate a {size} pixmap")))?;

        let (svg_w, svg_h) = svg.size();
        let transform = tiny_skia::Transform::from_scale(
            size.width as f32 / svg_w,
            size.height as f32 / svg_h,
        );
        resvg::render(&svg.tree, transform, &mut pixmap.as_mut());

        // tiny-skia stores premultiplied alpha; PNG wants straight alpha
        let mut rgba = Vec::with_capacity(pixmap.data().len());
        for px in pixmap.pixels() {
            let c = px.demultiply();
            rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        RgbaImage::from_raw(size.width, size.height, rgba)
            .ok_or_else(|| Error::Svg("rendered buffer does not match pixmap size".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::raster::tests::RED_SQUARE_SVG;
    use std::path::Path;

    #[test]
    fn renders_exact_size_with_stretch() {
        let doc = SvgDocument::from_data(Path::new("red.svg"), RED_SQUARE_SVG.as_bytes()).unwrap();
        let img = ResvgRasterizer
            .rasterize(&doc, Dimensions::square(32))
            .unwrap();
        assert_eq!(img.dimensions(), (32, 32));
        let center = img.get_pixel(16, 16).0;
        assert_eq!(center, [255, 0, 0, 255]);
    }

    #[test]
    fn background_is_transparent() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10">
  <rect x="0" y="0" width="5" height="10" fill="blue"/>
</svg>"#;
        let doc = SvgDocument::from_data(Path::new("half.svg"), svg.as_bytes()).unwrap();
        let img = ResvgRasterizer.rasterize(&doc, Dimensions::square(20)).unwrap();
        assert_eq!(img.get_pixel(2, 10).0, [0, 0, 255, 255]);
        assert_eq!(img.get_pixel(17, 10).0[3], 0);
    }
}
