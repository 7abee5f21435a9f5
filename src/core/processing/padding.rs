use image::RgbaImage;
use tracing::debug;

use crate::types::Dimensions;

/// Centres `content` on a fully transparent canvas of `canvas` size.
/// Content larger than the canvas is clipped on the right and bottom.
pub fn pad_to_canvas(content: &RgbaImage, canvas: Dimensions) -> RgbaImage {
    let (cols, rows) = content.dimensions();
    let copy_cols = cols.min(canvas.width) as usize;
    let copy_rows = rows.min(canvas.height);
    let pad_cols = canvas.width.saturating_sub(cols) / 2;
    let pad_rows = canvas.height.saturating_sub(rows) / 2;

    debug!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );

    let mut padded = RgbaImage::new(canvas.width, canvas.height);
    let src = content.as_raw();
    let dst = &mut *padded;
    let src_stride = cols as usize * 4;
    let dst_stride = canvas.width as usize * 4;
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..copy_rows as usize {
        let src_offset = row * src_stride;
        let dst_offset = (row + pad_rows as usize) * dst_stride + pad_cols as usize * 4;
        dst[dst_offset..dst_offset + copy_cols * 4]
            .copy_from_slice(&src[src_offset..src_offset + copy_cols * 4]);
    }
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn content_is_centred() {
        let content = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 255]));
        let out = pad_to_canvas(&content, Dimensions::new(6, 4));
        assert_eq!(out.dimensions(), (6, 4));
        assert_eq!(out.get_pixel(2, 1), &Rgba([1, 2, 3, 255]));
        assert_eq!(out.get_pixel(3, 2), &Rgba([1, 2, 3, 255]));
        assert_eq!(out.get_pixel(1, 1), &Rgba([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(4, 1), &Rgba([0, 0, 0, 0]));
        assert_eq!(out.get_pixel(2, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn oversized_content_is_clipped() {
        let content = RgbaImage::from_pixel(5, 5, Rgba([9, 9, 9, 255]));
        let out = pad_to_canvas(&content, Dimensions::new(3, 3));
        assert_eq!(out.dimensions(), (3, 3));
        assert!(out.pixels().all(|p| p.0 == [9, 9, 9, 255]));
    }
}
