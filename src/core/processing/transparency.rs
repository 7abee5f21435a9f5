use image::{Rgba, RgbaImage};
use serde::Serialize;

/// Value written over every near-white pixel.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TransparencyStats {
    pub pixels: u64,
    pub replaced: u64,
}

impl TransparencyStats {
    pub fn merge(&mut self, other: TransparencyStats) {
        self.pixels += other.pixels;
        self.replaced += other.replaced;
    }
}

/// True when every colour channel is strictly above `threshold`. Alpha is ignored.
#[inline]
pub fn is_near_white(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r > threshold && g > threshold && b > threshold
}

/// Rewrites near-white pixels to fully transparent white in place; all other
/// pixels are left untouched.
pub fn apply_transparency(img: &mut RgbaImage, threshold: u8) -> TransparencyStats {
    let mut stats = TransparencyStats::default();
    for pixel in img.pixels_mut() {
        stats.pixels += 1;
        if is_near_white(pixel, threshold) {
            *pixel = TRANSPARENT_WHITE;
            stats.replaced += 1;
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_pixels_strictly_above_threshold_are_replaced() {
        let mut img = RgbaImage::from_fn(4, 1, |x, _| match x {
            0 => Rgba([241, 241, 241, 255]),
            1 => Rgba([240, 255, 255, 255]),
            2 => Rgba([255, 255, 255, 128]),
            _ => Rgba([12, 200, 34, 255]),
        });

        let stats = apply_transparency(&mut img, 240);

        assert_eq!(stats, TransparencyStats { pixels: 4, replaced: 2 });
        assert_eq!(img.get_pixel(0, 0), &TRANSPARENT_WHITE);
        assert_eq!(img.get_pixel(1, 0), &Rgba([240, 255, 255, 255]));
        assert_eq!(img.get_pixel(2, 0), &TRANSPARENT_WHITE);
        assert_eq!(img.get_pixel(3, 0), &Rgba([12, 200, 34, 255]));
    }

    #[test]
    fn threshold_255_replaces_nothing() {
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
        let stats = apply_transparency(&mut img, 255);
        assert_eq!(stats.replaced, 0);
        assert!(img.pixels().all(|p| p.0[3] == 255));
    }
}
