//! Bilevel conversion.
//!
//! Hard threshold only: no dithering, no antialiasing, so edges stay crisp
//! on the panel.

use image::{DynamicImage, GrayImage, Luma, Rgba};
use tracing::debug;

/// Midpoint threshold used for the bilevel conversion. Not configurable.
pub const BILEVEL_THRESHOLD: u8 = 128;

/// Composite any transparency onto a white background.
///
/// Images without an alpha channel are returned as-is.
pub fn flatten_alpha(img: DynamicImage) -> DynamicImage {
    if !img.color().has_alpha() {
        return img;
    }

    debug!(w = img.width(), h = img.height(), "Flattening alpha onto white");
    let mut rgba = img.into_rgba8();
    for px in rgba.pixels_mut() {
        let [r, g, b, a] = px.0;
        let alpha = u32::from(a);
        let blend = |c: u8| ((u32::from(c) * alpha + 255 * (255 - alpha)) / 255) as u8;
        *px = Rgba([blend(r), blend(g), blend(b), 255]);
    }
    DynamicImage::ImageRgba8(rgba)
}

/// Map every pixel to 0 or 255: values >= `threshold` become white.
pub fn threshold_convert(img: &GrayImage, threshold: u8) -> GrayImage {
    let (width, height) = img.dimensions();
    debug!(width, height, threshold, "Applying threshold conversion");

    GrayImage::from_fn(width, height, |x, y| {
        let val = img.get_pixel(x, y).0[0];
        Luma([if val >= threshold { 255 } else { 0 }])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, LumaA, RgbImage};

    #[test]
    fn test_threshold_midpoint() {
        let mut img = GrayImage::new(4, 1);
        img.put_pixel(0, 0, Luma([0]));
        img.put_pixel(1, 0, Luma([127]));
        img.put_pixel(2, 0, Luma([128]));
        img.put_pixel(3, 0, Luma([255]));

        let result = threshold_convert(&img, BILEVEL_THRESHOLD);
        let values: Vec<u8> = result.pixels().map(|p| p.0[0]).collect();
        assert_eq!(values, vec![0, 0, 255, 255]);
    }

    #[test]
    fn test_threshold_output_is_binary() {
        let img = GrayImage::from_fn(16, 16, |x, y| Luma([((x * 16 + y) % 256) as u8]));
        let result = threshold_convert(&img, BILEVEL_THRESHOLD);
        assert_eq!(result.dimensions(), (16, 16));
        assert!(result.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn test_flatten_transparent_becomes_white() {
        let img = GrayAlphaImage::from_pixel(2, 2, LumaA([0, 0]));
        let flat = flatten_alpha(DynamicImage::ImageLumaA8(img)).into_luma8();
        assert!(flat.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn test_flatten_opaque_keeps_color() {
        let img = GrayAlphaImage::from_pixel(2, 2, LumaA([10, 255]));
        let flat = flatten_alpha(DynamicImage::ImageLumaA8(img)).into_luma8();
        assert!(flat.pixels().all(|p| p.0[0] == 10));
    }

    #[test]
    fn test_flatten_without_alpha_is_noop() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(3, 2));
        let flat = flatten_alpha(img);
        assert!(!flat.color().has_alpha());
        assert_eq!((flat.width(), flat.height()), (3, 2));
    }
}
