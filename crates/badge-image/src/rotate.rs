//! 180-degree rotation for the inverted panel mounting.

use image::GrayImage;
use image::imageops;
use tracing::debug;

/// Rotate an image 180 degrees.
///
/// Equivalent to reversing the row-major pixel order.
pub fn rotate_180(img: &GrayImage) -> GrayImage {
    let (w, h) = img.dimensions();
    debug!(w, h, "Rotating image 180 degrees");
    imageops::rotate180(img)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    /// Top-left=10, Top-right=20, Bottom-left=30, Bottom-right=40
    fn corner_image(width: u32, height: u32) -> GrayImage {
        let mut img = GrayImage::from_pixel(width, height, Luma([128]));
        img.put_pixel(0, 0, Luma([10]));
        img.put_pixel(width - 1, 0, Luma([20]));
        img.put_pixel(0, height - 1, Luma([30]));
        img.put_pixel(width - 1, height - 1, Luma([40]));
        img
    }

    #[test]
    fn test_rotate_180_swaps_corners() {
        let rotated = rotate_180(&corner_image(6, 3));
        assert_eq!(rotated.dimensions(), (6, 3));
        assert_eq!(rotated.get_pixel(0, 0).0[0], 40);
        assert_eq!(rotated.get_pixel(5, 0).0[0], 30);
        assert_eq!(rotated.get_pixel(0, 2).0[0], 20);
        assert_eq!(rotated.get_pixel(5, 2).0[0], 10);
    }

    #[test]
    fn test_rotate_180_reverses_row_major_order() {
        let img = GrayImage::from_fn(5, 3, |x, y| Luma([(y * 5 + x) as u8]));
        let rotated = rotate_180(&img);
        let mut expected: Vec<u8> = img.pixels().map(|p| p.0[0]).collect();
        expected.reverse();
        let actual: Vec<u8> = rotated.pixels().map(|p| p.0[0]).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_rotate_180_twice_is_identity() {
        let img = GrayImage::from_fn(7, 5, |x, y| Luma([(x * 31 + y * 7) as u8]));
        assert_eq!(rotate_180(&rotate_180(&img)), img);
    }
}
