//! Row-major pixel extraction.

use image::GrayImage;
use panel_codec::Canvas;

use crate::{ImageError, Result};

/// Intensity samples in row-major order (row 0 left to right, then row 1, ...).
pub fn extract_pixels(img: &GrayImage) -> Vec<u8> {
    img.pixels().map(|p| p.0[0]).collect()
}

/// Like [`extract_pixels`], but requires the image to be exactly `canvas` sized.
pub fn extract_canvas(img: &GrayImage, canvas: Canvas) -> Result<Vec<u8>> {
    let (actual_w, actual_h) = img.dimensions();
    if (actual_w, actual_h) != canvas.dimensions() {
        return Err(ImageError::CanvasMismatch {
            expected: canvas,
            actual_w,
            actual_h,
        });
    }
    Ok(extract_pixels(img))
}
