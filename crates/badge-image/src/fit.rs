//! Fit-to-canvas resizing.
//!
//! Scales with nearest-neighbour sampling so a bilevel image stays bilevel,
//! then extends to the exact canvas anchored at the top-left on white.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use panel_codec::Canvas;
use tracing::debug;

/// Largest size with the source aspect ratio that fits inside `canvas`.
pub fn fit_dimensions(width: u32, height: u32, canvas: Canvas) -> (u32, u32) {
    let (w, h) = (f64::from(width.max(1)), f64::from(height.max(1)));
    let scale = (f64::from(canvas.width) / w).min(f64::from(canvas.height) / h);
    let new_w = ((w * scale).round() as u32).min(canvas.width).max(1);
    let new_h = ((h * scale).round() as u32).min(canvas.height).max(1);
    (new_w, new_h)
}

/// Scale `img` to fit inside `canvas`, then pad with white to exactly the canvas size.
pub fn fit_to_canvas(img: &GrayImage, canvas: Canvas) -> GrayImage {
    let (orig_w, orig_h) = img.dimensions();

    if (orig_w, orig_h) == canvas.dimensions() {
        debug!(%canvas, "Image already at canvas size, skipping fit");
        return img.clone();
    }

    let (new_w, new_h) = fit_dimensions(orig_w, orig_h, canvas);
    debug!(orig_w, orig_h, new_w, new_h, %canvas, "Fitting image to canvas");

    let scaled = imageops::resize(img, new_w, new_h, FilterType::Nearest);
    let mut out = GrayImage::from_pixel(canvas.width, canvas.height, Luma([255]));
    imageops::replace(&mut out, &scaled, 0, 0);
    out
}
