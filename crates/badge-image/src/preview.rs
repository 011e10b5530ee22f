//! Render a packed frame back into an image for inspection.

use image::{GrayImage, Luma};
use panel_codec::{PackedBuffer, PixelState, Polarity, unpack};

/// Black for lit pixels, white for unlit, at the frame's canvas size.
pub fn render_preview(buffer: &PackedBuffer, polarity: Polarity) -> GrayImage {
    let canvas = buffer.canvas();
    let states = unpack(buffer, polarity);
    GrayImage::from_fn(canvas.width, canvas.height, |x, y| {
        let idx = y as usize * canvas.width as usize + x as usize;
        match states.get(idx) {
            Some(PixelState::Lit) => Luma([0]),
            _ => Luma([255]),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_codec::{Canvas, PackOptions, pack_pixels};

    #[test]
    fn test_preview_matches_source() {
        let canvas = Canvas::new(12, 3);
        let src = GrayImage::from_fn(12, 3, |x, y| Luma([if (x + y) % 3 == 0 { 0 } else { 255 }]));
        let samples: Vec<u8> = src.pixels().map(|p| p.0[0]).collect();
        let packed = pack_pixels(&samples, canvas, &PackOptions::default()).unwrap();

        let preview = render_preview(&packed, Polarity::LitIsOne);
        assert_eq!(preview, src);
    }
}
