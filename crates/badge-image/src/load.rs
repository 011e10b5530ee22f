//! Source image loading.
//!
//! decode -> flatten alpha -> grayscale -> threshold -> fit -> rotate.
//! Any failure aborts; there is no partially prepared output.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GrayImage, ImageReader};
use tracing::{debug, info};

use crate::{
    BILEVEL_THRESHOLD, FitMode, ImageError, LoadOptions, Result, fit_to_canvas, flatten_alpha,
    rotate_180, threshold_convert,
};

/// Load an image file and prepare it for the panel.
///
/// The format is sniffed from the file contents, falling back to the extension.
pub fn load_bilevel(path: impl AsRef<Path>, opts: &LoadOptions) -> Result<GrayImage> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading source image");

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| ImageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    prepare(reader.decode()?, opts)
}

/// Same as [`load_bilevel`] for an already-read file.
pub fn decode_bilevel(bytes: &[u8], opts: &LoadOptions) -> Result<GrayImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(image::ImageError::from)?;
    prepare(reader.decode()?, opts)
}

fn prepare(decoded: DynamicImage, opts: &LoadOptions) -> Result<GrayImage> {
    let (w, h) = (decoded.width(), decoded.height());
    if w == 0 || h == 0 {
        return Err(ImageError::Empty);
    }
    debug!(w, h, color = ?decoded.color(), "Decoded source image");

    let gray = flatten_alpha(decoded).into_luma8();
    let bilevel = threshold_convert(&gray, BILEVEL_THRESHOLD);

    let fitted = match opts.fit {
        FitMode::Exact => {
            if (w, h) != opts.canvas.dimensions() {
                return Err(ImageError::CanvasMismatch {
                    expected: opts.canvas,
                    actual_w: w,
                    actual_h: h,
                });
            }
            bilevel
        }
        FitMode::FitAndPad => fit_to_canvas(&bilevel, opts.canvas),
    };

    if opts.rotate_180 {
        Ok(rotate_180(&fitted))
    } else {
        Ok(fitted)
    }
}
