//! Image preparation for the badge panel.
//!
//! Decodes a source raster, reduces it to hard-edged black and white,
//! fits it to the panel canvas and rotates it for the inverted mounting.
//! Also provides the row-major pixel extraction consumed by `panel-codec`.

pub mod extract;
pub mod fit;
pub mod load;
pub mod options;
pub mod preview;
pub mod rotate;
pub mod threshold;

use std::path::PathBuf;

// Re-exports for convenience
pub use extract::{extract_canvas, extract_pixels};
pub use fit::fit_to_canvas;
pub use load::{decode_bilevel, load_bilevel};
pub use options::{FitMode, LoadOptions};
pub use preview::render_preview;
pub use rotate::rotate_180;
pub use threshold::{BILEVEL_THRESHOLD, flatten_alpha, threshold_convert};

/// Errors that can occur while loading a source image.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Image is {actual_w}x{actual_h}, expected canvas {expected}")]
    CanvasMismatch {
        expected: panel_codec::Canvas,
        actual_w: u32,
        actual_h: u32,
    },

    #[error("Image has zero width or height")]
    Empty,
}

/// Result type alias for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;
