//! Packed-bitmap codec for the 264x176 badge panel.
//!
//! Turns a row-major sequence of intensity samples into the 1-bit-per-pixel
//! payload the display agent expects (MSB first, rows back to back).

pub mod canvas;
pub mod options;
pub mod pack;

// Re-exports for convenience
pub use canvas::Canvas;
pub use options::{PackOptions, PixelState, Polarity, TrailingRow};
pub use pack::{PackedBuffer, pack_pixels, pack_row, unpack};

/// Sample value used when a short trailing row is padded.
pub const UNLIT_SAMPLE: u8 = 255;

/// Errors that can occur while packing a pixel sequence.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    #[error("Canvas width must be greater than 0")]
    ZeroWidth,

    #[error("Pixel sequence of length {len} ends with a short row (width {width})")]
    ShortTrailingRow { len: usize, width: usize },

    #[error("Pixel sequence length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
