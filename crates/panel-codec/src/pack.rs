//! Row-aligned 1bpp packing.

use std::borrow::Cow;

use tracing::debug;

use crate::{
    Canvas, CodecError, PackOptions, PixelState, Polarity, Result, TrailingRow, UNLIT_SAMPLE,
};

/// Packed 1bpp frame ready to be sent to the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuffer {
    canvas: Canvas,
    bytes: Vec<u8>,
}

impl PackedBuffer {
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Packed bytes of row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.canvas.height {
            return None;
        }
        let stride = self.canvas.row_bytes();
        let start = y as usize * stride;
        self.bytes.get(start..start + stride)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Pack one row of samples, 8 per byte, MSB first.
///
/// When the row length is not a multiple of 8 the final byte is filled with
/// unlit bits.
pub fn pack_row(row: &[u8], polarity: Polarity) -> Vec<u8> {
    let pad = polarity.bit(PixelState::Unlit);
    row.chunks(8)
        .map(|chunk| {
            (0..8).fold(0u8, |byte, i| {
                let bit = chunk
                    .get(i)
                    .map_or(pad, |&sample| polarity.bit(PixelState::classify(sample)));
                byte | (bit << (7 - i))
            })
        })
        .collect()
}

/// Pack a row-major pixel sequence into a frame for `canvas`.
pub fn pack_pixels(samples: &[u8], canvas: Canvas, options: &PackOptions) -> Result<PackedBuffer> {
    let width = canvas.width as usize;
    if width == 0 {
        return Err(CodecError::ZeroWidth);
    }

    let remainder = samples.len() % width;
    let samples: Cow<'_, [u8]> = if remainder == 0 {
        Cow::Borrowed(samples)
    } else {
        match options.trailing_row {
            TrailingRow::Reject => {
                return Err(CodecError::ShortTrailingRow {
                    len: samples.len(),
                    width,
                });
            }
            TrailingRow::PadUnlit => {
                debug!(len = samples.len(), width, "Padding short trailing row");
                let mut padded = samples.to_vec();
                padded.resize(samples.len() + width - remainder, UNLIT_SAMPLE);
                Cow::Owned(padded)
            }
        }
    };

    let expected = canvas.pixel_count();
    if samples.len() != expected {
        return Err(CodecError::LengthMismatch {
            expected,
            actual: samples.len(),
        });
    }

    let mut bytes = Vec::with_capacity(canvas.packed_len());
    for row in samples.chunks(width) {
        bytes.extend(pack_row(row, options.polarity));
    }

    debug!(%canvas, bytes = bytes.len(), "Packed pixel sequence");
    Ok(PackedBuffer { canvas, bytes })
}

/// Expand a packed frame back into per-pixel states, dropping padding bits.
pub fn unpack(buffer: &PackedBuffer, polarity: Polarity) -> Vec<PixelState> {
    let canvas = buffer.canvas();
    let mut out = Vec::with_capacity(canvas.pixel_count());
    for y in 0..canvas.height {
        let Some(row) = buffer.row(y) else { break };
        for x in 0..canvas.width as usize {
            let bit = (row[x / 8] >> (7 - x % 8)) & 1;
            out.push(polarity.state(bit));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u8 = 255;
    const BLACK: u8 = 0;

    fn pack_default(samples: &[u8], canvas: Canvas) -> Result<PackedBuffer> {
        pack_pixels(samples, canvas, &PackOptions::default())
    }

    #[test]
    fn test_pack_row_msb_first() {
        let row = [BLACK, WHITE, WHITE, WHITE, WHITE, WHITE, WHITE, WHITE];
        assert_eq!(pack_row(&row, Polarity::LitIsOne), vec![0x80]);
    }

    #[test]
    fn test_pack_row_half_black() {
        let row = [0, 0, 0, 0, 255, 255, 255, 255];
        assert_eq!(pack_row(&row, Polarity::LitIsOne), vec![0xf0]);
    }

    #[test]
    fn test_pack_row_any_positive_is_white() {
        let row = [1, 2, 3, 4, 5, 6, 7, 0];
        assert_eq!(pack_row(&row, Polarity::LitIsOne), vec![0x01]);
    }

    #[test]
    fn test_pack_row_pads_with_unlit() {
        // 10 black samples: second byte has two set bits then padding
        let row = [BLACK; 10];
        assert_eq!(pack_row(&row, Polarity::LitIsOne), vec![0xff, 0xc0]);
        assert_eq!(pack_row(&row, Polarity::LitIsZero), vec![0x00, 0x3f]);
    }

    #[test]
    fn test_end_to_end_8x1() {
        let buf = pack_default(&[0, 0, 0, 0, 255, 255, 255, 255], Canvas::new(8, 1)).unwrap();
        assert_eq!(buf.as_bytes(), &[0xf0]);
    }

    #[test]
    fn test_full_white_badge_frame() {
        let canvas = Canvas::BADGE;
        let buf = pack_default(&vec![WHITE; canvas.pixel_count()], canvas).unwrap();
        assert_eq!(buf.len(), 5808);
        assert!(buf.as_bytes().iter().all(|&b| b == 0x00));
    }

    #[test]
    fn test_full_black_badge_frame() {
        let canvas = Canvas::BADGE;
        let buf = pack_default(&vec![BLACK; canvas.pixel_count()], canvas).unwrap();
        assert_eq!(buf.len(), 5808);
        assert!(buf.as_bytes().iter().all(|&b| b == 0xff));
    }

    #[test]
    fn test_length_is_rows_times_stride() {
        for (w, h) in [(8, 1), (16, 4), (64, 3), (264, 2)] {
            let canvas = Canvas::new(w, h);
            let samples: Vec<u8> = (0..canvas.pixel_count()).map(|i| (i % 3) as u8).collect();
            let buf = pack_default(&samples, canvas).unwrap();
            assert_eq!(buf.len(), (h * w / 8) as usize, "canvas {canvas}");
        }
    }

    #[test]
    fn test_rows_are_independent() {
        // Row 0 all white, row 1 all black
        let mut samples = vec![WHITE; 16];
        samples.extend(vec![BLACK; 16]);
        let buf = pack_default(&samples, Canvas::new(16, 2)).unwrap();
        assert_eq!(buf.row(0), Some(&[0x00, 0x00][..]));
        assert_eq!(buf.row(1), Some(&[0xff, 0xff][..]));
        assert_eq!(buf.row(2), None);
    }

    #[test]
    fn test_non_byte_aligned_width_pads_each_row() {
        let buf = pack_default(&[BLACK; 20], Canvas::new(10, 2)).unwrap();
        assert_eq!(buf.as_bytes(), &[0xff, 0xc0, 0xff, 0xc0]);
    }

    #[test]
    fn test_deterministic() {
        let canvas = Canvas::new(24, 5);
        let samples: Vec<u8> = (0..canvas.pixel_count())
            .map(|i| if (i * 7) % 5 < 2 { 0 } else { 200 })
            .collect();
        let a = pack_default(&samples, canvas).unwrap();
        let b = pack_default(&samples, canvas).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_short_trailing_row_rejected() {
        let err = pack_default(&[WHITE; 12], Canvas::new(8, 2)).unwrap_err();
        assert_eq!(err, CodecError::ShortTrailingRow { len: 12, width: 8 });
    }

    #[test]
    fn test_short_trailing_row_padded() {
        let opts = PackOptions::new().with_trailing_row(TrailingRow::PadUnlit);
        let buf = pack_pixels(&[BLACK; 12], Canvas::new(8, 2), &opts).unwrap();
        assert_eq!(buf.as_bytes(), &[0xff, 0xf0]);
    }

    #[test]
    fn test_row_count_mismatch() {
        let err = pack_default(&[WHITE; 8], Canvas::new(8, 2)).unwrap_err();
        assert_eq!(
            err,
            CodecError::LengthMismatch {
                expected: 16,
                actual: 8
            }
        );
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = pack_default(&[], Canvas::new(0, 4)).unwrap_err();
        assert_eq!(err, CodecError::ZeroWidth);
    }

    #[test]
    fn test_unpack_restores_states() {
        let samples = [0, 255, 0, 255, 255, 0, 0, 9, 0, 7];
        let canvas = Canvas::new(5, 2);
        let buf = pack_default(&samples, canvas).unwrap();
        let states = unpack(&buf, Polarity::LitIsOne);
        let expected: Vec<PixelState> = samples.iter().map(|&s| PixelState::classify(s)).collect();
        assert_eq!(states, expected);
    }
}
