//! Pixel classification and packing options.
//!
//! The panel treats a set bit as a lit (black) pixel. That is the inverse of
//! the usual "non-zero means bright" reading of an intensity sample, so the
//! mapping goes through [`PixelState`] rather than a bare comparison.

/// Rendered state of a single panel pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelState {
    /// Black on the panel.
    Lit,
    /// White on the panel.
    Unlit,
}

impl PixelState {
    /// Classify an intensity sample. Anything brighter than zero renders white.
    pub fn classify(sample: u8) -> Self {
        if sample > 0 {
            PixelState::Unlit
        } else {
            PixelState::Lit
        }
    }
}

/// Bit value written for a lit pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Lit = 1, unlit = 0. What the badge agent expects.
    #[default]
    LitIsOne,
    /// Lit = 0, unlit = 1.
    LitIsZero,
}

impl Polarity {
    /// Bit value (0 or 1) encoding `state`.
    pub fn bit(self, state: PixelState) -> u8 {
        match (self, state) {
            (Polarity::LitIsOne, PixelState::Lit) | (Polarity::LitIsZero, PixelState::Unlit) => 1,
            _ => 0,
        }
    }

    /// Inverse of [`Polarity::bit`].
    pub fn state(self, bit: u8) -> PixelState {
        match (self, bit != 0) {
            (Polarity::LitIsOne, true) | (Polarity::LitIsZero, false) => PixelState::Lit,
            _ => PixelState::Unlit,
        }
    }
}

/// What to do with a pixel sequence whose length is not a multiple of the row width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingRow {
    /// Fail with [`crate::CodecError::ShortTrailingRow`].
    #[default]
    Reject,
    /// Fill the final row with unlit samples.
    PadUnlit,
}

/// Options controlling [`crate::pack_pixels`].
#[derive(Debug, Clone, Default)]
pub struct PackOptions {
    pub polarity: Polarity,
    pub trailing_row: TrailingRow,
}

impl PackOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set bit polarity.
    pub fn with_polarity(mut self, val: Polarity) -> Self {
        self.polarity = val;
        self
    }

    /// Builder: set trailing-row policy.
    pub fn with_trailing_row(mut self, val: TrailingRow) -> Self {
        self.trailing_row = val;
        self
    }
}
