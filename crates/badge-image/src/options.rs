//! Loader configuration.

use panel_codec::Canvas;

/// How a source image that does not match the canvas is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Source must already be canvas-sized.
    #[default]
    Exact,
    /// Scale to fit preserving aspect ratio, then extend to the canvas.
    FitAndPad,
}

/// Configuration for [`crate::load_bilevel`].
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub canvas: Canvas,
    pub fit: FitMode,
    /// Rotate the result 180 degrees (panel mounted upside down).
    pub rotate_180: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            canvas: Canvas::BADGE,
            fit: FitMode::Exact,
            rotate_180: true,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set target canvas.
    pub fn with_canvas(mut self, val: Canvas) -> Self {
        self.canvas = val;
        self
    }

    /// Builder: set fit mode.
    pub fn with_fit(mut self, val: FitMode) -> Self {
        self.fit = val;
        self
    }

    /// Builder: set rotate flag.
    pub fn with_rotate_180(mut self, val: bool) -> Self {
        self.rotate_180 = val;
        self
    }
}
