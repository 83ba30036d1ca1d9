//! Brush settings chosen through the color and size pickers.

use crate::color::InkColor;
use crate::stroke::StrokeStyle;

/// Default ink color (`#3498db`).
pub const DEFAULT_BRUSH_COLOR: InkColor = InkColor::rgb(0x34, 0x98, 0xdb);
pub const DEFAULT_BRUSH_WIDTH: f64 = 5.0;
pub const MIN_BRUSH_WIDTH: f64 = 1.0;
pub const MAX_BRUSH_WIDTH: f64 = 50.0;
/// Color painted while the eraser is on.
pub const ERASER_COLOR: InkColor = InkColor::white();

/// Clamp a requested brush width into the picker range.
pub fn clamp_brush_width(width: f64) -> f64 {
    if width.is_nan() {
        return DEFAULT_BRUSH_WIDTH;
    }
    width.clamp(MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    color: InkColor,
    width: f64,
    eraser: bool,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(DEFAULT_BRUSH_COLOR, DEFAULT_BRUSH_WIDTH)
    }
}

impl Brush {
    pub fn new(color: InkColor, width: f64) -> Self {
        Self {
            color,
            width: clamp_brush_width(width),
            eraser: false,
        }
    }

    /// The chosen color, independent of eraser mode.
    pub fn color(&self) -> InkColor {
        self.color
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_eraser(&self) -> bool {
        self.eraser
    }

    pub fn set_color(&mut self, color: InkColor) {
        self.color = color;
    }

    /// Set the width, clamped to `[MIN_BRUSH_WIDTH, MAX_BRUSH_WIDTH]`.
    pub fn set_width(&mut self, width: f64) {
        self.width = clamp_brush_width(width);
    }

    /// Flip eraser mode, returning the new state.
    pub fn toggle_eraser(&mut self) -> bool {
        self.eraser = !self.eraser;
        self.eraser
    }

    /// Style new strokes are drawn with.
    pub fn stroke_style(&self) -> StrokeStyle {
        let color = if self.eraser { ERASER_COLOR } else { self.color };
        StrokeStyle::new(color, self.width)
    }
}
