pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod rounded_rect;
pub(crate) mod text;

use crate::paint::Color;

/// Stroke drawn along the inner edge of a shape.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        Self { width: self.width, color: self.color.with_opacity(opacity) }
    }
}
