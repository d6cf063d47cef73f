use crate::coords::Vec2;

use super::Color;

/// Two-stop linear gradient in logical pixel space.
///
/// `start` and `end` share the coordinate space of the geometry they fill.
/// Positions before `start` take `from`, positions past `end` take `to`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub from: Color,
    pub to: Color,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self { start, end, from, to }
    }

    /// Returns true when the gradient axis has non-zero length and finite inputs.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.from.is_finite()
            && self.to.is_finite()
            && self.start != self.end
    }
}
