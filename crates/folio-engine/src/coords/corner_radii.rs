/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow CSS order: top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Radii clamped so no corner exceeds half the shorter side of `size`.
    /// Negative radii become zero.
    #[inline]
    pub fn fitted(self, width: f32, height: f32) -> [f32; 4] {
        let limit = (width.min(height) * 0.5).max(0.0);
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
            .map(|r| r.clamp(0.0, limit))
    }
}
