use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` centered on `center`.
    #[inline]
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size * 0.5, size)
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Flips negative extents so width/height are non-negative.
    #[inline]
    pub fn normalized(self) -> Self {
        let (x, w) = if self.size.x < 0.0 {
            (self.origin.x + self.size.x, -self.size.x)
        } else {
            (self.origin.x, self.size.x)
        };
        let (y, h) = if self.size.y < 0.0 {
            (self.origin.y + self.size.y, -self.size.y)
        } else {
            (self.origin.y, self.size.y)
        };
        Rect::new(x, y, w, h)
    }

    /// Half-open containment: [min, max).
    ///
    /// Hover hit-testing relies on this: a pointer resting on the shared edge of
    /// two adjacent cards belongs to exactly one of them.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let max = r.max();
        p.x >= r.origin.x && p.y >= r.origin.y && p.x < max.x && p.y < max.y
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let a = self.normalized();
        let b = other.normalized();

        let min = Vec2::new(a.origin.x.max(b.origin.x), a.origin.y.max(b.origin.y));
        let max = Vec2::new(a.max().x.min(b.max().x), a.max().y.min(b.max().y));
        let size = max - min;

        if size.x <= 0.0 || size.y <= 0.0 {
            None
        } else {
            Some(Rect::from_origin_size(min, size))
        }
    }

    /// Returns the rectangle moved by `delta`.
    #[inline]
    pub fn translated(self, delta: Vec2) -> Self {
        Self::from_origin_size(self.origin + delta, self.size)
    }

    /// Returns the rectangle scaled by `factor` around its own center.
    ///
    /// Used for hover "zoom" effects where the content grows in place.
    #[inline]
    pub fn scaled_about_center(self, factor: f32) -> Self {
        Self::from_center(self.center(), self.size * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_flips_both_axes() {
        let n = r(10.0, 10.0, -4.0, -6.0).normalized();
        assert_eq!(n, r(6.0, 4.0, 4.0, 6.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_is_half_open() {
        let card = r(0.0, 0.0, 10.0, 10.0);
        assert!(card.contains(Vec2::new(0.0, 0.0)));
        assert!(card.contains(Vec2::new(9.99, 9.99)));
        assert!(!card.contains(Vec2::new(10.0, 5.0)));
        assert!(!card.contains(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn adjacent_rects_never_both_contain_the_edge() {
        let left = r(0.0, 0.0, 10.0, 10.0);
        let right = r(10.0, 0.0, 10.0, 10.0);
        let p = Vec2::new(10.0, 5.0);
        assert!(!left.contains(p));
        assert!(right.contains(p));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let i = r(0.0, 0.0, 10.0, 10.0).intersect(r(5.0, 5.0, 10.0, 10.0));
        assert_eq!(i, Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0.0, 0.0, 10.0, 10.0).intersect(r(10.0, 0.0, 10.0, 10.0)).is_none());
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn scaled_about_center_keeps_center() {
        let card = r(100.0, 50.0, 200.0, 400.0);
        let grown = card.scaled_about_center(1.1);
        assert_eq!(grown.center(), card.center());
        assert!((grown.size.x - 220.0).abs() < 1e-3);
        assert!((grown.size.y - 440.0).abs() < 1e-3);
    }

    #[test]
    fn translated_moves_origin_only() {
        let moved = r(1.0, 2.0, 3.0, 4.0).translated(Vec2::new(0.0, 16.0));
        assert_eq!(moved, r(1.0, 18.0, 3.0, 4.0));
    }
}
