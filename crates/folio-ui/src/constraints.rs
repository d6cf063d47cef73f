use folio_engine::coords::{Rect, Vec2};
use folio_engine::text::FontSystem;

// ── Edges ─────────────────────────────────────────────────────────────────

/// Per-side spacing in logical px, clockwise from the top like CSS `padding`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub const fn all(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// `padding: <vertical> <horizontal>`.
    #[inline]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    #[inline]
    pub const fn horizontal(v: f32) -> Self {
        Self::new(0.0, v, 0.0, v)
    }

    #[inline]
    pub const fn top(v: f32) -> Self {
        Self::new(v, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn bottom(v: f32) -> Self {
        Self::new(0.0, 0.0, v, 0.0)
    }

    /// Space taken out of a box's width.
    #[inline]
    pub fn width(self) -> f32 {
        self.left + self.right
    }

    /// Space taken out of a box's height.
    #[inline]
    pub fn height(self) -> f32 {
        self.top + self.bottom
    }

    /// The content box left inside `rect`. Never negative.
    pub fn inset(self, rect: Rect) -> Rect {
        let origin = rect.origin + Vec2::new(self.left, self.top);
        let w = (rect.size.x - self.width()).max(0.0);
        let h = (rect.size.y - self.height()).max(0.0);
        Rect::new(origin.x, origin.y, w, h)
    }
}

// ── Constraints ───────────────────────────────────────────────────────────

/// Size range a parent offers a child during `measure`.
///
/// Page blocks are laid out at a known width with open-ended height, so most
/// constraints in practice come from [`Constraints::fixed_width`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    #[inline]
    pub fn unbounded() -> Self {
        Self::loose(Vec2::new(f32::INFINITY, f32::INFINITY))
    }

    /// Width pinned to `width`, any height.
    #[inline]
    pub fn fixed_width(width: f32) -> Self {
        Self { min: Vec2::new(width, 0.0), max: Vec2::new(width, f32::INFINITY) }
    }

    /// Bring a child's answer back into range. `max` wins when the two cross.
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        let axis = |v: f32, lo: f32, hi: f32| v.max(lo).min(hi);
        Vec2::new(
            axis(size.x, self.min.x, self.max.x),
            axis(size.y, self.min.y, self.max.y),
        )
    }

    /// What is left for the content once `edges` are taken off. Drops `min`.
    #[must_use]
    pub fn shrink(self, edges: Edges) -> Self {
        let room = |max: f32, used: f32| (max - used).max(0.0);
        Self::loose(Vec2::new(
            room(self.max.x, edges.width()),
            room(self.max.y, edges.height()),
        ))
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Shared read-only state for `measure` and `on_event`: the loaded faces for
/// text metrics and the window size that responsive blocks switch on.
#[derive(Clone, Copy)]
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
    /// Window size in logical px.
    pub viewport: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_padding() -> Edges {
        Edges::new(24.0, 32.0, 24.0, 32.0)
    }

    #[test]
    fn constrain_pulls_sizes_into_range() {
        let c = Constraints { min: Vec2::new(120.0, 40.0), max: Vec2::new(640.0, 480.0) };
        assert_eq!(c.constrain(Vec2::new(10.0, 10.0)), Vec2::new(120.0, 40.0));
        assert_eq!(c.constrain(Vec2::new(900.0, 900.0)), Vec2::new(640.0, 480.0));
        assert_eq!(c.constrain(Vec2::new(300.0, 200.0)), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn constrain_prefers_max_when_range_is_inverted() {
        let c = Constraints { min: Vec2::new(50.0, 50.0), max: Vec2::new(10.0, 10.0) };
        assert_eq!(c.constrain(Vec2::new(30.0, 30.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn fixed_width_leaves_height_open() {
        let c = Constraints::fixed_width(720.0);
        assert_eq!(c.constrain(Vec2::new(10.0, 4000.0)), Vec2::new(720.0, 4000.0));
    }

    #[test]
    fn shrink_takes_off_padding_and_drops_min() {
        let s = Constraints::tight(Vec2::new(400.0, 300.0)).shrink(card_padding());
        assert_eq!(s.min, Vec2::zero());
        assert_eq!(s.max, Vec2::new(336.0, 252.0));

        let tiny = Constraints::loose(Vec2::new(20.0, 20.0)).shrink(card_padding());
        assert_eq!(tiny.max, Vec2::zero());
    }

    #[test]
    fn shrink_keeps_infinite_height_infinite() {
        let s = Constraints::fixed_width(400.0).shrink(card_padding());
        assert_eq!(s.max.x, 336.0);
        assert!(s.max.y.is_infinite());
    }

    #[test]
    fn edge_totals() {
        let e = Edges::symmetric(6.0, 14.0);
        assert_eq!((e.width(), e.height()), (28.0, 12.0));
        assert_eq!(Edges::horizontal(8.0).height(), 0.0);
        assert_eq!(Edges::top(5.0), Edges::new(5.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn inset_offsets_origin_and_shrinks_size() {
        let inner = card_padding().inset(Rect::new(100.0, 50.0, 400.0, 300.0));
        assert_eq!(inner, Rect::new(132.0, 74.0, 336.0, 252.0));
    }

    #[test]
    fn inset_never_goes_negative() {
        let inner = Edges::new(2.0, 3.0, 40.0, 50.0).inset(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(inner.origin, Vec2::new(50.0, 2.0));
        assert_eq!(inner.size, Vec2::zero());
    }
}
