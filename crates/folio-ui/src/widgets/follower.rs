//! Decorative cursor: a dot pinned to the pointer and a ring that grows with
//! the document scroll offset.

use folio_engine::coords::{Rect, Vec2};
use folio_engine::paint::Color;
use folio_engine::scene::CircleCmd;

use crate::anim::{Easing, Transition};
use crate::painter::Painter;
use crate::tracker::{PointerState, ScrollOffset};

/// Ring growth per scrolled pixel.
pub const RING_SCALE_PER_PX: f32 = 0.001;

const DOT_DIAMETER: f32 = 16.0;
const RING_DIAMETER: f32 = 48.0;
const RING_OPACITY: f32 = 0.3;

/// `1 + scroll * k`. Not clamped: a long page grows the ring without bound.
#[inline]
pub fn ring_scale(scroll: ScrollOffset, k: f32) -> f32 {
    1.0 + scroll.0 * k
}

/// Style values derived from the tracker's latest state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerStyle {
    /// Center of the dot; always the pointer position itself.
    pub dot_center: Vec2,
    pub ring_center: Vec2,
    pub ring_scale: f32,
}

impl FollowerStyle {
    pub fn derive(pointer: PointerState, scroll: ScrollOffset, k: f32) -> Self {
        let p = pointer.to_vec2();
        Self { dot_center: p, ring_center: p, ring_scale: ring_scale(scroll, k) }
    }
}

impl Default for FollowerStyle {
    fn default() -> Self {
        Self::derive(PointerState::default(), ScrollOffset::default(), RING_SCALE_PER_PX)
    }
}

/// Paints the follower from the last applied [`FollowerStyle`].
///
/// Position follows the style exactly; only the ring scale eases toward its
/// target (300 ms ease-out).
#[derive(Debug, Clone)]
pub struct CursorFollower {
    style: FollowerStyle,
    ring: Transition,
    color: Color,
}

impl CursorFollower {
    pub fn new(color: Color) -> Self {
        let style = FollowerStyle::default();
        Self { style, ring: Transition::new(style.ring_scale, 0.3, Easing::EASE_OUT), color }
    }

    #[inline]
    pub fn style(&self) -> FollowerStyle {
        self.style
    }

    pub fn apply(&mut self, style: FollowerStyle) {
        self.style = style;
        self.ring.set_target(style.ring_scale);
    }

    pub fn advance(&mut self, dt: f32) {
        self.ring.advance(dt);
    }

    /// Bounds of the dot, centered on the pointer.
    pub fn dot_rect(&self) -> Rect {
        Rect::from_center(self.style.dot_center, Vec2::new(DOT_DIAMETER, DOT_DIAMETER))
    }

    /// Current (eased) ring radius.
    pub fn ring_radius(&self) -> f32 {
        RING_DIAMETER * 0.5 * self.ring.value()
    }

    pub fn paint(&self, painter: &mut Painter) {
        painter.fill_circle(self.style.dot_center, DOT_DIAMETER * 0.5, self.color);
        painter.circle(CircleCmd::ring(
            self.style.ring_center,
            self.ring_radius(),
            1.0,
            self.color.with_opacity(RING_OPACITY),
        ));
    }
}
