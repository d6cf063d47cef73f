use folio_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Chooses between two layouts by window width, like a CSS `min-width`
/// media query.
///
/// Only the active variant is measured, painted and routed events. The
/// inactive one sees `PointerLeft` instead of `Hover`, so it never comes back
/// with a stale hover.
pub struct Responsive {
    min_width: f32,
    narrow: Element,
    wide: Element,
}

impl Responsive {
    /// `wide` applies when the window is at least `min_width` px wide.
    pub fn new(min_width: f32, narrow: impl Into<Element>, wide: impl Into<Element>) -> Self {
        Self { min_width, narrow: narrow.into(), wide: wide.into() }
    }

    #[inline]
    pub fn is_wide(&self, viewport: Vec2) -> bool {
        viewport.x >= self.min_width
    }
}

impl Widget for Responsive {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        if self.is_wide(ctx.viewport) {
            self.wide.measure(constraints, ctx)
        } else {
            self.narrow.measure(constraints, ctx)
        }
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if self.is_wide(painter.viewport()) {
            self.wide.paint(painter, rect)
        } else {
            self.narrow.paint(painter, rect)
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let wide = self.is_wide(ctx.viewport);
        let (active, inactive) = if wide {
            (&mut self.wide, &mut self.narrow)
        } else {
            (&mut self.narrow, &mut self.wide)
        };
        if matches!(event, UiEvent::Hover { .. }) {
            inactive.on_event(&UiEvent::PointerLeft, rect, ctx);
        }
        active.on_event(event, rect, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixed;
    use folio_engine::text::FontSystem;

    #[test]
    fn picks_variant_by_viewport_width() {
        let fonts = FontSystem::new();
        let r = Responsive::new(768.0, Fixed::new(10.0, 10.0), Fixed::new(20.0, 20.0));
        let c = Constraints::unbounded();

        let phone = LayoutCtx { fonts: &fonts, viewport: Vec2::new(390.0, 800.0) };
        let desk = LayoutCtx { fonts: &fonts, viewport: Vec2::new(768.0, 800.0) };
        assert_eq!(r.measure(c, &phone), Vec2::new(10.0, 10.0));
        assert_eq!(r.measure(c, &desk), Vec2::new(20.0, 20.0));
    }
}
