use folio_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// A block of the page: something that can size itself, draw itself and
/// react to input.
///
/// A frame calls `measure` on the whole tree, routes that frame's events, and
/// only then calls `paint`, so `paint` always sees the state the events left
/// behind.
///
/// ```rust,ignore
/// use folio_ui::prelude::*;
///
/// struct Dot(Color);
///
/// impl Widget for Dot {
///     fn measure(&self, c: Constraints, _: &LayoutCtx) -> Vec2 {
///         c.constrain(Vec2::new(8.0, 8.0))
///     }
///     fn paint(&self, p: &mut Painter, rect: Rect) {
///         p.fill_circle(rect.center(), 4.0, self.0);
///     }
/// }
///
/// Column::new().child(Dot(Color::from_hex(0xe11d48)))
/// ```
pub trait Widget: 'static {
    /// Preferred size within `constraints`. Must be pure: parents measure the
    /// same child more than once per frame.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Draw inside `rect`, the box the parent assigned this frame.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// React to `event` inside `rect` (the same rect `paint` gets).
    ///
    /// Returning `Consumed` stops siblings from seeing the event. Leaves that
    /// don't care about input keep the default.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        EventResult::Ignored
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// Boxed [`Widget`]; what containers store as children. Built with `.into()`.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }

    #[inline]
    pub fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    #[inline]
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.0.paint(painter, rect)
    }

    /// Routes to the wrapped widget. Broadcast events ([`UiEvent::is_broadcast`])
    /// always come back `Ignored`, so one child can never hide a hover or a
    /// tick from its siblings.
    pub fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let result = self.0.on_event(event, rect, ctx);
        if event.is_broadcast() {
            if result.is_consumed() {
                log::trace!("ui: ignoring consume of broadcast {event:?}");
            }
            return EventResult::Ignored;
        }
        result
    }
}

impl<W: Widget> From<W> for Element {
    fn from(w: W) -> Self {
        Self::new(w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::text::FontSystem;

    use crate::testing::ctx_with;

    /// Claims every event it sees.
    struct Greedy;

    impl Widget for Greedy {
        fn measure(&self, _: Constraints, _: &LayoutCtx) -> Vec2 {
            Vec2::zero()
        }
        fn paint(&self, _: &mut Painter, _: Rect) {}
        fn on_event(&mut self, _: &UiEvent, _: Rect, _: &LayoutCtx<'_>) -> EventResult {
            EventResult::Consumed
        }
    }

    #[test]
    fn broadcast_events_cannot_be_consumed() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let mut el: Element = Greedy.into();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        for ev in [
            UiEvent::Hover { pos: Vec2::new(1.0, 1.0) },
            UiEvent::PointerLeft,
            UiEvent::Tick { dt: 0.016 },
        ] {
            assert_eq!(el.on_event(&ev, rect, &ctx), EventResult::Ignored, "{ev:?}");
        }
    }

    #[test]
    fn targeted_events_pass_the_result_through() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let mut el: Element = Greedy.into();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        let click = UiEvent::Click { pos: Vec2::new(1.0, 1.0) };
        assert_eq!(el.on_event(&click, rect, &ctx), EventResult::Consumed);
        let wheel = UiEvent::ScrollWheel { delta: 40.0 };
        assert_eq!(el.on_event(&wheel, rect, &ctx), EventResult::Consumed);
    }
}
