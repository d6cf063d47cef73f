use std::cell::Cell;

use folio_engine::coords::{Rect, Vec2};
use folio_engine::input::Key;
use folio_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// A scrollable single-child container.
///
/// Clips its child to the visible viewport and translates it by the current
/// scroll offset. Optionally draws a thin scrollbar on the right edge.
///
/// The child is measured at unbounded height so it can report its natural size;
/// the `ScrollView` itself takes all available height from its parent.
///
/// Every change of the offset (wheel, keys, or a clamp after the window
/// grew) is reported through [`on_scroll`](ScrollView::on_scroll).
///
/// # Example
/// ```rust,ignore
/// ScrollView::new(document)
///     .on_scroll(move |y| surface.emit(SurfaceEvent::Scroll { offset_y: y }))
/// ```
pub struct ScrollView {
    child: Element,
    /// Current scroll offset in logical pixels (>=0, content shifted up by this amount).
    pub scroll_offset: f32,
    /// Pixels scrolled per arrow-key press.
    line_height: f32,
    /// Whether to draw the scrollbar thumb.
    show_scrollbar: bool,
    thumb_color: Color,
    /// Cached content height from the most recent measure/paint pass.
    cached_content_height: Cell<f32>,
    /// Called when the scroll offset changes.
    on_scroll: Option<Box<dyn FnMut(f32)>>,
}

impl ScrollView {
    pub fn new(child: impl Into<Element>) -> Self {
        Self {
            child: child.into(),
            scroll_offset: 0.0,
            line_height: 40.0,
            show_scrollbar: true,
            thumb_color: Color::black().with_opacity(0.25),
            cached_content_height: Cell::new(0.0),
            on_scroll: None,
        }
    }

    pub fn line_height(mut self, v: f32) -> Self {
        self.line_height = v;
        self
    }

    pub fn show_scrollbar(mut self, v: bool) -> Self {
        self.show_scrollbar = v;
        self
    }

    pub fn thumb_color(mut self, color: Color) -> Self {
        self.thumb_color = color;
        self
    }

    pub fn on_scroll(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_scroll = Some(Box::new(f));
        self
    }

    pub fn scroll_to(mut self, offset: f32) -> Self {
        self.scroll_offset = offset.max(0.0);
        self
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn measure_content(&self, viewport_w: f32, ctx: &LayoutCtx) -> Vec2 {
        let c = Constraints::fixed_width(viewport_w);
        self.child.measure(c, ctx)
    }

    fn clamped_offset(&self, content_h: f32, viewport_h: f32) -> f32 {
        let max = (content_h - viewport_h).max(0.0);
        self.scroll_offset.clamp(0.0, max)
    }

    fn content_rect(&self, rect: Rect, content_h: f32) -> Rect {
        let offset = self.clamped_offset(content_h, rect.size.y);
        Rect::new(rect.origin.x, rect.origin.y - offset, rect.size.x, content_h)
    }

    fn scrollbar_thumb(&self, rect: Rect, content_h: f32) -> Option<Rect> {
        if !self.show_scrollbar || content_h <= rect.size.y {
            return None;
        }
        let bar_w: f32 = 6.0;
        let bar_x = rect.origin.x + rect.size.x - bar_w - 2.0;

        // Thumb: proportional to viewport / content ratio
        let ratio = rect.size.y / content_h;
        let thumb_h = (rect.size.y * ratio).max(24.0);
        let offset = self.clamped_offset(content_h, rect.size.y);
        let scroll_range = content_h - rect.size.y;
        let thumb_y = rect.origin.y + (offset / scroll_range) * (rect.size.y - thumb_h);

        Some(Rect::new(bar_x, thumb_y, bar_w, thumb_h))
    }

    fn apply_scroll(&mut self, delta: f32, content_h: f32, viewport_h: f32) {
        let max = (content_h - viewport_h).max(0.0);
        let prev = self.scroll_offset;
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, max);
        if self.scroll_offset != prev {
            if let Some(f) = &mut self.on_scroll {
                f(self.scroll_offset);
            }
        }
    }
}

impl Widget for ScrollView {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let max_w = if constraints.max.x.is_finite() { constraints.max.x } else { 0.0 };
        let content = self.measure_content(max_w, ctx);
        self.cached_content_height.set(content.y);
        let h = if constraints.max.y.is_finite() {
            constraints.max.y
        } else {
            content.y
        };
        Vec2::new(max_w, h)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // Remeasure inside paint so layout is always fresh.
        let ctx = painter.layout_ctx();
        let content_h = self.measure_content(rect.size.x, &ctx).y;
        self.cached_content_height.set(content_h);

        let content_rect = self.content_rect(rect, content_h);

        // Clip child to viewport.
        painter.push_clip(rect);
        self.child.paint(painter, content_rect);
        painter.pop_clip();

        if let Some(thumb) = self.scrollbar_thumb(rect, content_h) {
            painter.fill_rounded_rect(thumb, 3.0, self.thumb_color, None);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let content_h = self.cached_content_height.get();

        match event {
            UiEvent::ScrollWheel { delta } => {
                // Positive delta = scroll down (increase offset to reveal content below).
                self.apply_scroll(*delta, content_h, rect.size.y);
                EventResult::Consumed
            }

            UiEvent::KeyPress { key, .. } => {
                let content_rect = self.content_rect(rect, content_h);
                if self.child.on_event(event, content_rect, ctx) == EventResult::Consumed {
                    return EventResult::Consumed;
                }
                // Child didn't consume it — try keyboard scrolling.
                let page = rect.size.y * 0.9;
                match key {
                    Key::ArrowDown            => self.apply_scroll( self.line_height, content_h, rect.size.y),
                    Key::ArrowUp              => self.apply_scroll(-self.line_height, content_h, rect.size.y),
                    Key::PageDown | Key::Space => self.apply_scroll( page,            content_h, rect.size.y),
                    Key::PageUp               => self.apply_scroll(-page,             content_h, rect.size.y),
                    Key::Home                 => self.apply_scroll(f32::NEG_INFINITY, content_h, rect.size.y),
                    Key::End                  => self.apply_scroll(f32::INFINITY,     content_h, rect.size.y),
                    _ => return EventResult::Ignored,
                }
                EventResult::Consumed
            }

            UiEvent::Hover { pos } if !rect.contains(*pos) => {
                // Content scrolled out of view cannot be under the pointer.
                let content_rect = self.content_rect(rect, content_h);
                self.child.on_event(&UiEvent::PointerLeft, content_rect, ctx)
            }

            UiEvent::Tick { .. } => {
                // The window may have grown past the content: re-clamp and report.
                self.apply_scroll(0.0, content_h, rect.size.y);
                let content_rect = self.content_rect(rect, content_h);
                self.child.on_event(event, content_rect, ctx)
            }

            other => {
                // Route all other events to the child with an offset rect so
                // hit-testing uses content-space coordinates.
                let content_rect = self.content_rect(rect, content_h);
                self.child.on_event(other, content_rect, ctx)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ctx_with, Fixed};
    use folio_engine::input::Modifiers;
    use folio_engine::text::FontSystem;
    use std::rc::Rc;

    const VIEW: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    fn reported() -> (Rc<Cell<Option<f32>>>, impl FnMut(f32) + 'static) {
        let cell = Rc::new(Cell::new(None));
        let c = cell.clone();
        (cell, move |y| c.set(Some(y)))
    }

    fn view(content_h: f32) -> ScrollView {
        ScrollView::new(Fixed::new(800.0, content_h))
    }

    // Scene order: measure runs before events and fills the height cache.
    fn measured(sv: ScrollView, fonts: &FontSystem) -> ScrollView {
        let _ = sv.measure(Constraints::loose(VIEW.size), &ctx_with(fonts));
        sv
    }

    // ── wheel ─────────────────────────────────────────────────────────────

    #[test]
    fn wheel_scrolls_in_pixels_and_reports() {
        let fonts = FontSystem::new();
        let (got, sink) = reported();
        let mut sv = measured(view(2000.0).on_scroll(sink), &fonts);

        sv.on_event(&UiEvent::ScrollWheel { delta: 500.0 }, VIEW, &ctx_with(&fonts));
        assert_eq!(sv.scroll_offset, 500.0);
        assert_eq!(got.get(), Some(500.0));
    }

    #[test]
    fn wheel_clamps_to_content() {
        let fonts = FontSystem::new();
        let mut sv = measured(view(1000.0), &fonts);
        let ctx = ctx_with(&fonts);

        sv.on_event(&UiEvent::ScrollWheel { delta: 5000.0 }, VIEW, &ctx);
        assert_eq!(sv.scroll_offset, 400.0);
        sv.on_event(&UiEvent::ScrollWheel { delta: -5000.0 }, VIEW, &ctx);
        assert_eq!(sv.scroll_offset, 0.0);
    }

    #[test]
    fn unchanged_offset_is_not_reported() {
        let fonts = FontSystem::new();
        let (got, sink) = reported();
        let mut sv = measured(view(300.0).on_scroll(sink), &fonts);

        sv.on_event(&UiEvent::ScrollWheel { delta: 100.0 }, VIEW, &ctx_with(&fonts));
        assert_eq!(got.get(), None);
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn end_and_home_jump() {
        let fonts = FontSystem::new();
        let mut sv = measured(view(2000.0), &fonts);
        let ctx = ctx_with(&fonts);
        let m = Modifiers::default();

        sv.on_event(&UiEvent::KeyPress { key: Key::End, modifiers: m }, VIEW, &ctx);
        assert_eq!(sv.scroll_offset, 1400.0);
        sv.on_event(&UiEvent::KeyPress { key: Key::Home, modifiers: m }, VIEW, &ctx);
        assert_eq!(sv.scroll_offset, 0.0);
    }

    // ── routing ───────────────────────────────────────────────────────────

    #[test]
    fn child_sees_content_shifted_by_offset() {
        let fonts = FontSystem::new();
        let (child, seen) = Fixed::recording(800.0, 2000.0);
        let mut sv = measured(ScrollView::new(child).scroll_to(250.0), &fonts);

        sv.on_event(&UiEvent::Click { pos: Vec2::new(1.0, 1.0) }, VIEW, &ctx_with(&fonts));
        assert_eq!(seen.get(), Some(Rect::new(0.0, -250.0, 800.0, 2000.0)));
    }

    #[test]
    fn tick_reclamps_after_resize() {
        let fonts = FontSystem::new();
        let (got, sink) = reported();
        let mut sv = measured(view(1000.0).scroll_to(400.0).on_scroll(sink), &fonts);

        // Window grew to 900 px tall: at most 100 px of scroll remain.
        let tall = Rect::new(0.0, 0.0, 800.0, 900.0);
        sv.on_event(&UiEvent::Tick { dt: 0.016 }, tall, &ctx_with(&fonts));
        assert_eq!(sv.scroll_offset, 100.0);
        assert_eq!(got.get(), Some(100.0));
    }
}
