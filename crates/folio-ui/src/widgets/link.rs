use folio_engine::coords::{Rect, Vec2};
use folio_engine::paint::Color;

use crate::anim::{Easing, Transition};
use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::{measure_styled, Painter};
use crate::style::TextStyle;
use crate::widget::Widget;

const HOVER_SECS: f32 = 0.15;
const UNDERLINE_GAP: f32 = 2.0;

/// Inline text link with a hover colour and bottom rule.
///
/// At rest the rule is transparent; on hover both text and rule fade to the
/// hover colour.
pub struct Link {
    label: String,
    href: String,
    style: TextStyle,
    hover_color: Color,
    hovered: bool,
    hover: Transition,
    on_click: Option<Box<dyn FnMut(&str)>>,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>, style: TextStyle) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            style,
            hover_color: style.color,
            hovered: false,
            hover: Transition::new(0.0, HOVER_SECS, Easing::STANDARD),
            on_click: None,
        }
    }

    pub fn hover_color(mut self, color: Color) -> Self {
        self.hover_color = color;
        self
    }

    /// Called with the link's href when it is activated.
    pub fn on_click(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

impl Widget for Link {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let text = measure_styled(ctx.fonts, &self.label, &self.style, None);
        constraints.constrain(Vec2::new(text.x, text.y + UNDERLINE_GAP + 1.0))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let t = self.hover.value();
        let color = self.style.color.lerp(self.hover_color, t);
        painter.text(&self.label, &self.style.color(color), rect.origin, None);

        let rule = Rect::new(rect.origin.x, rect.origin.y + rect.size.y - 1.0, rect.size.x, 1.0);
        painter.fill_rect(rule, self.hover_color.with_opacity(t));
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        match event {
            UiEvent::Hover { pos } => self.hovered = rect.contains(*pos),
            UiEvent::PointerLeft => self.hovered = false,
            UiEvent::Tick { dt } => {
                self.hover.set_target(if self.hovered { 1.0 } else { 0.0 });
                self.hover.advance(*dt);
            }
            UiEvent::Click { pos } if rect.contains(*pos) => {
                if let Some(f) = &mut self.on_click {
                    f(&self.href);
                }
                return EventResult::Consumed;
            }
            _ => {}
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ctx_with;
    use folio_engine::text::{FontId, FontSystem};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn link() -> Link {
        Link::new("Git", "#", TextStyle::new(FontId::default(), 12.0, Color::black()))
            .hover_color(Color::from_hex(0xe11d48))
    }

    #[test]
    fn hover_follows_pointer() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
        let mut l = link();

        l.on_event(&UiEvent::Hover { pos: Vec2::new(5.0, 5.0) }, rect, &ctx);
        assert!(l.is_hovered());
        l.on_event(&UiEvent::Hover { pos: Vec2::new(50.0, 5.0) }, rect, &ctx);
        assert!(!l.is_hovered());
        l.on_event(&UiEvent::Hover { pos: Vec2::new(5.0, 5.0) }, rect, &ctx);
        l.on_event(&UiEvent::PointerLeft, rect, &ctx);
        assert!(!l.is_hovered());
    }

    #[test]
    fn click_inside_reports_href() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let got = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = got.clone();
        let mut l = link().on_click(move |href| sink.borrow_mut().push(href.to_string()));
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0);

        let outside = l.on_event(&UiEvent::Click { pos: Vec2::new(100.0, 0.0) }, rect, &ctx);
        let inside = l.on_event(&UiEvent::Click { pos: Vec2::new(1.0, 1.0) }, rect, &ctx);

        assert_eq!(outside, EventResult::Ignored);
        assert_eq!(inside, EventResult::Consumed);
        assert_eq!(*got.borrow(), ["#"]);
    }

    #[test]
    fn hover_colour_settles_after_transition() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
        let mut l = link();
        l.on_event(&UiEvent::Hover { pos: Vec2::new(1.0, 1.0) }, rect, &ctx);
        l.on_event(&UiEvent::Tick { dt: 1.0 }, rect, &ctx);
        assert_eq!(l.hover.value(), 1.0);
    }
}
