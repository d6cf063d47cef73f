use folio_engine::coords::{Rect, Vec2};
use folio_engine::paint::Color;
use folio_engine::scene::Border;

use crate::anim::{Easing, Transition};
use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::{measure_styled, Painter};
use crate::style::TextStyle;
use crate::widget::Widget;

const HOVER_SECS: f32 = 0.15;

/// A clickable text label with rest and hover colour schemes.
///
/// Hover is tracked from routed `Hover` events and eased on `Tick`, so the
/// swap between schemes animates like a CSS colour transition.
///
/// # Example
/// ```rust,ignore
/// Button::new("Resume", mono_xs)
///     .border(Border::new(1.0, Color::black()))
///     .hover_colors(Color::black(), Color::white())
///     .padding(Edges::symmetric(12.0, 24.0))
///     .on_click(|| log::info!("resume"))
/// ```
pub struct Button {
    label: String,
    style: TextStyle,
    on_click: Option<Box<dyn FnMut()>>,

    background: Color,
    hover_background: Color,
    hover_text: Color,
    border: Option<Border>,
    corner_radius: f32,
    padding: Edges,

    hovered: bool,
    hover: Transition,
}

impl Button {
    pub fn new(label: impl Into<String>, style: TextStyle) -> Self {
        Self {
            label: label.into(),
            style,
            on_click: None,
            background: Color::transparent(),
            hover_background: Color::transparent(),
            hover_text: style.color,
            border: None,
            corner_radius: 0.0,
            padding: Edges::default(),
            hovered: false,
            hover: Transition::new(0.0, HOVER_SECS, Easing::STANDARD),
        }
    }

    /// Callback invoked when the button is clicked.
    pub fn on_click(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Background and label colour while the pointer is over the button.
    pub fn hover_colors(mut self, background: Color, text: Color) -> Self {
        self.hover_background = background;
        self.hover_text = text;
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn padding_all(mut self, v: f32) -> Self {
        self.padding = Edges::all(v);
        self
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }
}

impl Widget for Button {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let text = measure_styled(ctx.fonts, &self.label, &self.style, None);
        constraints.constrain(Vec2::new(text.x + self.padding.width(), text.y + self.padding.height()))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let t = self.hover.value();
        let bg = self.background.lerp(self.hover_background, t);
        let fg = self.style.color.lerp(self.hover_text, t);

        painter.fill_rounded_rect(rect, self.corner_radius, bg, self.border);
        let inner = self.padding.inset(rect);
        painter.text(&self.label, &self.style.color(fg), inner.origin, None);
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
                    f();
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
    use crate::testing::{ctx_with, paint_cmds};
    use folio_engine::paint::Paint;
    use folio_engine::scene::DrawCmd;
    use folio_engine::text::{FontId, FontSystem};
    use std::cell::Cell;
    use std::rc::Rc;

    fn outlined() -> Button {
        Button::new("Resume", TextStyle::new(FontId::default(), 12.0, Color::black()))
            .border(Border::new(1.0, Color::black()))
            .hover_colors(Color::black(), Color::white())
            .padding(Edges::symmetric(12.0, 24.0))
    }

    #[test]
    fn padding_wraps_label() {
        let fonts = FontSystem::new();
        let size = outlined().measure(Constraints::unbounded(), &ctx_with(&fonts));
        // No font loaded: zero-width label, 1.2 × size line.
        assert_eq!(size.x, 48.0);
        assert!((size.y - (24.0 + 12.0 * 1.2)).abs() < 1e-4);
    }

    #[test]
    fn hover_inverts_colours_once_settled() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let mut b = outlined();

        b.on_event(&UiEvent::Hover { pos: Vec2::new(10.0, 10.0) }, rect, &ctx);
        b.on_event(&UiEvent::Tick { dt: 1.0 }, rect, &ctx);

        let cmds = paint_cmds(&b, rect);
        match &cmds[..] {
            [DrawCmd::RoundedRect(bg), DrawCmd::Text(label)] => {
                assert_eq!(bg.paint, Paint::Solid(Color::black()));
                assert_eq!(label.color, Color::white());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn click_fires_only_inside() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let mut b = outlined().on_click(move || h.set(h.get() + 1));
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);

        b.on_event(&UiEvent::Click { pos: Vec2::new(200.0, 10.0) }, rect, &ctx);
        b.on_event(&UiEvent::Click { pos: Vec2::new(50.0, 10.0) }, rect, &ctx);
        assert_eq!(hits.get(), 1);
    }
}
