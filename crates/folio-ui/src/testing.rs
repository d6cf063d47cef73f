//! Shared fixtures for widget tests.

use std::cell::Cell;
use std::rc::Rc;

use folio_engine::coords::{Rect, Vec2};
use folio_engine::scene::{DrawCmd, DrawList};
use folio_engine::text::FontSystem;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

pub(crate) const DESKTOP: Vec2 = Vec2::new(1280.0, 800.0);

pub(crate) fn ctx_with(fonts: &FontSystem) -> LayoutCtx<'_> {
    LayoutCtx { fonts, viewport: DESKTOP }
}

/// Paints `widget` into `rect` and returns the commands in paint order.
pub(crate) fn paint_cmds<W: Widget>(widget: &W, rect: Rect) -> Vec<DrawCmd> {
    let fonts = FontSystem::new();
    let mut list = DrawList::new();
    {
        let mut painter = Painter::new(&mut list, &fonts, DESKTOP);
        widget.paint(&mut painter, rect);
    }
    let order = list.indices_in_paint_order().to_vec();
    order.into_iter().map(|i| list.items()[i].cmd.clone()).collect()
}

/// Fixed-size leaf that remembers the rect it was last routed an event in.
pub(crate) struct Fixed {
    size: Vec2,
    seen: Rc<Cell<Option<Rect>>>,
}

impl Fixed {
    pub(crate) fn new(w: f32, h: f32) -> Self {
        Self { size: Vec2::new(w, h), seen: Rc::new(Cell::new(None)) }
    }

    pub(crate) fn recording(w: f32, h: f32) -> (Self, Rc<Cell<Option<Rect>>>) {
        let f = Self::new(w, h);
        let seen = f.seen.clone();
        (f, seen)
    }
}

impl Widget for Fixed {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(self.size)
    }

    fn paint(&self, _painter: &mut Painter, _rect: Rect) {}

    fn on_event(&mut self, _event: &UiEvent, rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        self.seen.set(Some(rect));
        EventResult::Ignored
    }
}
