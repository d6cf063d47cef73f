use folio_engine::coords::{Rect, Vec2};
use folio_engine::input::Key;
use folio_engine::scene::DrawList;
use folio_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{Modifiers, UiEvent};
use crate::painter::Painter;
use crate::widget::Element;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
///
/// Built from the engine's `InputState` / `InputFrame` each frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Cursor position in logical pixels; `None` while outside the window.
    pub mouse_pos: Option<Vec2>,
    /// `true` for exactly one frame when the primary button is released.
    pub mouse_clicked: bool,
    /// Named keys pressed this frame.
    pub keys_pressed: Vec<Key>,
    pub modifiers: Modifiers,
    /// Accumulated scroll wheel delta this frame (positive = scroll down).
    pub scroll_delta: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
}

impl UiInput {
    /// Events for this frame in routing order.
    pub fn events(&self) -> Vec<UiEvent> {
        let mut out = Vec::with_capacity(self.keys_pressed.len() + 4);
        out.extend(
            self.keys_pressed
                .iter()
                .map(|&key| UiEvent::KeyPress { key, modifiers: self.modifiers }),
        );
        if self.scroll_delta != 0.0 {
            out.push(UiEvent::ScrollWheel { delta: self.scroll_delta });
        }
        match self.mouse_pos {
            Some(pos) => {
                out.push(UiEvent::Hover { pos });
                if self.mouse_clicked {
                    out.push(UiEvent::Click { pos });
                }
            }
            None => out.push(UiEvent::PointerLeft),
        }
        out.push(UiEvent::Tick { dt: self.dt });
        out
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Owns the fonts and the draw list shared across frames.
///
/// The GPU renderer lives in the application and receives the `&mut DrawList`
/// returned by [`frame_ref`](Self::frame_ref).
pub struct UiScene {
    /// Public so the application can split-borrow it alongside `draw_list`.
    pub font_system: FontSystem,
    /// Draw list populated by the most recent frame.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Routes this frame's input through `root`, then paints it.
    ///
    /// Events go first so that hover and scroll changes are visible in the
    /// same frame that produced them.
    #[must_use]
    pub fn frame_ref(
        &mut self,
        root: &mut Element,
        viewport: Vec2,
        input: &UiInput,
    ) -> &mut DrawList {
        self.draw_list.clear();
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        // ── measure ───────────────────────────────────────────────────────
        let ctx = LayoutCtx { fonts: &self.font_system, viewport };
        // The root always fills the viewport; the pass only warms up children.
        let _ = root.measure(Constraints::tight(viewport), &ctx);

        // ── events ────────────────────────────────────────────────────────
        for event in input.events() {
            let _ = root.on_event(&event, rect, &ctx);
        }

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list, &self.font_system, viewport);
            root.paint(&mut painter, rect);
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
