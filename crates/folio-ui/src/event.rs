use folio_engine::coords::Vec2;
use folio_engine::input::Key;

pub use folio_engine::input::Modifiers;

/// Input events routed through the widget tree.
///
/// Routing order within a frame: `KeyPress`, `ScrollWheel`, then exactly one
/// of `Hover` / `PointerLeft`, then `Click`, then `Tick`. Everything is routed
/// before the tree is painted, so a frame always draws the state its own input
/// produced.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Pointer is over the window at `pos` (fired every frame).
    ///
    /// Containers broadcast this to every child; widgets that track hover
    /// return `Ignored` so siblings can clear their own hover state.
    Hover { pos: Vec2 },
    /// Pointer is not over the window this frame.
    PointerLeft,
    /// Primary mouse button pressed and released at `pos`.
    Click { pos: Vec2 },
    /// Named key pressed (navigation keys, Escape).
    KeyPress { key: Key, modifiers: Modifiers },
    /// Mouse wheel / trackpad scroll in logical pixels.
    ///
    /// `delta` > 0 → scroll down (reveal content below); < 0 → scroll up.
    ScrollWheel { delta: f32 },
    /// Frame time advanced by `dt` seconds. Drives transitions.
    Tick { dt: f32 },
}

impl UiEvent {
    /// Events every widget in the tree must see regardless of geometry.
    #[inline]
    pub fn is_broadcast(&self) -> bool {
        matches!(self, UiEvent::Hover { .. } | UiEvent::PointerLeft | UiEvent::Tick { .. })
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled — stop routing to siblings / parents.
    Consumed,
    /// Event was not handled — keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_leave_and_tick_are_broadcast() {
        assert!(UiEvent::Hover { pos: Vec2::zero() }.is_broadcast());
        assert!(UiEvent::PointerLeft.is_broadcast());
        assert!(UiEvent::Tick { dt: 0.016 }.is_broadcast());
        assert!(!UiEvent::Click { pos: Vec2::zero() }.is_broadcast());
        assert!(!UiEvent::ScrollWheel { delta: 1.0 }.is_broadcast());
    }
}
