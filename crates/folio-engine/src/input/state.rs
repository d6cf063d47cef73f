use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    Modifiers,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for a single window.
///
/// Holds "is down" information and current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<(f32, f32)>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear "down" sets so nothing stays stuck.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
                frame.pointer_moves.push((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
                frame.pointer_left = true;
            }

            InputEvent::Key { key, state, modifiers, repeat } => {
                self.modifiers = *modifiers;

                match state {
                    KeyState::Pressed => {
                        let inserted = self.keys_down.insert(*key);
                        if inserted || *repeat {
                            frame.keys_pressed.push(*key);
                        }
                    }
                    KeyState::Released => {
                        if self.keys_down.remove(key) {
                            frame.keys_released.insert(*key);
                        }
                    }
                }
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, pos, modifiers }) => {
                if pos.is_some() {
                    self.pointer_pos = *pos;
                }
                self.modifiers = *modifiers;

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    MouseButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }

            InputEvent::MouseWheel { delta, modifiers } => {
                self.modifiers = *modifiers;
                frame.scroll_delta += delta.document_scroll_px();
            }
        }

        frame.push_event(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MouseWheelDelta;

    fn apply(state: &mut InputState, frame: &mut InputFrame, ev: InputEvent) {
        state.apply_event(frame, ev);
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_moves_overwrite_position_and_are_recorded() {
        let (mut s, mut f) = (InputState::default(), InputFrame::default());
        apply(&mut s, &mut f, InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0 }));
        apply(&mut s, &mut f, InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 }));
        assert_eq!(s.pointer_pos, Some((3.0, 4.0)));
        assert_eq!(f.pointer_moves, vec![(1.0, 2.0), (3.0, 4.0)]);
    }

    #[test]
    fn pointer_left_clears_position() {
        let (mut s, mut f) = (InputState::default(), InputFrame::default());
        apply(&mut s, &mut f, InputEvent::PointerMoved(PointerMoveEvent { x: 1.0, y: 2.0 }));
        apply(&mut s, &mut f, InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
        assert!(f.pointer_left);
    }

    #[test]
    fn release_outside_window_keeps_pointer_absent() {
        let (mut s, mut f) = (InputState::default(), InputFrame::default());
        let button = |state, pos| InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            pos,
            modifiers: Modifiers::default(),
        });
        apply(&mut s, &mut f, InputEvent::PointerMoved(PointerMoveEvent { x: 5.0, y: 6.0 }));
        apply(&mut s, &mut f, button(MouseButtonState::Pressed, Some((5.0, 6.0))));
        apply(&mut s, &mut f, InputEvent::PointerLeft);
        apply(&mut s, &mut f, button(MouseButtonState::Released, None));
        assert_eq!(s.pointer_pos, None);
        assert!(!s.buttons_down.contains(&MouseButton::Left));
        assert!(f.buttons_released.contains(&MouseButton::Left));
    }

    // ── wheel ─────────────────────────────────────────────────────────────

    #[test]
    fn wheel_deltas_accumulate_in_pixels() {
        let (mut s, mut f) = (InputState::default(), InputFrame::default());
        let m = Modifiers::default();
        apply(&mut s, &mut f, InputEvent::MouseWheel {
            delta: MouseWheelDelta::Pixel { x: 0.0, y: -10.0 },
            modifiers: m,
        });
        apply(&mut s, &mut f, InputEvent::MouseWheel {
            delta: MouseWheelDelta::Pixel { x: 0.0, y: -5.0 },
            modifiers: m,
        });
        assert_eq!(f.scroll_delta, 15.0);

        f.clear();
        assert_eq!(f.scroll_delta, 0.0);
    }

    // ── keys / buttons ────────────────────────────────────────────────────

    #[test]
    fn repeats_are_reported_as_presses() {
        let (mut s, mut f) = (InputState::default(), InputFrame::default());
        let press = |repeat| InputEvent::Key {
            key: Key::ArrowDown,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat,
        };
        apply(&mut s, &mut f, press(false));
        apply(&mut s, &mut f, press(true));
        assert_eq!(f.keys_pressed, vec![Key::ArrowDown, Key::ArrowDown]);
        assert!(s.keys_down.contains(&Key::ArrowDown));
    }

    #[test]
    fn focus_loss_releases_everything() {
        let (mut s, mut f) = (InputState::default(), InputFrame::default());
        apply(&mut s, &mut f, InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            pos: Some((0.0, 0.0)),
            modifiers: Modifiers::default(),
        }));
        assert!(s.buttons_down.contains(&MouseButton::Left));
        apply(&mut s, &mut f, InputEvent::Focused(false));
        assert!(!s.buttons_down.contains(&MouseButton::Left));
    }
}
