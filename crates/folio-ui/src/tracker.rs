//! Pointer and scroll tracking for the page root.

use std::cell::Cell;
use std::rc::Rc;

use folio_engine::coords::Vec2;

use crate::surface::{DisplaySurface, Subscription, SurfaceEvent, SurfaceEventKind};

/// Last known pointer position in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Last known vertical scroll distance in logical pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ScrollOffset(pub f32);

#[derive(Debug, Default)]
struct Shared {
    pointer: Cell<PointerState>,
    scroll: Cell<ScrollOffset>,
    revision: Cell<u64>,
}

impl Shared {
    fn bump(&self) {
        self.revision.set(self.revision.get().wrapping_add(1));
    }
}

/// Republishes the surface's pointer-move and scroll notifications as plain
/// values.
///
/// Every notification overwrites the stored value (no history, last event
/// wins) and bumps [`revision`](Self::revision), which dependents compare to
/// know they must re-derive. Both subscriptions are held for exactly as long
/// as the tracker is mounted; dropping the tracker unmounts it.
#[derive(Debug, Default)]
pub struct PointerTracker {
    shared: Rc<Shared>,
    subscriptions: Vec<Subscription>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to pointer-move and scroll notifications on `surface`.
    ///
    /// Mounting an already mounted tracker moves it to `surface`.
    pub fn mount(&mut self, surface: &DisplaySurface) {
        if self.is_mounted() {
            self.unmount();
        }

        let shared = self.shared.clone();
        let pointer = surface.subscribe(SurfaceEventKind::PointerMove, move |event| {
            if let SurfaceEvent::PointerMove { x, y } = *event {
                shared.pointer.set(PointerState { x, y });
                shared.bump();
            }
        });

        let shared = self.shared.clone();
        let scroll = surface.subscribe(SurfaceEventKind::Scroll, move |event| {
            if let SurfaceEvent::Scroll { offset_y } = *event {
                shared.scroll.set(ScrollOffset(offset_y));
                shared.bump();
            }
        });

        self.subscriptions = vec![pointer, scroll];
        log::debug!("pointer tracker mounted");
    }

    /// Releases both subscriptions. The last published values stay readable.
    pub fn unmount(&mut self) {
        if self.subscriptions.is_empty() {
            return;
        }
        self.subscriptions.clear();
        log::debug!("pointer tracker unmounted");
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        !self.subscriptions.is_empty()
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.shared.pointer.get()
    }

    #[inline]
    pub fn scroll_offset(&self) -> ScrollOffset {
        self.shared.scroll.get()
    }

    /// Number of notifications received so far.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.shared.revision.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── updates ───────────────────────────────────────────────────────────

    #[test]
    fn starts_at_origin_and_unscrolled() {
        let t = PointerTracker::new();
        assert_eq!(t.pointer(), PointerState { x: 0.0, y: 0.0 });
        assert_eq!(t.scroll_offset(), ScrollOffset(0.0));
        assert!(!t.is_mounted());
    }

    #[test]
    fn last_event_wins() {
        let surface = DisplaySurface::new();
        let mut t = PointerTracker::new();
        t.mount(&surface);

        surface.emit(SurfaceEvent::PointerMove { x: 10.0, y: 20.0 });
        surface.emit(SurfaceEvent::PointerMove { x: 123.5, y: 7.25 });
        surface.emit(SurfaceEvent::Scroll { offset_y: 40.0 });
        surface.emit(SurfaceEvent::Scroll { offset_y: 500.0 });

        assert_eq!(t.pointer(), PointerState { x: 123.5, y: 7.25 });
        assert_eq!(t.scroll_offset(), ScrollOffset(500.0));
        assert_eq!(t.revision(), 4);
    }

    #[test]
    fn unmounted_tracker_ignores_the_surface() {
        let surface = DisplaySurface::new();
        let t = PointerTracker::new();
        surface.emit(SurfaceEvent::PointerMove { x: 1.0, y: 1.0 });
        assert_eq!(t.revision(), 0);
    }

    // ── teardown ──────────────────────────────────────────────────────────

    #[test]
    fn unmount_removes_both_subscriptions() {
        let surface = DisplaySurface::new();
        let mut t = PointerTracker::new();
        t.mount(&surface);
        assert_eq!(surface.listener_count(SurfaceEventKind::PointerMove), 1);
        assert_eq!(surface.listener_count(SurfaceEventKind::Scroll), 1);

        t.unmount();
        assert!(!t.is_mounted());
        assert_eq!(surface.listener_count(SurfaceEventKind::PointerMove), 0);
        assert_eq!(surface.listener_count(SurfaceEventKind::Scroll), 0);
    }

    #[test]
    fn no_updates_after_unmount() {
        let surface = DisplaySurface::new();
        let mut t = PointerTracker::new();
        t.mount(&surface);
        surface.emit(SurfaceEvent::PointerMove { x: 5.0, y: 6.0 });
        t.unmount();

        surface.emit(SurfaceEvent::PointerMove { x: 99.0, y: 99.0 });
        surface.emit(SurfaceEvent::Scroll { offset_y: 300.0 });

        assert_eq!(t.pointer(), PointerState { x: 5.0, y: 6.0 });
        assert_eq!(t.scroll_offset(), ScrollOffset(0.0));
        assert_eq!(t.revision(), 1);
    }

    #[test]
    fn dropping_tracker_deregisters() {
        let surface = DisplaySurface::new();
        {
            let mut t = PointerTracker::new();
            t.mount(&surface);
        }
        assert_eq!(surface.listener_count(SurfaceEventKind::PointerMove), 0);
        assert_eq!(surface.listener_count(SurfaceEventKind::Scroll), 0);
    }

    #[test]
    fn remount_does_not_double_subscribe() {
        let surface = DisplaySurface::new();
        let mut t = PointerTracker::new();
        t.mount(&surface);
        t.mount(&surface);
        assert_eq!(surface.listener_count(SurfaceEventKind::PointerMove), 1);

        surface.emit(SurfaceEvent::Scroll { offset_y: 1.0 });
        assert_eq!(t.revision(), 1);
    }
}
