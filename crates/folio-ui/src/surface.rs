//! Display-surface notifications.
//!
//! The surface is the page-wide source of pointer-move and scroll
//! notifications. Components register a handler with
//! [`DisplaySurface::subscribe`] and receive a [`Subscription`] guard; dropping
//! the guard deregisters the handler, so a component that owns its guards can
//! never leak a listener past its own lifetime.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

// ── SurfaceEvent ──────────────────────────────────────────────────────────

/// Notification kinds a handler can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceEventKind {
    PointerMove,
    Scroll,
}

/// A notification published by the surface. Coordinates are logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// Pointer position in viewport coordinates.
    PointerMove { x: f32, y: f32 },
    /// Vertical scroll distance of the document from its top.
    Scroll { offset_y: f32 },
}

impl SurfaceEvent {
    #[inline]
    pub fn kind(&self) -> SurfaceEventKind {
        match self {
            SurfaceEvent::PointerMove { .. } => SurfaceEventKind::PointerMove,
            SurfaceEvent::Scroll { .. } => SurfaceEventKind::Scroll,
        }
    }
}

// ── Registry ──────────────────────────────────────────────────────────────

type Handler = Rc<RefCell<dyn FnMut(&SurfaceEvent)>>;

struct Listener {
    id: u64,
    kind: SurfaceEventKind,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

// ── DisplaySurface ────────────────────────────────────────────────────────

/// Cheaply cloneable handle to the page's notification hub.
///
/// Clones share one registry. The hub is single-threaded; delivery is
/// synchronous and in subscription order.
#[derive(Clone, Default)]
pub struct DisplaySurface {
    registry: Rc<RefCell<Registry>>,
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for notifications of `kind`.
    ///
    /// The handler stays registered exactly as long as the returned guard lives.
    #[must_use = "dropping the Subscription deregisters the handler immediately"]
    pub fn subscribe<F>(&self, kind: SurfaceEventKind, handler: F) -> Subscription
    where
        F: FnMut(&SurfaceEvent) + 'static,
    {
        let mut reg = self.registry.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.listeners.push(Listener { id, kind, handler: Rc::new(RefCell::new(handler)) });
        log::trace!("surface: +listener #{id} ({kind:?})");

        Subscription { id, kind, registry: Rc::downgrade(&self.registry) }
    }

    /// Delivers `event` to every handler subscribed to its kind.
    ///
    /// Handlers are snapshotted before delivery, so a handler may subscribe or
    /// drop guards without invalidating the iteration.
    pub fn emit(&self, event: SurfaceEvent) {
        let kind = event.kind();
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .listeners
            .iter()
            .filter(|l| l.kind == kind)
            .map(|l| l.handler.clone())
            .collect();

        for handler in handlers {
            // A handler that re-enters emit for its own kind is skipped rather
            // than aliased.
            if let Ok(mut f) = handler.try_borrow_mut() {
                (*f)(&event);
            }
        }
    }

    /// Number of live handlers for `kind`.
    pub fn listener_count(&self, kind: SurfaceEventKind) -> usize {
        self.registry.borrow().listeners.iter().filter(|l| l.kind == kind).count()
    }
}

// ── Subscription ──────────────────────────────────────────────────────────

/// Guard for one registered handler. Deregisters on drop.
///
/// Holds only a weak reference, so an outstanding guard never keeps a
/// surface alive.
pub struct Subscription {
    id: u64,
    kind: SurfaceEventKind,
    registry: Weak<RefCell<Registry>>,
}

impl Subscription {
    #[inline]
    pub fn kind(&self) -> SurfaceEventKind {
        self.kind
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = {
            let Ok(mut reg) = registry.try_borrow_mut() else {
                log::warn!("surface: registry busy, listener #{} not removed", self.id);
                return;
            };
            let pos = reg.listeners.iter().position(|l| l.id == self.id);
            pos.map(|i| reg.listeners.remove(i))
        };
        // The handler may own further guards; they need the registry unborrowed.
        if removed.is_some() {
            log::trace!("surface: -listener #{} ({:?})", self.id, self.kind);
        }
        drop(removed);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).field("kind", &self.kind).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    // ── delivery ──────────────────────────────────────────────────────────

    #[test]
    fn emit_reaches_only_matching_kind() {
        let surface = DisplaySurface::new();
        let moves = Rc::new(Cell::new(0));
        let scrolls = Rc::new(Cell::new(0));

        let m = moves.clone();
        let _a = surface.subscribe(SurfaceEventKind::PointerMove, move |_| m.set(m.get() + 1));
        let s = scrolls.clone();
        let _b = surface.subscribe(SurfaceEventKind::Scroll, move |_| s.set(s.get() + 1));

        surface.emit(SurfaceEvent::PointerMove { x: 1.0, y: 2.0 });
        surface.emit(SurfaceEvent::PointerMove { x: 3.0, y: 4.0 });
        surface.emit(SurfaceEvent::Scroll { offset_y: 10.0 });

        assert_eq!(moves.get(), 2);
        assert_eq!(scrolls.get(), 1);
    }

    #[test]
    fn clones_share_one_registry() {
        let surface = DisplaySurface::new();
        let other = surface.clone();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let _g = surface.subscribe(SurfaceEventKind::Scroll, move |_| h.set(h.get() + 1));

        other.emit(SurfaceEvent::Scroll { offset_y: 1.0 });
        assert_eq!(hits.get(), 1);
        assert_eq!(other.listener_count(SurfaceEventKind::Scroll), 1);
    }

    // ── deregistration ────────────────────────────────────────────────────

    #[test]
    fn dropping_guard_deregisters() {
        let surface = DisplaySurface::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let guard = surface.subscribe(SurfaceEventKind::PointerMove, move |_| h.set(h.get() + 1));
        assert_eq!(surface.listener_count(SurfaceEventKind::PointerMove), 1);

        drop(guard);
        assert_eq!(surface.listener_count(SurfaceEventKind::PointerMove), 0);

        surface.emit(SurfaceEvent::PointerMove { x: 0.0, y: 0.0 });
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn guard_outliving_surface_is_harmless() {
        let surface = DisplaySurface::new();
        let guard = surface.subscribe(SurfaceEventKind::Scroll, |_| {});
        drop(surface);
        drop(guard);
    }

    #[test]
    fn handler_may_drop_its_own_guard() {
        let surface = DisplaySurface::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let s = slot.clone();
        let guard = surface.subscribe(SurfaceEventKind::Scroll, move |_| {
            s.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(guard);

        surface.emit(SurfaceEvent::Scroll { offset_y: 1.0 });
        assert_eq!(surface.listener_count(SurfaceEventKind::Scroll), 0);
    }
    #[test]
    fn dropping_guard_releases_guards_held_by_its_handler() {
        let surface = DisplaySurface::new();
        let inner = surface.subscribe(SurfaceEventKind::Scroll, |_| {});
        let outer = surface.subscribe(SurfaceEventKind::PointerMove, move |_| {
            let _ = &inner;
        });
        assert_eq!(surface.listener_count(SurfaceEventKind::Scroll), 1);
        assert_eq!(surface.listener_count(SurfaceEventKind::PointerMove), 1);

        drop(outer);
        assert_eq!(surface.listener_count(SurfaceEventKind::PointerMove), 0);
        assert_eq!(surface.listener_count(SurfaceEventKind::Scroll), 0);
    }
}
