//! Fixed-duration value transitions.
//!
//! Widgets keep a [`Transition`] per animated property. Each frame the widget
//! sets the target from its pure render description, then advances the
//! transition by the frame delta on [`UiEvent::Tick`](crate::event::UiEvent::Tick).
//! Retargeting mid-flight restarts from the current value, like a CSS
//! transition interrupted by a state change.

/// Timing curve, as a CSS `cubic-bezier(x1, y1, x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Easing {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl Easing {
    pub const LINEAR: Easing = Easing::cubic_bezier(0.0, 0.0, 1.0, 1.0);
    /// Default curve for `transition-*` utilities.
    pub const STANDARD: Easing = Easing::cubic_bezier(0.4, 0.0, 0.2, 1.0);
    pub const EASE_OUT: Easing = Easing::cubic_bezier(0.0, 0.0, 0.2, 1.0);

    pub const fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Eased progress for linear progress `t` in `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let s = self.solve_x(t);
        bezier(self.y1, self.y2, s)
    }

    // Bisection on the x curve; monotonic for x1, x2 in [0, 1].
    fn solve_x(self, x: f32) -> f32 {
        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        let mut s = x;
        for _ in 0..24 {
            let bx = bezier(self.x1, self.x2, s);
            if (bx - x).abs() < 1e-5 {
                break;
            }
            if bx < x {
                lo = s;
            } else {
                hi = s;
            }
            s = 0.5 * (lo + hi);
        }
        s
    }
}

#[inline]
fn bezier(p1: f32, p2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

// ── Transition ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
    easing: Easing,
}

impl Transition {
    /// A settled transition at `value`. `duration` is in seconds.
    pub fn new(value: f32, duration: f32, easing: Easing) -> Self {
        Self { from: value, to: value, elapsed: duration, duration: duration.max(0.0), easing }
    }

    /// Current interpolated value.
    pub fn value(&self) -> f32 {
        if self.is_settled() {
            return self.to;
        }
        let t = self.easing.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    /// Value the transition is heading to.
    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Heads toward `target`. A no-op when it is already the target.
    pub fn set_target(&mut self, target: f32) {
        if target == self.to {
            return;
        }
        self.from = self.value();
        self.to = target;
        self.elapsed = 0.0;
    }

    /// Jumps to `value` with no animation.
    pub fn snap(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.elapsed = self.duration;
    }

    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
    }
}
