//! Paint model shared between UI and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, linear gradient, procedural pattern)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod pattern;

pub use color::Color;
pub use gradient::LinearGradient;
pub use pattern::{Highlight, Pattern, PatternKind};

/// Paint source for filling geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    Pattern(Pattern),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Returns the paint faded by `opacity`.
    pub fn with_opacity(self, opacity: f32) -> Self {
        match self {
            Paint::Solid(c) => Paint::Solid(c.with_opacity(opacity)),
            Paint::LinearGradient(mut g) => {
                g.from = g.from.with_opacity(opacity);
                g.to = g.to.with_opacity(opacity);
                Paint::LinearGradient(g)
            }
            Paint::Pattern(p) => Paint::Pattern(p.with_opacity(opacity)),
        }
    }

    /// True when nothing would be drawn.
    pub fn is_invisible(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a <= 0.0,
            Paint::LinearGradient(g) => g.from.a <= 0.0 && g.to.a <= 0.0,
            Paint::Pattern(p) => {
                p.base.a <= 0.0 && p.ink.a <= 0.0 && p.highlight.is_none_or(|h| h.color.a <= 0.0)
            }
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::Solid(c)
    }
}

impl From<Pattern> for Paint {
    fn from(p: Pattern) -> Self {
        Paint::Pattern(p)
    }
}
