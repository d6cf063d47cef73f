//! Typographic styles shared by text-bearing widgets.

use std::borrow::Cow;

use folio_engine::paint::Color;
use folio_engine::text::FontId;

/// Letter spacing presets in em, matching common type-scale names.
pub mod tracking {
    pub const TIGHTER: f32 = -0.05;
    pub const WIDE: f32 = 0.025;
    pub const WIDEST: f32 = 0.1;
}

/// Font, size, colour and tracking for one run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontId,
    pub size: f32,
    pub color: Color,
    /// Extra advance after every glyph, logical px.
    pub letter_spacing: f32,
    pub uppercase: bool,
}

impl TextStyle {
    pub fn new(font: FontId, size: f32, color: Color) -> Self {
        Self { font, size, color, letter_spacing: 0.0, uppercase: false }
    }

    pub fn size(mut self, size: f32) -> Self {
        // Keep tracking proportional when the size changes.
        if self.size > 0.0 {
            self.letter_spacing *= size / self.size;
        }
        self.size = size;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Letter spacing in em (see [`tracking`]).
    pub fn tracking(mut self, em: f32) -> Self {
        self.letter_spacing = em * self.size;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// The string as it should be laid out with this style.
    pub fn display<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if self.uppercase {
            Cow::Owned(text.to_uppercase())
        } else {
            Cow::Borrowed(text)
        }
    }
}

// ── Shadow ────────────────────────────────────────────────────────────────

/// Drop shadow painted as a soft-edged copy of the shape underneath it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub offset_y: f32,
    pub blur: f32,
    /// Grows (or, negative, shrinks) the shadow shape on every side.
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    /// Faint 1 px lift for cards.
    pub fn small() -> Self {
        Self { offset_y: 1.0, blur: 2.0, spread: 0.0, color: Color::black().with_opacity(0.05) }
    }

    /// Large, diffuse shadow for a raised card.
    pub fn xxl() -> Self {
        Self { offset_y: 25.0, blur: 50.0, spread: -12.0, color: Color::black().with_opacity(0.25) }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.color = self.color.with_opacity(opacity);
        self
    }
}
