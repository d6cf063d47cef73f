use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};
use crate::text::FontId;

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the text block in logical pixels.
    pub origin: Vec2,
    /// Wrapping width in logical pixels. `None` = no wrapping.
    pub max_width: Option<f32>,
    /// Extra advance added after every glyph, in logical pixels.
    pub letter_spacing: f32,
}

impl TextCmd {
    pub fn new(text: impl Into<String>, font: FontId, size: f32, color: Color, origin: Vec2) -> Self {
        Self {
            text: text.into(),
            font,
            size,
            color,
            origin,
            max_width: None,
            letter_spacing: 0.0,
        }
    }

    pub fn max_width(mut self, width: Option<f32>) -> Self {
        self.max_width = width;
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }
}

impl DrawList {
    /// Records a text draw command.
    #[inline]
    pub fn push_text(&mut self, z: ZIndex, cmd: TextCmd) {
        self.push(z, cmd.into());
    }
}
