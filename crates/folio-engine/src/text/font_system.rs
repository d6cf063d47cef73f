use std::fmt;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
///
/// The default handle names the first font loaded.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// A glyph positioned by [`FontSystem::place_glyphs`], in the coordinate space
/// the layout was run in (physical pixels when `scale != 1`).
#[derive(Debug, Copy, Clone)]
pub struct PlacedGlyph {
    pub key: GlyphRasterConfig,
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
    /// Pen position after this glyph, used for measurement.
    pub pen_end: f32,
    pub visible: bool,
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the application
/// and handed to the scene renderer each frame so new glyphs can be
/// rasterized on demand.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("FontSystem: loaded font #{} ({} glyphs)", id.0, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    /// Returns a reference to the underlying `fontdue::Font`, if `id` is valid.
    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Lays out `text` at `size * scale` starting at `origin * scale`.
    ///
    /// `letter_spacing` (logical px) is added after every glyph of a line;
    /// wrapping is computed without it, which is fine for the short tracked
    /// labels it is used on.
    #[allow(clippy::too_many_arguments)]
    pub fn place_glyphs(
        &self,
        layout: &mut Layout<()>,
        text: &str,
        id: FontId,
        size: f32,
        origin: Vec2,
        max_width: Option<f32>,
        letter_spacing: f32,
        scale: f32,
    ) -> Vec<PlacedGlyph> {
        let Some(font) = self.get(id) else {
            return Vec::new();
        };

        let scale = scale.max(0.01);
        let phys_size = size * scale;
        let spacing = letter_spacing * scale;

        layout.reset(&LayoutSettings {
            x: origin.x * scale,
            y: origin.y * scale,
            max_width: max_width.map(|w| w * scale),
            ..LayoutSettings::default()
        });
        layout.append(&[font], &TextStyle::new(text, phys_size, 0));

        let mut line_of = vec![0usize; layout.glyphs().len()];
        if let Some(lines) = layout.lines() {
            for line in lines {
                for (n, slot) in line_of
                    .iter_mut()
                    .enumerate()
                    .take(line.glyph_end + 1)
                    .skip(line.glyph_start)
                {
                    *slot = n - line.glyph_start;
                }
            }
        }

        layout
            .glyphs()
            .iter()
            .zip(line_of)
            .map(|(g, column)| {
                let m = font.metrics_indexed(g.key.glyph_index, phys_size);
                let shift = spacing * column as f32;
                PlacedGlyph {
                    key: g.key,
                    x: g.x + shift,
                    y: g.y,
                    width: g.width,
                    height: g.height,
                    pen_end: (g.x - m.xmin as f32 + m.advance_width + shift + spacing).max(0.0),
                    visible: g.char_data.rasterize() && g.width > 0 && g.height > 0,
                }
            })
            .collect()
    }

    /// Computes the bounding box of a laid-out text string.
    ///
    /// Returns `(width, height)` in logical pixels. Used by the UI layer for
    /// layout without needing direct access to `fontdue::Font`.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32, max_width: Option<f32>) -> Vec2 {
        self.measure_text_spaced(text, id, size, max_width, 0.0)
    }

    /// Like [`measure_text`] with extra per-glyph advance.
    #[must_use]
    pub fn measure_text_spaced(
        &self,
        text: &str,
        id: FontId,
        size: f32,
        max_width: Option<f32>,
        letter_spacing: f32,
    ) -> Vec2 {
        let empty = Vec2::new(0.0, size * 1.2);
        if self.get(id).is_none() || text.is_empty() {
            return empty;
        }

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        let glyphs = self.place_glyphs(
            &mut layout,
            text,
            id,
            size,
            Vec2::zero(),
            max_width,
            letter_spacing,
            1.0,
        );
        if glyphs.is_empty() {
            return empty;
        }

        // Pen extent rather than bitmap extent: fontdue's wrap check compares
        // advances, so a measured width fed back as `max_width` must not wrap.
        let w = glyphs.iter().map(|g| g.pen_end).fold(0.0f32, f32::max);
        let h = layout.height().max(size);
        Vec2::new(w, h)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_with_unknown_font_falls_back_to_line_height() {
        let fonts = FontSystem::new();
        let size = fonts.measure_text("hello", FontId(3), 10.0, None);
        assert_eq!(size, Vec2::new(0.0, 12.0));
    }

    #[test]
    fn load_font_rejects_garbage() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"not a font").is_err());
        assert!(fonts.get(FontId(0)).is_none());
    }

    #[test]
    fn place_glyphs_without_font_is_empty() {
        let fonts = FontSystem::new();
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        let glyphs =
            fonts.place_glyphs(&mut layout, "abc", FontId(0), 12.0, Vec2::zero(), None, 1.0, 2.0);
        assert!(glyphs.is_empty());
    }
}
