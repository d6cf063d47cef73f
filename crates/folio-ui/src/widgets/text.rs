use folio_engine::coords::{Rect, Vec2};
use folio_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::{measure_styled, Painter};
use crate::style::TextStyle;
use crate::widget::Widget;

/// A single-run text widget.
///
/// Text is measured using the engine's `FontSystem` so layout is pixel-accurate.
/// Wrapping is controlled by the width constraint from the parent; `\n` forces
/// a line break.
///
/// # Example
/// ```rust,ignore
/// Text::new("Tanveer\nSingh", TextStyle::new(serif, 96.0, ink).tracking(tracking::TIGHTER))
/// ```
pub struct Text {
    pub text: String,
    pub style: TextStyle,
}

impl Text {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self { text: text.into(), style }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }
}

impl Widget for Text {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let max_w = if constraints.max.x.is_finite() { Some(constraints.max.x) } else { None };
        let size = measure_styled(ctx.fonts, &self.text, &self.style, max_w);
        constraints.constrain(size)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let max_w = if rect.size.x > 0.0 { Some(rect.size.x) } else { None };
        painter.text(&self.text, &self.style, rect.origin, max_w);
    }
}

// ── Paragraph ─────────────────────────────────────────────────────────────

/// Line drawn under a run of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Underline {
    pub color: Color,
    pub thickness: f32,
    /// Gap between the baseline and the line.
    pub offset: f32,
}

struct Span {
    text: String,
    style: TextStyle,
    underline: Option<Underline>,
}

/// One word (with its trailing whitespace) placed on a line.
#[derive(Debug, Clone, PartialEq)]
struct Placed {
    span: usize,
    text: String,
    x: f32,
    line: usize,
    /// Advance without trailing whitespace.
    ink_w: f32,
    /// Advance including trailing whitespace.
    full_w: f32,
}

struct ParagraphLayout {
    words: Vec<Placed>,
    line_tops: Vec<f32>,
    height: f32,
    width: f32,
}

/// Word-wrapped text made of differently styled spans.
///
/// Spans can carry an [`Underline`], which follows its words across line
/// breaks.
pub struct Paragraph {
    spans: Vec<Span>,
    /// Line height as a multiple of the tallest font size on the line.
    leading: f32,
}

impl Paragraph {
    pub fn new() -> Self {
        Self { spans: Vec::new(), leading: 1.25 }
    }

    pub fn span(mut self, text: impl Into<String>, style: TextStyle) -> Self {
        self.spans.push(Span { text: text.into(), style, underline: None });
        self
    }

    pub fn underlined(mut self, text: impl Into<String>, style: TextStyle, underline: Underline) -> Self {
        self.spans.push(Span { text: text.into(), style, underline: Some(underline) });
        self
    }

    pub fn leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    fn layout(&self, max_w: Option<f32>, ctx: &LayoutCtx) -> ParagraphLayout {
        let mut words = Vec::new();
        let mut line_sizes: Vec<f32> = vec![0.0];
        let mut x = 0.0f32;
        let mut line = 0usize;
        let mut width = 0.0f32;

        for (si, span) in self.spans.iter().enumerate() {
            for word in span.text.split_inclusive(' ') {
                let trimmed = word.trim_end();
                let full_w = measure_styled(ctx.fonts, word, &span.style, None).x;
                let ink_w = if trimmed.len() == word.len() {
                    full_w
                } else {
                    measure_styled(ctx.fonts, trimmed, &span.style, None).x
                };

                if let Some(max) = max_w {
                    if x > 0.0 && x + ink_w > max {
                        line += 1;
                        x = 0.0;
                        line_sizes.push(0.0);
                    }
                }

                line_sizes[line] = line_sizes[line].max(span.style.size);
                width = width.max(x + ink_w);
                words.push(Placed { span: si, text: word.to_string(), x, line, ink_w, full_w });
                x += full_w;
            }
        }

        let mut line_tops = Vec::with_capacity(line_sizes.len());
        let mut y = 0.0;
        for size in &line_sizes {
            line_tops.push(y);
            y += size * self.leading;
        }

        ParagraphLayout { words, line_tops, height: y, width }
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Paragraph {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let max_w = constraints.max.x.is_finite().then_some(constraints.max.x);
        let l = self.layout(max_w, ctx);
        constraints.constrain(Vec2::new(l.width, l.height))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        let l = self.layout(Some(rect.size.x), &ctx);

        for (i, w) in l.words.iter().enumerate() {
            let span = &self.spans[w.span];
            let line_h = l.line_tops.get(w.line + 1).copied().unwrap_or(l.height) - l.line_tops[w.line];
            // Center each run in its line box, like CSS half-leading.
            let top = rect.origin.y + l.line_tops[w.line] + (line_h - span.style.size * self.leading) * 0.5;
            let half_leading = span.style.size * (self.leading - 1.0) * 0.5;
            let origin = Vec2::new(rect.origin.x + w.x, top + half_leading);
            painter.text(w.text.trim_end(), &span.style, origin, None);

            if let Some(u) = span.underline {
                // Bridge the gap to the next word when the underline continues.
                let continues = l
                    .words
                    .get(i + 1)
                    .is_some_and(|n| n.span == w.span && n.line == w.line);
                let len = if continues { w.full_w } else { w.ink_w };
                let y = origin.y + span.style.size + u.offset;
                painter.fill_rect(Rect::new(origin.x, y, len, u.thickness), u.color);
            }
        }
    }
}
