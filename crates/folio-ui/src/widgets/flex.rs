use folio_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

// ── Align ─────────────────────────────────────────────────────────────────

/// Cross-axis alignment inside a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Children fill the full cross-axis extent (default).
    #[default]
    Stretch,
    /// Children are placed at the start of the cross axis.
    Start,
    /// Children are centered on the cross axis.
    Center,
    /// Children are placed at the end of the cross axis.
    End,
}

/// Offset of a child of length `size` inside `avail` along the cross axis.
fn cross_offset(align: Align, avail: f32, size: f32) -> f32 {
    match align {
        Align::Stretch | Align::Start => 0.0,
        Align::Center => (avail - size) * 0.5,
        Align::End => avail - size,
    }
}

/// Cross-axis extent of a container: the whole bound when stretching into a
/// finite one, otherwise what the content needs.
fn cross_extent(align: Align, bound: f32, content: f32) -> f32 {
    if align == Align::Stretch && bound.is_finite() { bound } else { content.max(0.0) }
}

/// Total main-axis gap between `n` children.
fn gaps(n: usize, spacing: f32) -> f32 {
    n.saturating_sub(1) as f32 * spacing
}

fn route(children: &mut [Element], rects: Vec<Rect>, event: &UiEvent, ctx: &LayoutCtx<'_>) -> EventResult {
    for (child, r) in children.iter_mut().zip(rects) {
        if child.on_event(event, r, ctx).is_consumed() {
            return EventResult::Consumed;
        }
    }
    EventResult::Ignored
}

// ── Column ────────────────────────────────────────────────────────────────

/// Vertical flex container. Children are stacked top to bottom.
///
/// ```rust,ignore
/// Column::new()
///     .padding_all(16.0)
///     .spacing(8.0)
///     .child(Text::new("(02) The Mind", label))
///     .child(Text::new("Currently Digesting", heading))
/// ```
pub struct Column {
    children: Vec<Element>,
    spacing: f32,
    padding: Edges,
    cross_align: Align,
}

impl Column {
    pub fn new() -> Self {
        Self { children: Vec::new(), spacing: 0.0, padding: Edges::default(), cross_align: Align::Stretch }
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn padding_all(mut self, v: f32) -> Self {
        self.padding = Edges::all(v);
        self
    }

    pub fn cross_align(mut self, align: Align) -> Self {
        self.cross_align = align;
        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        self.children.extend(iter.into_iter().map(Into::into));
        self
    }

    /// Stretch pins children to `width`, unless it is unbounded (a column in
    /// an unconstrained row), where they keep their natural width.
    fn child_constraints(&self, width: f32) -> Constraints {
        let c = Constraints::loose(Vec2::new(width, f32::INFINITY));
        match self.cross_align {
            Align::Stretch if width.is_finite() => Constraints { min: Vec2::new(width, 0.0), ..c },
            _ => c,
        }
    }

    fn child_rects(&self, rect: Rect, ctx: &LayoutCtx) -> Vec<Rect> {
        let inner = self.padding.inset(rect);
        let c = self.child_constraints(inner.size.x);
        let mut y = inner.origin.y;
        self.children
            .iter()
            .map(|child| {
                let s = child.measure(c, ctx);
                let x = inner.origin.x + cross_offset(self.cross_align, inner.size.x, s.x);
                let r = Rect::new(x, y, s.x, s.y);
                y += s.y + self.spacing;
                r
            })
            .collect()
    }
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Column {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner_w = (constraints.max.x - self.padding.width()).max(0.0);
        let c = self.child_constraints(inner_w);

        let (mut content_h, mut widest) = (0.0f32, 0.0f32);
        for child in &self.children {
            let s = child.measure(c, ctx);
            content_h += s.y;
            widest = widest.max(s.x);
        }

        let h = content_h + gaps(self.children.len(), self.spacing) + self.padding.height();
        let w = cross_extent(self.cross_align, constraints.max.x, widest + self.padding.width());
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // The ctx borrows only the fonts, leaving `painter` free for children.
        let ctx = painter.layout_ctx();
        for (child, r) in self.children.iter().zip(self.child_rects(rect, &ctx)) {
            child.paint(painter, r);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let rects = self.child_rects(rect, ctx);
        route(&mut self.children, rects, event, ctx)
    }
}

// ── Row ───────────────────────────────────────────────────────────────────

/// Horizontal flex container. Children are placed left to right.
///
/// Children added with [`flex_child`](Row::flex_child) share the width left
/// over by the others in proportion to their weight. Without flex children,
/// any child that measures to zero size acts as a spacer and absorbs the
/// leftover instead.
///
/// ```rust,ignore
/// Row::new()
///     .spacing(48.0)
///     .flex_child(4.0, sidebar)
///     .flex_child(8.0, body)
/// ```
pub struct Row {
    children: Vec<Element>,
    /// Weight per child; 0 for natural width.
    flex: Vec<f32>,
    spacing: f32,
    padding: Edges,
    cross_align: Align,
}

impl Row {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            flex: Vec::new(),
            spacing: 0.0,
            padding: Edges::default(),
            cross_align: Align::Stretch,
        }
    }

    pub fn spacing(mut self, v: f32) -> Self {
        self.spacing = v;
        self
    }

    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    pub fn padding_all(mut self, v: f32) -> Self {
        self.padding = Edges::all(v);
        self
    }

    pub fn cross_align(mut self, align: Align) -> Self {
        self.cross_align = align;
        self
    }

    pub fn child(self, child: impl Into<Element>) -> Self {
        self.flex_child(0.0, child)
    }

    /// Child that takes `weight` shares of the leftover width.
    pub fn flex_child(mut self, weight: f32, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self.flex.push(weight.max(0.0));
        self
    }

    pub fn children(self, iter: impl IntoIterator<Item = impl Into<Element>>) -> Self {
        iter.into_iter().fold(self, |row, c| row.child(c))
    }

    /// Stretch pins children to `height` when the row has one to fill.
    fn child_constraints(&self, height: f32) -> Constraints {
        let c = Constraints::loose(Vec2::new(f32::INFINITY, height));
        match self.cross_align {
            Align::Stretch if height.is_finite() => Constraints { min: Vec2::new(0.0, height), ..c },
            _ => c,
        }
    }

    /// Final child sizes for an inner box of `inner` and whether anything
    /// grew to take up leftover width.
    fn child_sizes(&self, inner: Vec2, ctx: &LayoutCtx) -> (Vec<Vec2>, bool) {
        let c = self.child_constraints(inner.y);
        let total_flex: f32 = self.flex.iter().sum();

        // Natural sizes first; flex children wait for the leftover.
        let mut sizes: Vec<Vec2> = self
            .children
            .iter()
            .zip(&self.flex)
            .map(|(child, &f)| if f > 0.0 { Vec2::zero() } else { child.measure(c, ctx) })
            .collect();
        let used: f32 = sizes.iter().map(|s| s.x).sum();
        let leftover = (inner.x - used - gaps(self.children.len(), self.spacing)).max(0.0);

        if total_flex > 0.0 {
            for ((child, &f), size) in self.children.iter().zip(&self.flex).zip(sizes.iter_mut()) {
                if f <= 0.0 {
                    continue;
                }
                let share = if leftover.is_finite() {
                    let w = leftover * f / total_flex;
                    Constraints { min: Vec2::new(w, c.min.y), max: Vec2::new(w, c.max.y) }
                } else {
                    c
                };
                *size = child.measure(share, ctx);
            }
            return (sizes, true);
        }

        let is_spacer = |s: &Vec2| s.x == 0.0 && s.y == 0.0;
        let spacers = sizes.iter().filter(|s| is_spacer(s)).count();
        if spacers > 0 && leftover.is_finite() {
            let w = leftover / spacers as f32;
            sizes.iter_mut().filter(|s| is_spacer(s)).for_each(|s| s.x = w);
        }
        (sizes, spacers > 0)
    }

    fn child_rects(&self, rect: Rect, ctx: &LayoutCtx) -> Vec<Rect> {
        let inner = self.padding.inset(rect);
        let (sizes, _) = self.child_sizes(inner.size, ctx);
        let mut x = inner.origin.x;
        sizes
            .into_iter()
            .map(|s| {
                let y = inner.origin.y + cross_offset(self.cross_align, inner.size.y, s.y);
                let r = Rect::new(x, y, s.x, s.y);
                x += s.x + self.spacing;
                r
            })
            .collect()
    }
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Row {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let inner = Vec2::new(
            (constraints.max.x - self.padding.width()).max(0.0),
            (constraints.max.y - self.padding.height()).max(0.0),
        );
        let (sizes, fills) = self.child_sizes(inner, ctx);

        let content_w = sizes.iter().map(|s| s.x).sum::<f32>()
            + gaps(self.children.len(), self.spacing)
            + self.padding.width();
        let tallest = sizes.iter().map(|s| s.y).fold(0.0f32, f32::max);

        // Flex children and spacers fill a bounded row.
        let w = if fills && constraints.max.x.is_finite() { constraints.max.x } else { content_w };
        let h = cross_extent(self.cross_align, constraints.max.y, tallest + self.padding.height());
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let ctx = painter.layout_ctx();
        for (child, r) in self.children.iter().zip(self.child_rects(rect, &ctx)) {
            child.paint(painter, r);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let rects = self.child_rects(rect, ctx);
        route(&mut self.children, rects, event, ctx)
    }
}

// ── Spacer ────────────────────────────────────────────────────────────────

/// Empty widget. Inside a [`Row`] a zero-sized spacer absorbs leftover width;
/// a fixed spacer is a plain gap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spacer {
    size: Vec2,
}

impl Spacer {
    /// Fills the remaining width of a row.
    pub fn flexible() -> Self {
        Self::default()
    }

    /// Fixed vertical gap.
    pub fn height(h: f32) -> Self {
        Self { size: Vec2::new(0.0, h) }
    }

    /// Fixed horizontal gap.
    pub fn width(w: f32) -> Self {
        Self { size: Vec2::new(w, 0.0) }
    }
}

impl Widget for Spacer {
    fn measure(&self, _constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        self.size
    }

    fn paint(&self, _painter: &mut Painter, _rect: Rect) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ctx_with, Fixed};
    use folio_engine::text::FontSystem;

    fn fixed(w: f32, h: f32) -> Fixed {
        Fixed::new(w, h)
    }

    // ── Column ────────────────────────────────────────────────────────────

    #[test]
    fn column_stacks_with_spacing_and_padding() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let col = Column::new().spacing(10.0).padding_all(5.0).child(fixed(20.0, 30.0)).child(fixed(40.0, 50.0));
        let size = col.measure(Constraints::loose(Vec2::new(200.0, f32::INFINITY)), &ctx);
        assert_eq!(size, Vec2::new(200.0, 5.0 + 30.0 + 10.0 + 50.0 + 5.0));
    }

    #[test]
    fn column_routes_events_in_layout_rects() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let (a, a_seen) = Fixed::recording(10.0, 10.0);
        let (b, b_seen) = Fixed::recording(10.0, 10.0);
        let mut col = Column::new().spacing(4.0).child(a).child(b);

        col.on_event(&UiEvent::Tick { dt: 0.0 }, Rect::new(0.0, 100.0, 50.0, 24.0), &ctx);
        assert_eq!(a_seen.get(), Some(Rect::new(0.0, 100.0, 50.0, 10.0)));
        assert_eq!(b_seen.get(), Some(Rect::new(0.0, 114.0, 50.0, 10.0)));
    }

    // ── Row ───────────────────────────────────────────────────────────────

    #[test]
    fn row_natural_width_when_unbounded() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let row = Row::new().spacing(6.0).cross_align(Align::Start).child(fixed(10.0, 5.0)).child(fixed(20.0, 8.0));
        let size = row.measure(Constraints::unbounded(), &ctx);
        assert_eq!(size, Vec2::new(36.0, 8.0));
    }

    #[test]
    fn spacer_pushes_last_child_to_the_end() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let (last, seen) = Fixed::recording(20.0, 10.0);
        let mut row = Row::new()
            .cross_align(Align::Start)
            .child(fixed(30.0, 10.0))
            .child(Spacer::flexible())
            .child(last);

        row.on_event(&UiEvent::Tick { dt: 0.0 }, Rect::new(0.0, 0.0, 200.0, 10.0), &ctx);
        assert_eq!(seen.get().map(|r| r.origin.x), Some(180.0));
    }

    #[test]
    fn flex_children_split_leftover_by_weight() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let (a, a_seen) = Fixed::recording(0.0, 10.0);
        let (b, b_seen) = Fixed::recording(0.0, 10.0);
        let mut row = Row::new().spacing(48.0).cross_align(Align::Start).flex_child(4.0, a).flex_child(8.0, b);

        let rect = Rect::new(0.0, 0.0, 1152.0, 10.0);
        let size = row.measure(Constraints::loose(rect.size), &ctx);
        assert_eq!(size.x, 1152.0);

        row.on_event(&UiEvent::Tick { dt: 0.0 }, rect, &ctx);
        let a = a_seen.get().map(|r| r.size.x).unwrap_or_default();
        let b = b_seen.get().map(|r| r.size.x).unwrap_or_default();
        assert!((a - 368.0).abs() < 1e-3);
        assert!((b - 736.0).abs() < 1e-3);
        assert_eq!(b_seen.get().map(|r| r.origin.x), Some(368.0 + 48.0));
    }
}
