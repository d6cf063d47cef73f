//! Responsive card grid with CSS-grid style auto placement.

use folio_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// How many cells an item covers, and from which window width on.
///
/// Below `min_viewport` the item falls back to a single cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub cols: usize,
    pub rows: usize,
    pub min_viewport: f32,
}

impl Span {
    pub const ONE: Span = Span { cols: 1, rows: 1, min_viewport: 0.0 };

    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols: cols.max(1), rows: rows.max(1), min_viewport: 0.0 }
    }

    /// Applies the span only when the window is at least `width` px wide.
    pub fn from_width(mut self, width: f32) -> Self {
        self.min_viewport = width;
        self
    }

    fn at(self, viewport_w: f32) -> (usize, usize) {
        if viewport_w >= self.min_viewport { (self.cols, self.rows) } else { (1, 1) }
    }
}

/// Grid area of one placed item, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridArea {
    pub col: usize,
    pub row: usize,
    pub cols: usize,
    pub rows: usize,
}

/// Places items of the given `(cols, rows)` spans on a `columns`-wide grid.
///
/// Row-major sparse auto placement: a cursor walks forward through the grid
/// and each item takes the first free area at or after it that fits. Spans
/// wider than the grid are clamped to it.
pub fn place(spans: &[(usize, usize)], columns: usize) -> Vec<GridArea> {
    let columns = columns.max(1);
    let mut occupied: Vec<Vec<bool>> = Vec::new();
    let mut areas = Vec::with_capacity(spans.len());
    let (mut row, mut col) = (0usize, 0usize);

    let fits = |occ: &Vec<Vec<bool>>, r: usize, c: usize, w: usize, h: usize| {
        (r..r + h).all(|rr| (c..c + w).all(|cc| !occ.get(rr).is_some_and(|line| line[cc])))
    };

    for &(w, h) in spans {
        let w = w.clamp(1, columns);
        let h = h.max(1);
        loop {
            if col + w > columns {
                row += 1;
                col = 0;
                continue;
            }
            if fits(&occupied, row, col, w, h) {
                break;
            }
            col += 1;
        }

        while occupied.len() < row + h {
            occupied.push(vec![false; columns]);
        }
        for line in &mut occupied[row..row + h] {
            for cell in &mut line[col..col + w] {
                *cell = true;
            }
        }
        areas.push(GridArea { col, row, cols: w, rows: h });
        col += w;
    }
    areas
}

struct Item {
    child: Element,
    span: Span,
}

/// Grid of fixed-height rows whose column count follows the window width.
///
/// # Example
/// ```rust,ignore
/// Mosaic::new()
///     .columns_from(768.0, 2)
///     .columns_from(1024.0, 3)
///     .item_spanning(card_a, Span::new(2, 1).from_width(1024.0))
///     .item(card_b)
/// ```
pub struct Mosaic {
    items: Vec<Item>,
    /// `(min window width, columns)`, checked widest first.
    breakpoints: Vec<(f32, usize)>,
    row_height: f32,
    gap: f32,
}

impl Mosaic {
    pub fn new() -> Self {
        Self { items: Vec::new(), breakpoints: Vec::new(), row_height: 400.0, gap: 24.0 }
    }

    /// Use `columns` columns when the window is at least `min_width` px wide.
    pub fn columns_from(mut self, min_width: f32, columns: usize) -> Self {
        self.breakpoints.push((min_width, columns.max(1)));
        self.breakpoints.sort_by(|a, b| b.0.total_cmp(&a.0));
        self
    }

    pub fn row_height(mut self, h: f32) -> Self {
        self.row_height = h;
        self
    }

    pub fn gap(mut self, g: f32) -> Self {
        self.gap = g;
        self
    }

    pub fn item(self, child: impl Into<Element>) -> Self {
        self.item_spanning(child, Span::ONE)
    }

    pub fn item_spanning(mut self, child: impl Into<Element>, span: Span) -> Self {
        self.items.push(Item { child: child.into(), span });
        self
    }

    pub fn columns_for(&self, viewport_w: f32) -> usize {
        self.breakpoints
            .iter()
            .find(|(min, _)| viewport_w >= *min)
            .map(|&(_, n)| n)
            .unwrap_or(1)
    }

    fn areas(&self, viewport_w: f32) -> (usize, Vec<GridArea>) {
        let columns = self.columns_for(viewport_w);
        let spans: Vec<(usize, usize)> = self.items.iter().map(|i| i.span.at(viewport_w)).collect();
        (columns, place(&spans, columns))
    }

    fn height_for(&self, areas: &[GridArea]) -> f32 {
        let rows = areas.iter().map(|a| a.row + a.rows).max().unwrap_or(0);
        if rows == 0 {
            return 0.0;
        }
        rows as f32 * self.row_height + (rows - 1) as f32 * self.gap
    }

    fn area_rect(&self, rect: Rect, columns: usize, area: GridArea) -> Rect {
        let col_w = ((rect.size.x - self.gap * (columns - 1) as f32) / columns as f32).max(0.0);
        let x = rect.origin.x + area.col as f32 * (col_w + self.gap);
        let y = rect.origin.y + area.row as f32 * (self.row_height + self.gap);
        let w = area.cols as f32 * col_w + (area.cols - 1) as f32 * self.gap;
        let h = area.rows as f32 * self.row_height + (area.rows - 1) as f32 * self.gap;
        Rect::new(x, y, w, h)
    }

    fn item_rects(&self, rect: Rect, viewport_w: f32) -> Vec<Rect> {
        let (columns, areas) = self.areas(viewport_w);
        areas.into_iter().map(|a| self.area_rect(rect, columns, a)).collect()
    }
}

impl Default for Mosaic {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Mosaic {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let (_, areas) = self.areas(ctx.viewport.x);
        let w = if constraints.max.x.is_finite() { constraints.max.x } else { 0.0 };
        constraints.constrain(Vec2::new(w, self.height_for(&areas)))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let rects = self.item_rects(rect, painter.viewport().x);
        for (item, r) in self.items.iter().zip(rects) {
            item.child.paint(painter, r);
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let rects = self.item_rects(rect, ctx.viewport.x);
        for (item, r) in self.items.iter_mut().zip(rects) {
            if item.child.on_event(event, r, ctx).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Fixed;
    use folio_engine::text::FontSystem;

    fn area(col: usize, row: usize, cols: usize, rows: usize) -> GridArea {
        GridArea { col, row, cols, rows }
    }

    // ── place ─────────────────────────────────────────────────────────────

    #[test]
    fn wide_first_then_tall_fills_two_rows() {
        let got = place(&[(2, 1), (1, 2), (1, 1), (1, 1)], 3);
        assert_eq!(got, [area(0, 0, 2, 1), area(2, 0, 1, 2), area(0, 1, 1, 1), area(1, 1, 1, 1)]);
    }

    #[test]
    fn single_column_stacks() {
        let got = place(&[(1, 1), (1, 1), (1, 1)], 1);
        assert_eq!(got, [area(0, 0, 1, 1), area(0, 1, 1, 1), area(0, 2, 1, 1)]);
    }

    #[test]
    fn oversized_span_is_clamped() {
        let got = place(&[(5, 1), (1, 1)], 2);
        assert_eq!(got, [area(0, 0, 2, 1), area(0, 1, 1, 1)]);
    }

    #[test]
    fn sparse_cursor_never_backfills() {
        // The 2-wide item cannot fit after the first, leaving a hole that the
        // third item does not go back to.
        let got = place(&[(1, 1), (2, 1), (1, 1)], 2);
        assert_eq!(got, [area(0, 0, 1, 1), area(0, 1, 2, 1), area(0, 2, 1, 1)]);
    }

    // ── widget ────────────────────────────────────────────────────────────

    fn portfolio_grid() -> Mosaic {
        Mosaic::new()
            .columns_from(768.0, 2)
            .columns_from(1024.0, 3)
            .item_spanning(Fixed::new(0.0, 0.0), Span::new(2, 1).from_width(1024.0))
            .item_spanning(Fixed::new(0.0, 0.0), Span::new(1, 2).from_width(1024.0))
            .item(Fixed::new(0.0, 0.0))
            .item(Fixed::new(0.0, 0.0))
    }

    #[test]
    fn columns_follow_breakpoints() {
        let m = portfolio_grid();
        assert_eq!(m.columns_for(390.0), 1);
        assert_eq!(m.columns_for(768.0), 2);
        assert_eq!(m.columns_for(1023.0), 2);
        assert_eq!(m.columns_for(1280.0), 3);
    }

    #[test]
    fn height_counts_rows_and_gaps() {
        let fonts = FontSystem::new();
        let m = portfolio_grid();
        let c = Constraints::loose(Vec2::new(1104.0, f32::INFINITY));

        let desk = LayoutCtx { fonts: &fonts, viewport: Vec2::new(1280.0, 800.0) };
        assert_eq!(m.measure(c, &desk).y, 2.0 * 400.0 + 24.0);

        let tablet = LayoutCtx { fonts: &fonts, viewport: Vec2::new(800.0, 800.0) };
        assert_eq!(m.measure(c, &tablet).y, 2.0 * 400.0 + 24.0);

        let phone = LayoutCtx { fonts: &fonts, viewport: Vec2::new(390.0, 800.0) };
        assert_eq!(m.measure(c, &phone).y, 4.0 * 400.0 + 3.0 * 24.0);
    }

    #[test]
    fn item_rects_on_desktop() {
        let m = portfolio_grid();
        let rects = m.item_rects(Rect::new(0.0, 0.0, 1104.0, 824.0), 1280.0);
        // (1104 - 2 * 24) / 3 = 352 per column.
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 728.0, 400.0));
        assert_eq!(rects[1], Rect::new(752.0, 0.0, 352.0, 824.0));
        assert_eq!(rects[2], Rect::new(0.0, 424.0, 352.0, 400.0));
        assert_eq!(rects[3], Rect::new(376.0, 424.0, 352.0, 400.0));
    }
}
