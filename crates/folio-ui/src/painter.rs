use folio_engine::coords::{CornerRadii, Rect, Vec2};
use folio_engine::paint::{Color, Paint};
use folio_engine::scene::{Border, CircleCmd, DrawList, LineCmd, RoundedRectCmd, TextCmd, ZIndex};
use folio_engine::text::FontSystem;

use crate::constraints::LayoutCtx;
use crate::style::{Shadow, TextStyle};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with shape, text and fade helpers. Input
/// never reaches paint: widgets record hover and press in `on_event`.
///
/// Every draw call lands above the previous one, so paint order is z order.
/// An opacity scope ([`push_opacity`](Self::push_opacity)) fades everything
/// drawn inside it, the way CSS `opacity` fades a subtree.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    viewport: Vec2,
    z: i32,
    opacity: Vec<f32>,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem, viewport: Vec2) -> Self {
        Self { draw_list, font_system, viewport, z: 0, opacity: Vec::new() }
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measures `text` laid out with `style`.
    pub fn measure_text(&self, text: &str, style: &TextStyle, max_width: Option<f32>) -> Vec2 {
        measure_styled(self.font_system, text, style, max_width)
    }

    // ── layout context ────────────────────────────────────────────────────

    /// Window size in logical pixels.
    #[inline]
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Returns a [`LayoutCtx`] borrowing this painter's font system.
    ///
    /// Useful inside `paint` when a container needs to re-measure its
    /// children to compute their layout positions.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'a> {
        LayoutCtx { fonts: self.font_system, viewport: self.viewport }
    }

    // ── opacity ───────────────────────────────────────────────────────────

    /// Multiply the opacity of everything drawn until the matching
    /// [`pop_opacity`](Self::pop_opacity) by `opacity`.
    pub fn push_opacity(&mut self, opacity: f32) {
        self.opacity.push(opacity.clamp(0.0, 1.0));
    }

    pub fn pop_opacity(&mut self) {
        self.opacity.pop();
    }

    /// Effective opacity of the current scope.
    pub fn opacity(&self) -> f32 {
        self.opacity.iter().product()
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let paint = paint.into().with_opacity(self.opacity());
        if paint.is_invisible() {
            return;
        }
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, paint);
    }

    /// Rounded rectangle with optional border.
    ///
    /// Pass `radius = 0.0` for sharp corners. Pass `border = None` for no stroke.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        paint: impl Into<Paint>,
        border: Option<Border>,
    ) {
        let mut cmd = RoundedRectCmd::new(rect, CornerRadii::all(radius), paint);
        cmd.border = border;
        self.rounded_rect(cmd);
    }

    /// Fully specified rounded rectangle (per-corner radii, softness).
    pub fn rounded_rect(&mut self, mut cmd: RoundedRectCmd) {
        let o = self.opacity();
        cmd.paint = cmd.paint.with_opacity(o);
        cmd.border = cmd.border.map(|b| b.with_opacity(o));
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, cmd);
    }

    /// Soft shadow under a `radius`-rounded `rect`.
    pub fn shadow(&mut self, rect: Rect, radius: f32, shadow: Shadow) {
        let grown = Rect::new(
            rect.origin.x - shadow.spread,
            rect.origin.y - shadow.spread + shadow.offset_y,
            rect.size.x + shadow.spread * 2.0,
            rect.size.y + shadow.spread * 2.0,
        );
        if grown.is_empty() || shadow.color.a <= 0.0 {
            return;
        }
        let cmd = RoundedRectCmd::new(grown, CornerRadii::all(radius), shadow.color).softness(shadow.blur);
        self.rounded_rect(cmd);
    }

    /// Filled circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, paint: impl Into<Paint>) {
        self.circle(CircleCmd::new(center, radius, paint));
    }

    /// Fully specified circle (border, softness).
    pub fn circle(&mut self, mut cmd: CircleCmd) {
        let o = self.opacity();
        cmd.paint = cmd.paint.with_opacity(o);
        cmd.border = cmd.border.map(|b| b.with_opacity(o));
        let z = self.next_z();
        self.draw_list.push_circle(z, cmd);
    }

    /// Straight line of `width` px from `from` to `to`, round-capped.
    pub fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        let color = color.with_opacity(self.opacity());
        let z = self.next_z();
        self.draw_list.push_line(z, LineCmd::new(from, to, width, color));
    }

    /// Text at `origin` (top-left of the first line), wrapped at `max_width`.
    pub fn text(&mut self, text: &str, style: &TextStyle, origin: Vec2, max_width: Option<f32>) {
        let color = style.color.with_opacity(self.opacity());
        if color.a <= 0.0 || text.is_empty() {
            return;
        }
        let cmd = TextCmd::new(style.display(text), style.font, style.size, color, origin)
            .max_width(max_width)
            .letter_spacing(style.letter_spacing);
        let z = self.next_z();
        self.draw_list.push_text(z, cmd);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a scissor region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    /// End the most recent scissor region.
    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

/// Measures `text` the way [`Painter::text`] will lay it out.
pub fn measure_styled(
    fonts: &FontSystem,
    text: &str,
    style: &TextStyle,
    max_width: Option<f32>,
) -> Vec2 {
    fonts.measure_text_spaced(&style.display(text), style.font, style.size, max_width, style.letter_spacing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::scene::DrawCmd;

    const VIEW: Vec2 = Vec2::new(800.0, 600.0);

    fn cmds(list: &mut DrawList) -> Vec<DrawCmd> {
        let order: Vec<usize> = list.indices_in_paint_order().to_vec();
        order.into_iter().map(|i| list.items()[i].cmd.clone()).collect()
    }

    // ── opacity ───────────────────────────────────────────────────────────

    #[test]
    fn opacity_scopes_multiply() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut p = Painter::new(&mut list, &fonts, VIEW);

        assert_eq!(p.opacity(), 1.0);
        p.push_opacity(0.5);
        p.push_opacity(0.5);
        assert!((p.opacity() - 0.25).abs() < 1e-6);
        p.pop_opacity();
        assert!((p.opacity() - 0.5).abs() < 1e-6);
        p.pop_opacity();
        assert_eq!(p.opacity(), 1.0);
    }

    #[test]
    fn fully_transparent_scope_draws_nothing() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        {
            let mut p = Painter::new(&mut list, &fonts, VIEW);
            p.push_opacity(0.0);
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::black());
            p.pop_opacity();
        }
        assert!(list.items().is_empty());
    }

    #[test]
    fn opacity_fades_fill_and_border() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        {
            let mut p = Painter::new(&mut list, &fonts, VIEW);
            p.push_opacity(0.5);
            p.fill_rounded_rect(
                Rect::new(0.0, 0.0, 10.0, 10.0),
                2.0,
                Color::white(),
                Some(Border::new(1.0, Color::black())),
            );
        }
        match &cmds(&mut list)[0] {
            DrawCmd::RoundedRect(r) => {
                assert_eq!(r.paint, Paint::Solid(Color::white().with_opacity(0.5)));
                assert_eq!(r.border.map(|b| b.color.a), Some(0.5));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn later_calls_paint_on_top() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        {
            let mut p = Painter::new(&mut list, &fonts, VIEW);
            p.fill_circle(Vec2::new(5.0, 5.0), 2.0, Color::black());
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::white());
        }
        let out = cmds(&mut list);
        assert!(matches!(out[0], DrawCmd::Circle(_)));
        assert!(matches!(out[1], DrawCmd::Rect(_)));
    }

    // ── stroke_line ───────────────────────────────────────────────────────

    #[test]
    fn faded_diagonal_line_is_a_single_command() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        {
            let mut p = Painter::new(&mut list, &fonts, VIEW);
            p.push_opacity(0.5);
            p.stroke_line(Vec2::new(7.0, 17.0), Vec2::new(17.0, 7.0), 1.5, Color::black());
            p.pop_opacity();
        }
        match &cmds(&mut list)[..] {
            [DrawCmd::Line(l)] => {
                assert_eq!((l.from, l.to, l.width), (Vec2::new(7.0, 17.0), Vec2::new(17.0, 7.0), 1.5));
                assert_eq!(l.color, Color::black().with_opacity(0.5));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn axis_aligned_line_is_a_single_command_too() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        {
            let mut p = Painter::new(&mut list, &fonts, VIEW);
            p.stroke_line(Vec2::new(0.0, 10.0), Vec2::new(48.0, 10.0), 1.0, Color::black());
        }
        assert!(matches!(&cmds(&mut list)[..], [DrawCmd::Line(_)]));
    }

    #[test]
    fn empty_text_is_skipped() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        {
            let mut p = Painter::new(&mut list, &fonts, VIEW);
            let style = TextStyle::new(Default::default(), 12.0, Color::black());
            p.text("", &style, Vec2::zero(), None);
            p.text("A", &style, Vec2::zero(), None);
        }
        assert_eq!(list.items().len(), 1);
    }
}
