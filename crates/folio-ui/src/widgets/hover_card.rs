//! Project card that reveals its details while hovered.
//!
//! Three stacked layers: an abstract pattern background, a detail panel and a
//! rest-state label. [`CardLayers::for_hover`] maps the hover flag to the
//! target value of every layer; the widget only eases toward those targets.

use folio_engine::coords::{Rect, Vec2};
use folio_engine::paint::{Color, Pattern};
use folio_engine::scene::{Border, CircleCmd};
use folio_engine::text::FontId;

use crate::anim::{Easing, Transition};
use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::{measure_styled, Painter};
use crate::style::{tracking, Shadow, TextStyle};
use crate::widget::Widget;

// ── content ───────────────────────────────────────────────────────────────

/// Static description of one project.
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub title: String,
    /// Category tag shown in the detail panel (the project's tech stack).
    pub tagline: String,
    pub concept: String,
    pub background_pattern: Pattern,
    /// Fill of the detail panel.
    pub accent_color: Color,
    /// Text colour on the detail panel.
    pub accent_text_color: Color,
    /// Tall cards get a larger title.
    pub is_vertical: bool,
}

/// Faces used by the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardFonts {
    pub serif: FontId,
    pub mono: FontId,
}

// ── pure render description ───────────────────────────────────────────────

const PATTERN_OPACITY: f32 = 0.6;
const PATTERN_HOVER_SCALE: f32 = 1.1;
const DETAIL_SLIDE_PX: f32 = 16.0;

/// Target state of every layer for one hover value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardLayers {
    pub pattern_scale: f32,
    pub detail_visible: bool,
    pub detail_opacity: f32,
    /// Downward offset of the detail panel.
    pub detail_offset_y: f32,
    pub label_visible: bool,
    pub label_opacity: f32,
    pub blob_color: Color,
    pub shadow_opacity: f32,
}

impl CardLayers {
    /// The detail panel and the rest label are driven by the same boolean:
    /// exactly one of them is visible.
    pub fn for_hover(hovered: bool) -> Self {
        if hovered {
            Self {
                pattern_scale: PATTERN_HOVER_SCALE,
                detail_visible: true,
                detail_opacity: 1.0,
                detail_offset_y: 0.0,
                label_visible: false,
                label_opacity: 0.0,
                blob_color: Color::from_hex(0xf43f5e).with_opacity(0.2),
                shadow_opacity: 1.0,
            }
        } else {
            Self {
                pattern_scale: 1.0,
                detail_visible: false,
                detail_opacity: 0.0,
                detail_offset_y: DETAIL_SLIDE_PX,
                label_visible: true,
                label_opacity: 1.0,
                blob_color: Color::from_hex(0x111827).with_opacity(0.05),
                shadow_opacity: 0.0,
            }
        }
    }
}

// ── animation state ───────────────────────────────────────────────────────

struct CardMotion {
    pattern_scale: Transition,
    /// 0 = hidden and lowered, 1 = shown in place.
    detail: Transition,
    label: Transition,
    /// 0 = rest colour, 1 = hover colour.
    blob: Transition,
    shadow: Transition,
}

impl CardMotion {
    fn new() -> Self {
        let rest = CardLayers::for_hover(false);
        Self {
            pattern_scale: Transition::new(rest.pattern_scale, 0.7, Easing::STANDARD),
            detail: Transition::new(0.0, 0.5, Easing::STANDARD),
            label: Transition::new(rest.label_opacity, 0.3, Easing::STANDARD),
            blob: Transition::new(0.0, 0.5, Easing::STANDARD),
            shadow: Transition::new(rest.shadow_opacity, 0.7, Easing::EASE_OUT),
        }
    }

    fn retarget(&mut self, layers: &CardLayers) {
        self.pattern_scale.set_target(layers.pattern_scale);
        self.detail.set_target(layers.detail_opacity);
        self.label.set_target(layers.label_opacity);
        self.blob.set_target(if layers.detail_visible { 1.0 } else { 0.0 });
        self.shadow.set_target(layers.shadow_opacity);
    }

    fn advance(&mut self, dt: f32) {
        self.pattern_scale.advance(dt);
        self.detail.advance(dt);
        self.label.advance(dt);
        self.blob.advance(dt);
        self.shadow.advance(dt);
    }
}

// ── HoverCard ─────────────────────────────────────────────────────────────

/// A project card. Fills whatever rect its parent gives it.
pub struct HoverCard {
    content: CardContent,
    fonts: CardFonts,
    hovered: bool,
    motion: CardMotion,
    on_click: Option<Box<dyn FnMut(&CardContent)>>,
}

impl HoverCard {
    pub fn new(content: CardContent, fonts: CardFonts) -> Self {
        Self { content, fonts, hovered: false, motion: CardMotion::new(), on_click: None }
    }

    pub fn on_click(mut self, f: impl FnMut(&CardContent) + 'static) -> Self {
        self.on_click = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn content(&self) -> &CardContent {
        &self.content
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Target layer state for the current hover flag.
    #[inline]
    pub fn layers(&self) -> CardLayers {
        CardLayers::for_hover(self.hovered)
    }

    fn set_hovered(&mut self, hovered: bool) {
        if hovered != self.hovered {
            self.hovered = hovered;
            // Retarget now so a paint before the next tick already moves.
            let layers = self.layers();
            self.motion.retarget(&layers);
        }
    }

    // ── layers ────────────────────────────────────────────────────────────

    fn paint_pattern(&self, painter: &mut Painter, rect: Rect) {
        let scale = self.motion.pattern_scale.value();
        let pattern = self.content.background_pattern.scaled(scale);
        painter.push_opacity(PATTERN_OPACITY);
        painter.fill_rect(rect.scaled_about_center(scale), pattern);
        painter.pop_opacity();
    }

    fn paint_blob(&self, painter: &mut Painter, rect: Rect) {
        let rest = CardLayers::for_hover(false).blob_color;
        let hover = CardLayers::for_hover(true).blob_color;
        let color = rest.lerp(hover, self.motion.blob.value());
        painter.circle(CircleCmd::new(rect.center(), 64.0, color).softness(48.0));
    }

    fn paint_detail(&self, painter: &mut Painter, rect: Rect) {
        let t = self.motion.detail.value();
        if t <= 0.0 {
            return;
        }
        let panel = rect.translated(Vec2::new(0.0, DETAIL_SLIDE_PX * (1.0 - t)));
        let ink = self.content.accent_text_color;

        painter.push_opacity(t);
        painter.fill_rect(panel, self.content.accent_color);

        let pad = 32.0;
        let inner = Rect::new(
            panel.origin.x + pad,
            panel.origin.y + pad,
            (panel.size.x - pad * 2.0).max(0.0),
            (panel.size.y - pad * 2.0).max(0.0),
        );

        // Top row: tag pill + arrow.
        let tag = TextStyle::new(self.fonts.mono, 10.0, ink).tracking(tracking::WIDEST).uppercase();
        let tag_size = measure_styled(painter.layout_ctx().fonts, &self.content.tagline, &tag, None);
        let pill = Rect::new(inner.origin.x, inner.origin.y, tag_size.x + 16.0, tag_size.y + 8.0);
        painter.fill_rounded_rect(
            pill,
            pill.size.y * 0.5,
            Color::transparent(),
            Some(Border::new(1.0, Color::white().with_opacity(0.2))),
        );
        painter.text(&self.content.tagline, &tag, Vec2::new(pill.origin.x + 8.0, pill.origin.y + 4.0), None);
        paint_arrow_up_right(painter, Vec2::new(inner.origin.x + inner.size.x - 20.0, inner.origin.y), 20.0, ink);

        // Bottom block, laid out upward from the inner bottom edge.
        let fonts = painter.layout_ctx().fonts;
        let title = TextStyle::new(self.fonts.serif, if self.content.is_vertical { 36.0 } else { 30.0 }, ink);
        let concept = TextStyle::new(self.fonts.mono, 12.0, ink.with_opacity(0.8));
        let max_w = Some(inner.size.x);
        let title_h = measure_styled(fonts, &self.content.title, &title, max_w).y;
        let concept_h = measure_styled(fonts, &self.content.concept, &concept, max_w).y;

        let concept_y = inner.origin.y + inner.size.y - concept_h;
        let rule_y = concept_y - 16.0 - 1.0;
        let title_y = rule_y - 16.0 - 8.0 - title_h;

        painter.text(&self.content.title, &title, Vec2::new(inner.origin.x, title_y), max_w);
        painter.fill_rect(Rect::new(inner.origin.x, rule_y, 48.0, 1.0), Color::white().with_opacity(0.3));
        painter.text(&self.content.concept, &concept, Vec2::new(inner.origin.x, concept_y), max_w);

        painter.pop_opacity();
    }

    fn paint_label(&self, painter: &mut Painter, rect: Rect) {
        let o = self.motion.label.value();
        if o <= 0.0 {
            return;
        }
        let style = TextStyle::new(self.fonts.serif, 24.0, Color::black().with_opacity(0.8));
        let max_w = (rect.size.x - 48.0).max(0.0);
        let h = painter.measure_text(&self.content.title, &style, Some(max_w)).y;
        let origin = Vec2::new(rect.origin.x + 24.0, rect.origin.y + rect.size.y - 24.0 - h);

        painter.push_opacity(o);
        painter.text(&self.content.title, &style, origin, Some(max_w));
        painter.pop_opacity();
    }
}

/// Arrow pointing up and to the right, drawn in a `size` px box at `origin`.
fn paint_arrow_up_right(painter: &mut Painter, origin: Vec2, size: f32, color: Color) {
    // 24-unit icon grid, 2-unit stroke.
    let u = size / 24.0;
    let p = |x: f32, y: f32| Vec2::new(origin.x + x * u, origin.y + y * u);
    let w = 2.0 * u;
    painter.stroke_line(p(7.0, 7.0), p(17.0, 7.0), w, color);
    painter.stroke_line(p(17.0, 7.0), p(17.0, 17.0), w, color);
    painter.stroke_line(p(7.0, 17.0), p(17.0, 7.0), w, color);
}

impl Widget for HoverCard {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        // Sized entirely by the grid cell it sits in.
        constraints.constrain(constraints.max)
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        painter.shadow(rect, 0.0, Shadow::xxl().with_opacity(self.motion.shadow.value()));

        painter.push_clip(rect);
        self.paint_pattern(painter, rect);
        self.paint_blob(painter, rect);
        self.paint_detail(painter, rect);
        self.paint_label(painter, rect);
        painter.pop_clip();

        painter.fill_rounded_rect(
            rect,
            0.0,
            Color::transparent(),
            Some(Border::new(1.0, Color::black().with_opacity(0.05))),
        );
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, _ctx: &LayoutCtx<'_>) -> EventResult {
        match event {
            UiEvent::Hover { pos } => self.set_hovered(rect.contains(*pos)),
            UiEvent::PointerLeft => self.set_hovered(false),
            UiEvent::Tick { dt } => self.motion.advance(*dt),
            UiEvent::Click { pos } if rect.contains(*pos) => {
                if let Some(f) = &mut self.on_click {
                    f(&self.content);
                }
                return EventResult::Consumed;
            }
            _ => {}
        }
        EventResult::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ctx_with, paint_cmds};
    use folio_engine::paint::{Paint, PatternKind};
    use folio_engine::scene::DrawCmd;
    use folio_engine::text::FontSystem;

    const CARD: Rect = Rect::new(100.0, 100.0, 352.0, 400.0);

    fn content() -> CardContent {
        CardContent {
            title: "Entropy Visualizer".into(),
            tagline: "WebGL / Three.js".into(),
            concept: "Visualizing chaos within sorted arrays.".into(),
            background_pattern: Pattern::new(
                PatternKind::Diamonds { coverage: 0.25 },
                Color::transparent(),
                Color::from_hex(0xe0e0e0),
                40.0,
            ),
            accent_color: Color::from_hex(0x292524),
            accent_text_color: Color::from_hex(0xfafaf9),
            is_vertical: false,
        }
    }

    fn card() -> HoverCard {
        HoverCard::new(content(), CardFonts { serif: FontId::default(), mono: FontId::default() })
    }

    fn texts(cmds: &[DrawCmd]) -> Vec<String> {
        cmds.iter()
            .filter_map(|c| match c {
                DrawCmd::Text(t) => Some(t.text.clone()),
                _ => None,
            })
            .collect()
    }

    // ── CardLayers ────────────────────────────────────────────────────────

    #[test]
    fn exactly_one_of_label_and_detail_is_visible() {
        for hovered in [false, true] {
            let l = CardLayers::for_hover(hovered);
            assert_ne!(l.label_visible, l.detail_visible);
            assert_eq!(l.detail_visible, hovered);
        }
    }

    #[test]
    fn hover_scales_pattern_and_lifts_panel() {
        let rest = CardLayers::for_hover(false);
        let hover = CardLayers::for_hover(true);
        assert_eq!(rest.pattern_scale, 1.0);
        assert_eq!(hover.pattern_scale, 1.1);
        assert_eq!(rest.detail_offset_y, 16.0);
        assert_eq!(hover.detail_offset_y, 0.0);
        assert_eq!(rest.detail_opacity, 0.0);
        assert_eq!(hover.detail_opacity, 1.0);
    }

    // ── hover state ───────────────────────────────────────────────────────

    #[test]
    fn enter_and_leave_toggle_hover() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let mut c = card();
        assert!(!c.is_hovered());

        c.on_event(&UiEvent::Hover { pos: Vec2::new(200.0, 200.0) }, CARD, &ctx);
        assert!(c.is_hovered());
        assert!(c.layers().detail_visible);

        c.on_event(&UiEvent::Hover { pos: Vec2::new(10.0, 10.0) }, CARD, &ctx);
        assert!(!c.is_hovered());
        assert!(c.layers().label_visible);
    }

    #[test]
    fn pointer_leaving_window_resets_hover() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let mut c = card();
        c.on_event(&UiEvent::Hover { pos: CARD.center() }, CARD, &ctx);
        c.on_event(&UiEvent::PointerLeft, CARD, &ctx);
        assert!(!c.is_hovered());
    }

    #[test]
    fn bottom_right_edge_is_outside() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let mut c = card();
        c.on_event(&UiEvent::Hover { pos: CARD.max() }, CARD, &ctx);
        assert!(!c.is_hovered());
    }

    // ── rendering ─────────────────────────────────────────────────────────

    #[test]
    fn rest_state_shows_only_the_label() {
        let cmds = paint_cmds(&card(), CARD);
        assert_eq!(texts(&cmds), ["Entropy Visualizer"]);
    }

    #[test]
    fn detail_is_drawn_within_one_frame_of_entering() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let mut c = card();
        c.on_event(&UiEvent::Hover { pos: CARD.center() }, CARD, &ctx);
        c.on_event(&UiEvent::Tick { dt: 1.0 / 60.0 }, CARD, &ctx);

        let cmds = paint_cmds(&c, CARD);
        let t = texts(&cmds);
        assert!(t.contains(&"WEBGL / THREE.JS".to_string()));
        assert!(t.contains(&"Visualizing chaos within sorted arrays.".to_string()));
    }

    #[test]
    fn settled_hover_hides_label_and_scales_pattern() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let mut c = card();
        c.on_event(&UiEvent::Hover { pos: CARD.center() }, CARD, &ctx);
        c.on_event(&UiEvent::Tick { dt: 1.0 }, CARD, &ctx);

        let cmds = paint_cmds(&c, CARD);
        // Label text is gone; the title now only appears once, in the panel.
        assert_eq!(texts(&cmds).iter().filter(|s| *s == "Entropy Visualizer").count(), 1);

        let pattern_rect = cmds.iter().find_map(|c| match c {
            DrawCmd::Rect(r) if matches!(r.paint, Paint::Pattern(_)) => Some(r.rect),
            _ => None,
        });
        assert_eq!(pattern_rect, Some(CARD.scaled_about_center(1.1)));
    }

    #[test]
    fn leaving_reverts_within_one_frame() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let mut c = card();
        c.on_event(&UiEvent::Hover { pos: CARD.center() }, CARD, &ctx);
        c.on_event(&UiEvent::Tick { dt: 1.0 }, CARD, &ctx);
        c.on_event(&UiEvent::Hover { pos: Vec2::zero() }, CARD, &ctx);
        c.on_event(&UiEvent::Tick { dt: 1.0 / 60.0 }, CARD, &ctx);

        assert!(c.layers().label_visible);
        let cmds = paint_cmds(&c, CARD);
        // Label is fading back in.
        assert_eq!(texts(&cmds).iter().filter(|s| *s == "Entropy Visualizer").count(), 2);
    }

    #[test]
    fn click_reports_content() {
        let fonts = FontSystem::new();
        let ctx = ctx_with(&fonts);
        let seen = std::rc::Rc::new(std::cell::RefCell::new(None));
        let s = seen.clone();
        let mut c = card().on_click(move |content| *s.borrow_mut() = Some(content.title.clone()));

        let r = c.on_event(&UiEvent::Click { pos: CARD.center() }, CARD, &ctx);
        assert_eq!(r, EventResult::Consumed);
        assert_eq!(seen.borrow().as_deref(), Some("Entropy Visualizer"));
    }
}
