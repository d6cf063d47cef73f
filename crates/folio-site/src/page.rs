//! The page root and the sections it is built from.

use folio_ui::prelude::*;

use crate::content::{self, palette, Project};

/// Font handles the page draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faces {
    pub serif: FontId,
    pub serif_italic: FontId,
    pub mono: FontId,
}

impl Faces {
    /// Missing faces fall back to the first font that loaded.
    pub fn from_map(fonts: &FontMap) -> Self {
        let serif = fonts.get_or_default("serif");
        Self {
            serif,
            serif_italic: fonts.get("serif-italic").unwrap_or(serif),
            mono: fonts.get_or_default("mono"),
        }
    }

    fn label(&self, color: Color) -> TextStyle {
        TextStyle::new(self.mono, 12.0, color).tracking(tracking::WIDEST).uppercase()
    }
}

// ── Page ──────────────────────────────────────────────────────────────────

/// Root of the widget tree.
///
/// Owns the pointer tracker and hands the values it publishes to the cursor
/// follower; everything else is the scrolling document.
pub struct Page {
    tracker: PointerTracker,
    document: ScrollView,
    noise: NoiseOverlay,
    follower: CursorFollower,
    applied_revision: Option<u64>,
}

impl Page {
    pub fn new(fonts: &FontMap, surface: &DisplaySurface) -> Self {
        Self::with_faces(Faces::from_map(fonts), surface)
    }

    pub fn with_faces(faces: Faces, surface: &DisplaySurface) -> Self {
        let mut tracker = PointerTracker::new();
        tracker.mount(surface);

        let scroll_out = surface.clone();
        let document = ScrollView::new(document(faces, content::projects()))
            .show_scrollbar(false)
            .on_scroll(move |y| scroll_out.emit(SurfaceEvent::Scroll { offset_y: y }));

        Self {
            tracker,
            document,
            noise: NoiseOverlay::default(),
            follower: CursorFollower::new(palette::rose_600()),
            applied_revision: None,
        }
    }

    #[cfg(test)]
    fn follower(&self) -> &CursorFollower {
        &self.follower
    }

    #[cfg(test)]
    fn tracker(&self) -> &PointerTracker {
        &self.tracker
    }

    /// Pushes the tracker's latest values into the follower, once per change.
    fn sync_follower(&mut self) {
        let revision = self.tracker.revision();
        if self.applied_revision == Some(revision) {
            return;
        }
        self.applied_revision = Some(revision);
        self.follower.apply(FollowerStyle::derive(
            self.tracker.pointer(),
            self.tracker.scroll_offset(),
            RING_SCALE_PER_PX,
        ));
    }
}

impl Widget for Page {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        // Keeps the document's content height current for this frame's events.
        let _ = self.document.measure(constraints, ctx);
        constraints.max
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        // Grain sits between the paper and the content.
        self.noise.paint(painter);
        self.document.paint(painter, rect);
        self.follower.paint(painter);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let result = self.document.on_event(event, rect, ctx);
        if let UiEvent::Tick { dt } = event {
            self.sync_follower();
            self.follower.advance(*dt);
        }
        result
    }
}

// ── document ──────────────────────────────────────────────────────────────

fn document(faces: Faces, projects: Vec<Project>) -> Container {
    Container::new()
        .max_width(1152.0)
        .padding(Edges::symmetric(96.0, 24.0))
        .child(
            Column::new()
                .child(header(faces))
                .child(Spacer::height(128.0))
                .child(artifacts(faces, projects))
                .child(Spacer::height(160.0))
                .child(about(faces))
                .child(Spacer::height(128.0))
                .child(footer(faces)),
        )
}

fn log_link(href: &str) {
    log::info!("link activated: {href}");
}

// ── header ────────────────────────────────────────────────────────────────

fn name_block(faces: Faces, wide: bool) -> Column {
    let (name_size, tag_size) = if wide { (96.0, 14.0) } else { (60.0, 12.0) };
    Column::new()
        .cross_align(Align::Start)
        .child(Text::new(
            content::NAME,
            TextStyle::new(faces.serif, name_size, palette::ink()).tracking(tracking::TIGHTER),
        ))
        .child(Spacer::height(16.0 + 8.0))
        .child(Text::new(
            content::TAGLINE,
            TextStyle::new(faces.mono, tag_size, palette::rose_900().with_opacity(0.6))
                .tracking(tracking::WIDEST)
                .uppercase(),
        ))
}

fn social_links(faces: Faces) -> Row {
    let style = faces.label(palette::ink());
    Row::new().spacing(24.0).children(content::SOCIAL_LINKS.iter().map(|&(label, href)| {
        Link::new(label, href, style).hover_color(palette::rose_600()).on_click(log_link)
    }))
}

fn header(faces: Faces) -> Container {
    let narrow = Column::new()
        .cross_align(Align::Start)
        .child(name_block(faces, false))
        .child(Spacer::height(32.0))
        .child(social_links(faces));
    let wide = Row::new()
        .cross_align(Align::End)
        .child(name_block(faces, true))
        .child(Spacer::flexible())
        .child(social_links(faces));

    Container::new()
        .padding(Edges::bottom(32.0))
        .border_bottom(Border::new(1.0, Color::black().with_opacity(0.1)))
        .child(Responsive::new(content::MEDIUM, narrow, wide))
}

// ── artifacts ─────────────────────────────────────────────────────────────

fn artifacts(faces: Faces, projects: Vec<Project>) -> Column {
    let heading = Row::new()
        .cross_align(Align::End)
        .child(Text::new(content::ARTIFACTS_HEADING, faces.label(palette::gray_500())))
        .child(Spacer::flexible())
        .child(Text::new(
            content::ARTIFACTS_HINT,
            TextStyle::new(faces.serif_italic, 16.0, palette::gray_400()),
        ));

    let card_fonts = CardFonts { serif: faces.serif, mono: faces.mono };
    let grid = projects.into_iter().fold(
        Mosaic::new()
            .columns_from(content::MEDIUM, 2)
            .columns_from(content::WIDE_GRID, 3)
            .row_height(400.0)
            .gap(24.0),
        |grid, project| {
            let card = HoverCard::new(project.card, card_fonts)
                .on_click(|c| log::info!("project opened: {}", c.title));
            grid.item_spanning(card, project.span)
        },
    );

    Column::new().child(heading).child(Spacer::height(48.0)).child(grid)
}

// ── about ─────────────────────────────────────────────────────────────────

fn digesting_card(faces: Faces) -> Container {
    let row_style = TextStyle::new(faces.mono, 12.0, palette::ink());
    let last = content::DIGESTING.len() - 1;
    let rows = content::DIGESTING.iter().enumerate().map(|(i, &(kind, title))| {
        let line = Row::new()
            .child(Text::new(kind, row_style))
            .child(Spacer::flexible())
            .child(Text::new(title, row_style.color(palette::rose_900())));
        let item = Container::new().child(line);
        if i == last {
            item
        } else {
            item.padding(Edges::bottom(8.0)).border_bottom(Border::new(1.0, palette::gray_100()))
        }
    });

    Container::new()
        .background(Color::white())
        .border(Border::new(1.0, palette::gray_100()))
        .shadow(Shadow::small())
        .padding_all(24.0)
        .child(
            Column::new()
                .child(Text::new(
                    content::DIGESTING_HEADING,
                    TextStyle::new(faces.serif_italic, 20.0, palette::ink()),
                ))
                .child(Spacer::height(16.0))
                .child(Column::new().spacing(16.0).children(rows)),
        )
}

fn mind(faces: Faces) -> Column {
    Column::new()
        .child(Text::new(content::MIND_HEADING, faces.label(palette::gray_500())))
        .child(Spacer::height(24.0))
        .child(digesting_card(faces))
}

fn bio(faces: Faces, size: f32) -> Column {
    let body = TextStyle::new(faces.serif, size, palette::ink());
    let underline = |color| Underline { color, thickness: 1.0, offset: 4.0 };
    let paragraph = Paragraph::new()
        .leading(1.25)
        .span(content::BIO_LEAD, body)
        .underlined(content::BIO_FIRST_KEY, body, underline(palette::rose_400()))
        .span(content::BIO_JOIN, body)
        .underlined(content::BIO_SECOND_KEY, body, underline(palette::blue_400()))
        .span(content::BIO_END, body);

    let button_style = TextStyle::new(faces.mono, 12.0, palette::ink()).uppercase();
    let buttons = Row::new().spacing(16.0).children(content::ACTIONS.iter().map(|&(label, href)| {
        Button::new(label, button_style)
            .border(Border::new(1.0, Color::black()))
            .padding(Edges::symmetric(12.0, 24.0))
            .hover_colors(Color::black(), Color::white())
            .on_click(move || log_link(href))
    }));

    Column::new()
        .cross_align(Align::Start)
        .child(paragraph)
        .child(Spacer::height(48.0))
        .child(buttons)
}

fn about(faces: Faces) -> Container {
    let narrow = Column::new().spacing(48.0).child(mind(faces)).child(bio(faces, 24.0));
    let wide = Row::new()
        .cross_align(Align::Start)
        .spacing(48.0)
        .flex_child(4.0, mind(faces))
        .flex_child(8.0, bio(faces, 36.0));

    Container::new()
        .padding(Edges::top(64.0))
        .border_top(Border::new(1.0, Color::black().with_opacity(0.1)))
        .child(Responsive::new(content::MEDIUM, narrow, wide))
}

// ── footer ────────────────────────────────────────────────────────────────

fn footer(faces: Faces) -> Row {
    let style = TextStyle::new(faces.mono, 10.0, palette::ink().with_opacity(0.4))
        .tracking(tracking::WIDEST)
        .uppercase();
    Row::new()
        .cross_align(Align::End)
        .child(Text::new(content::COPYRIGHT, style))
        .child(Spacer::flexible())
        .child(
            Column::new()
                .cross_align(Align::End)
                .child(Text::new(content::LOCATION, style))
                .child(Text::new(content::STATUS, style)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::scene::{DrawCmd, DrawList};
    use folio_engine::text::FontSystem;

    const VIEW: Vec2 = Vec2::new(1280.0, 800.0);

    fn faces() -> Faces {
        let f = FontId::default();
        Faces { serif: f, serif_italic: f, mono: f }
    }

    fn tick(page: &mut Page, fonts: &FontSystem, event: UiEvent) {
        let ctx = LayoutCtx { fonts, viewport: VIEW };
        let rect = Rect::new(0.0, 0.0, VIEW.x, VIEW.y);
        let _ = page.on_event(&event, rect, &ctx);
        let _ = page.on_event(&UiEvent::Tick { dt: 1.0 / 60.0 }, rect, &ctx);
    }

    fn paint(page: &Page, fonts: &FontSystem) -> Vec<DrawCmd> {
        let mut list = DrawList::new();
        {
            let mut p = Painter::new(&mut list, fonts, VIEW);
            page.paint(&mut p, Rect::new(0.0, 0.0, VIEW.x, VIEW.y));
        }
        let order = list.indices_in_paint_order().to_vec();
        order.into_iter().map(|i| list.items()[i].cmd.clone()).collect()
    }

    #[test]
    fn mounting_registers_pointer_and_scroll_listeners() {
        let surface = DisplaySurface::new();
        let page = Page::with_faces(faces(), &surface);
        assert!(page.tracker().is_mounted());
        assert_eq!(surface.listener_count(SurfaceEventKind::PointerMove), 1);
        assert_eq!(surface.listener_count(SurfaceEventKind::Scroll), 1);
    }

    #[test]
    fn dropping_the_page_releases_listeners() {
        let surface = DisplaySurface::new();
        drop(Page::with_faces(faces(), &surface));
        assert_eq!(surface.listener_count(SurfaceEventKind::PointerMove), 0);
        assert_eq!(surface.listener_count(SurfaceEventKind::Scroll), 0);
    }

    #[test]
    fn follower_dot_tracks_pointer_in_the_same_frame() {
        let fonts = FontSystem::new();
        let surface = DisplaySurface::new();
        let mut page = Page::with_faces(faces(), &surface);

        surface.emit(SurfaceEvent::PointerMove { x: 420.0, y: 210.0 });
        tick(&mut page, &fonts, UiEvent::Hover { pos: Vec2::new(420.0, 210.0) });

        assert_eq!(page.follower().style().dot_center, Vec2::new(420.0, 210.0));
        let last_two: Vec<_> = paint(&page, &fonts)
            .into_iter()
            .rev()
            .take(2)
            .collect();
        // Ring is painted last, the dot right before it.
        assert!(matches!(&last_two[1], DrawCmd::Circle(c) if c.center == Vec2::new(420.0, 210.0) && c.radius == 8.0));
        assert!(matches!(&last_two[0], DrawCmd::Circle(c) if c.border.is_some()));
    }

    #[test]
    fn wheel_scroll_reaches_the_ring_target() {
        let fonts = FontSystem::new();
        let surface = DisplaySurface::new();
        let mut page = Page::with_faces(faces(), &surface);

        // Lay out once so the document knows its height.
        let _ = paint(&page, &fonts);
        tick(&mut page, &fonts, UiEvent::ScrollWheel { delta: 120.0 });

        let offset = page.tracker().scroll_offset();
        assert!(offset.0 > 0.0);
        assert_eq!(page.follower().style().ring_scale, 1.0 + offset.0 * RING_SCALE_PER_PX);
    }

    #[test]
    fn grain_is_painted_first() {
        let fonts = FontSystem::new();
        let surface = DisplaySurface::new();
        let page = Page::with_faces(faces(), &surface);
        let cmds = paint(&page, &fonts);
        assert!(matches!(&cmds[0], DrawCmd::Rect(r) if matches!(r.paint, Paint::Pattern(_))));
    }
}
