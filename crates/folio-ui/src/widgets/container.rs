use folio_engine::coords::{Rect, Vec2};
use folio_engine::paint::{Color, Paint};
use folio_engine::scene::Border;

use crate::constraints::{Constraints, Edges, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::style::Shadow;
use crate::widget::{Element, Widget};

/// A single-child widget that applies padding, background, border, shadow
/// and/or a maximum width.
///
/// All properties are optional — an empty `Container` is a no-op.
///
/// # Example
/// ```rust,ignore
/// Container::new()
///     .padding_all(24.0)
///     .background(Color::white())
///     .border(Border::new(1.0, Color::from_hex(0xf3f4f6)))
///     .shadow(Shadow::small())
///     .child(reading_list)
/// ```
pub struct Container {
    child: Option<Element>,
    padding: Edges,
    background: Option<Paint>,
    border: Option<Border>,
    border_top: Option<Border>,
    border_bottom: Option<Border>,
    shadow: Option<Shadow>,
    corner_radius: f32,
    min_width: f32,
    min_height: f32,
    max_width: f32,
}

impl Container {
    pub fn new() -> Self {
        Self {
            child: None,
            padding: Edges::default(),
            background: None,
            border: None,
            border_top: None,
            border_bottom: None,
            shadow: None,
            corner_radius: 0.0,
            min_width: 0.0,
            min_height: 0.0,
            max_width: f32::INFINITY,
        }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.child = Some(child.into());
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

    pub fn background(mut self, paint: impl Into<Paint>) -> Self {
        self.background = Some(paint.into());
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Hairline along the top edge only.
    pub fn border_top(mut self, border: Border) -> Self {
        self.border_top = Some(border);
        self
    }

    /// Hairline along the bottom edge only.
    pub fn border_bottom(mut self, border: Border) -> Self {
        self.border_bottom = Some(border);
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Caps the width; a container given more space centers itself in it.
    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = width;
        self
    }

    fn frame(&self, rect: Rect) -> Rect {
        if rect.size.x <= self.max_width {
            return rect;
        }
        let x = rect.origin.x + (rect.size.x - self.max_width) * 0.5;
        Rect::new(x, rect.origin.y, self.max_width, rect.size.y)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let capped = Constraints {
            min: Vec2::new(constraints.min.x.min(self.max_width), constraints.min.y),
            max: Vec2::new(constraints.max.x.min(self.max_width), constraints.max.y),
        };
        let inner = capped.shrink(self.padding);
        // Keep a stretched parent's width demand for the child.
        let inner = Constraints {
            min: Vec2::new((capped.min.x - self.padding.width()).max(0.0), 0.0),
            ..inner
        };

        let child_size = self
            .child
            .as_ref()
            .map(|c| c.measure(inner, ctx))
            .unwrap_or(Vec2::zero());

        let w = (child_size.x + self.padding.width()).max(self.min_width);
        let h = (child_size.y + self.padding.height()).max(self.min_height);
        // A capped container still occupies the full offered width so it can
        // center itself.
        let w = if self.max_width.is_finite() && constraints.max.x.is_finite() {
            constraints.max.x
        } else {
            w
        };
        constraints.constrain(Vec2::new(w, h))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let rect = self.frame(rect);

        if let Some(shadow) = self.shadow {
            painter.shadow(rect, self.corner_radius, shadow);
        }

        // Draw background + optional border.
        if self.background.is_some() || self.border.is_some() {
            let paint = self.background.unwrap_or(Paint::Solid(Color::transparent()));
            painter.fill_rounded_rect(rect, self.corner_radius, paint, self.border);
        }

        if let Some(b) = self.border_top {
            painter.fill_rect(Rect::new(rect.origin.x, rect.origin.y, rect.size.x, b.width), b.color);
        }
        if let Some(b) = self.border_bottom {
            let y = rect.origin.y + rect.size.y - b.width;
            painter.fill_rect(Rect::new(rect.origin.x, y, rect.size.x, b.width), b.color);
        }

        // Paint child inside the padded inner rect.
        if let Some(child) = &self.child {
            child.paint(painter, self.padding.inset(rect));
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx<'_>) -> EventResult {
        let rect = self.frame(rect);
        if let Some(child) = &mut self.child {
            child.on_event(event, self.padding.inset(rect), ctx)
        } else {
            EventResult::Ignored
        }
    }
}
