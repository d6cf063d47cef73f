//! Folio UI — retained widget tree on top of `folio-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use folio_ui::prelude::*;
//!
//! Application::new()
//!     .title("Folio")
//!     .font("serif", serif_bytes)
//!     .run_widget(|fonts, surface| {
//!         let serif = fonts.get_or_default("serif");
//!         Column::new()
//!             .child(Text::new("Hello", TextStyle::new(serif, 24.0, Color::black())))
//!             .into()
//!     });
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere an
//! [`Element`](widget::Element) is accepted:
//!
//! ```rust,ignore
//! use folio_ui::prelude::*;
//!
//! pub struct Swatch(Color);
//!
//! impl Widget for Swatch {
//!     fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
//!         constraints.constrain(Vec2::new(40.0, 40.0))
//!     }
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         painter.fill_rounded_rect(rect, 4.0, self.0, None);
//!     }
//! }
//! ```

pub mod anim;
pub mod app;
pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod style;
pub mod surface;
pub mod tracker;
pub mod widget;
pub mod widgets;

#[cfg(test)]
mod testing;

pub use app::Application;

/// Everything needed to build a page, in one import.
pub mod prelude {
    pub use crate::anim::{Easing, Transition};
    pub use crate::constraints::{Constraints, Edges, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::style::{tracking, Shadow, TextStyle};
    pub use crate::surface::{DisplaySurface, Subscription, SurfaceEvent, SurfaceEventKind};
    pub use crate::tracker::{PointerState, PointerTracker, ScrollOffset};
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        button::Button,
        container::Container,
        flex::{Align, Column, Row, Spacer},
        follower::{CursorFollower, FollowerStyle, RING_SCALE_PER_PX},
        hover_card::{CardContent, CardFonts, CardLayers, HoverCard},
        link::Link,
        mosaic::{Mosaic, Span},
        noise::NoiseOverlay,
        responsive::Responsive,
        scroll::ScrollView,
        text::{Paragraph, Text, Underline},
    };

    pub use folio_engine::coords::{CornerRadii, Rect, Vec2};
    pub use folio_engine::paint::{Color, Paint, Pattern, PatternKind};
    pub use folio_engine::scene::Border;
    pub use folio_engine::text::FontId;

    pub use crate::app::{Application, FontMap};
}
