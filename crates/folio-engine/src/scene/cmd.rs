use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::rounded_rect::RoundedRectCmd;
use crate::scene::shapes::text::TextCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here and map it to a [`Pipeline`]
/// - teach the matching renderer under `render::*` to encode it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    RoundedRect(RoundedRectCmd),
    Circle(CircleCmd),
    Line(LineCmd),
    Text(TextCmd),
}

/// GPU pipeline a command is drawn with.
///
/// Consecutive commands sharing a pipeline (and clip) are drawn as one batch.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Pipeline {
    Shapes,
    Text,
}

impl DrawCmd {
    #[inline]
    pub fn pipeline(&self) -> Pipeline {
        match self {
            DrawCmd::Rect(_)
            | DrawCmd::RoundedRect(_)
            | DrawCmd::Circle(_)
            | DrawCmd::Line(_) => Pipeline::Shapes,
            DrawCmd::Text(_) => Pipeline::Text,
        }
    }
}

impl From<RectCmd> for DrawCmd {
    fn from(c: RectCmd) -> Self {
        DrawCmd::Rect(c)
    }
}

impl From<RoundedRectCmd> for DrawCmd {
    fn from(c: RoundedRectCmd) -> Self {
        DrawCmd::RoundedRect(c)
    }
}

impl From<CircleCmd> for DrawCmd {
    fn from(c: CircleCmd) -> Self {
        DrawCmd::Circle(c)
    }
}

impl From<LineCmd> for DrawCmd {
    fn from(c: LineCmd) -> Self {
        DrawCmd::Line(c)
    }
}

impl From<TextCmd> for DrawCmd {
    fn from(c: TextCmd) -> Self {
        DrawCmd::Text(c)
    }
}
