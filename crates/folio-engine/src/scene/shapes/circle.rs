use crate::coords::Vec2;
use crate::paint::{Color, Paint};
use crate::scene::{DrawList, ZIndex};

use super::Border;

/// Circle draw payload.
///
/// A transparent fill with a border draws a ring.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
    /// Edge falloff in logical pixels, see `RoundedRectCmd::softness`.
    pub softness: f32,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, paint: impl Into<Paint>) -> Self {
        Self { center, radius, paint: paint.into(), border: None, softness: 0.0 }
    }

    /// Stroke-only circle.
    #[inline]
    pub fn ring(center: Vec2, radius: f32, width: f32, color: Color) -> Self {
        Self::new(center, radius, Color::transparent()).border(Border::new(width, color))
    }

    #[inline]
    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    #[inline]
    pub fn softness(mut self, softness: f32) -> Self {
        self.softness = softness.max(0.0);
        self
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(&mut self, z: ZIndex, cmd: CircleCmd) {
        self.push(z, cmd.into());
    }
}
