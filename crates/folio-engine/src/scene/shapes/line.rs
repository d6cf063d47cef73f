use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawList, ZIndex};

/// Straight stroke with round caps, drawn as one capsule.
///
/// One instance per stroke keeps translucent lines a single, evenly blended
/// coat at any angle.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color) -> Self {
        Self { from, to, width: width.max(0.0), color }
    }
}

impl DrawList {
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, cmd: LineCmd) {
        self.push(z, cmd.into());
    }
}
