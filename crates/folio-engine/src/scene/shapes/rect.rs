use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawList, ZIndex};

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: impl Into<Paint>) -> Self {
        Self { rect, paint: paint.into() }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: impl Into<Paint>) {
        self.push(z, RectCmd::new(rect, paint).into());
    }
}
