use crate::coords::{CornerRadii, Rect};
use crate::paint::Paint;
use crate::scene::{DrawList, ZIndex};

use super::Border;

/// Rounded rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub paint: Paint,
    pub border: Option<Border>,
    /// Width of the edge falloff in logical pixels.
    ///
    /// `0` gives a crisp anti-aliased edge. Larger values fade the fill out
    /// across that distance, centered on the geometric edge (soft shadows, blur blobs).
    pub softness: f32,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(rect: Rect, radii: CornerRadii, paint: impl Into<Paint>) -> Self {
        Self { rect, radii, paint: paint.into(), border: None, softness: 0.0 }
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
    /// Records a rounded rectangle draw command.
    #[inline]
    pub fn push_rounded_rect(&mut self, z: ZIndex, cmd: RoundedRectCmd) {
        self.push(z, cmd.into());
    }
}
