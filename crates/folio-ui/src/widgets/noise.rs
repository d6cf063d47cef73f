use folio_engine::coords::{Rect, Vec2};
use folio_engine::paint::{Color, Pattern, PatternKind};

use crate::painter::Painter;

/// Full-viewport film grain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseOverlay {
    pub frequency: f32,
    pub octaves: u32,
    pub opacity: f32,
}

impl NoiseOverlay {
    pub fn new(opacity: f32) -> Self {
        Self { frequency: 0.6, octaves: 3, opacity }
    }

    pub fn pattern(&self) -> Pattern {
        Pattern::new(
            PatternKind::Grain { frequency: self.frequency, octaves: self.octaves },
            Color::white(),
            Color::black(),
            1.0,
        )
        .with_opacity(self.opacity)
    }

    /// Covers the whole viewport regardless of scroll position.
    pub fn paint(&self, painter: &mut Painter) {
        let view = painter.viewport();
        painter.fill_rect(Rect::from_origin_size(Vec2::zero(), view), self.pattern());
    }
}

impl Default for NoiseOverlay {
    fn default() -> Self {
        Self::new(0.05)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_engine::paint::Paint;
    use folio_engine::scene::{DrawCmd, DrawList};
    use folio_engine::text::FontSystem;

    #[test]
    fn covers_viewport_at_low_opacity() {
        let fonts = FontSystem::new();
        let mut list = DrawList::new();
        let view = Vec2::new(1024.0, 700.0);
        {
            let mut p = Painter::new(&mut list, &fonts, view);
            NoiseOverlay::default().paint(&mut p);
        }
        let item = &list.items()[0];
        let DrawCmd::Rect(r) = &item.cmd else { panic!("expected rect, got {:?}", item.cmd) };
        assert_eq!(r.rect, Rect::new(0.0, 0.0, 1024.0, 700.0));
        let Paint::Pattern(p) = r.paint else { panic!("expected pattern") };
        assert!((p.ink.a - 0.05).abs() < 1e-6);
        assert!(matches!(p.kind, PatternKind::Grain { octaves: 3, .. }));
    }
}
