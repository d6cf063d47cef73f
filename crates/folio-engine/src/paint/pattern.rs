use crate::coords::Vec2;

use super::Color;

/// Procedural fill evaluated per fragment in the shape shader.
///
/// Every pattern repeats on a square tile of `tile` logical pixels anchored at
/// the top-left corner of the geometry it fills, like a CSS background with
/// `background-size: tile tile`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PatternKind {
    /// Parallel `ink` lines `line` px wide, every `period` px, rotated by `angle_deg`.
    Stripes { angle_deg: f32, period: f32, line: f32 },
    /// Angular sweep around the tile center: `base` at 0°, `ink` at 180°, back to `base`.
    Sweep,
    /// Concentric `ink` rings around the tile origin, one every `period` px.
    Rings { period: f32 },
    /// Diamond lattice: four corner triangles each covering `coverage` of the tile.
    Diamonds { coverage: f32 },
    /// Fractal value noise. `frequency` is in cycles per logical pixel.
    /// Not tiled; `tile` is ignored.
    Grain { frequency: f32, octaves: u32 },
}

/// Soft radial highlight laid over a pattern, repeated on every tile.
///
/// Fades linearly from `color` at the center to transparent at `radius`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Highlight {
    /// Center as a fraction of the tile (`(0.3, 0.2)` = 30 % / 20 %).
    pub center: Vec2,
    /// Radius as a fraction of the tile side.
    pub radius: f32,
    pub color: Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Pattern {
    pub kind: PatternKind,
    pub base: Color,
    pub ink: Color,
    pub tile: f32,
    pub highlight: Option<Highlight>,
}

impl Pattern {
    pub fn new(kind: PatternKind, base: Color, ink: Color, tile: f32) -> Self {
        Self { kind, base, ink, tile, highlight: None }
    }

    pub fn with_highlight(mut self, center: Vec2, radius: f32, color: Color) -> Self {
        self.highlight = Some(Highlight { center, radius, color });
        self
    }

    /// Returns the pattern as it appears when its layer is scaled by `factor`:
    /// the tile and every length inside it grow by the same amount.
    pub fn scaled(mut self, factor: f32) -> Self {
        self.tile *= factor;
        self.kind = match self.kind {
            PatternKind::Stripes { angle_deg, period, line } => PatternKind::Stripes {
                angle_deg,
                period: period * factor,
                line: line * factor,
            },
            PatternKind::Rings { period } => PatternKind::Rings { period: period * factor },
            PatternKind::Grain { frequency, octaves } => PatternKind::Grain {
                frequency: frequency / factor,
                octaves,
            },
            other => other,
        };
        self
    }

    /// Fades both pattern colors (and the highlight) by `opacity`.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.base = self.base.with_opacity(opacity);
        self.ink = self.ink.with_opacity(opacity);
        if let Some(h) = &mut self.highlight {
            h.color = h.color.with_opacity(opacity);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_grows_lengths_and_tile() {
        let p = Pattern::new(
            PatternKind::Stripes { angle_deg: 45.0, period: 10.0, line: 2.0 },
            Color::transparent(),
            Color::black(),
            40.0,
        )
        .scaled(1.1);

        assert!((p.tile - 44.0).abs() < 1e-4);
        match p.kind {
            PatternKind::Stripes { angle_deg, period, line } => {
                assert_eq!(angle_deg, 45.0);
                assert!((period - 11.0).abs() < 1e-4);
                assert!((line - 2.2).abs() < 1e-4);
            }
            other => panic!("unexpected kind {other:?}"),
        }
    }

    #[test]
    fn scaled_grain_lowers_frequency() {
        let p = Pattern::new(
            PatternKind::Grain { frequency: 0.6, octaves: 3 },
            Color::transparent(),
            Color::black(),
            1.0,
        )
        .scaled(2.0);
        assert_eq!(p.kind, PatternKind::Grain { frequency: 0.3, octaves: 3 });
    }
}
