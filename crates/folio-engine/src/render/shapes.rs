use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::coords::{CornerRadii, Rect, Vec2};
use crate::paint::{Paint, PatternKind};
use crate::scene::{Border, DrawCmd, LineCmd};

use super::common::{
    create_viewport_ubo, quad_pipeline, viewport_ubo_layout_entry, InstanceBuffer, ViewportUniform,
};
use super::RenderCtx;

/// Encodes `DrawCmd::{Rect, RoundedRect, Circle, Line}` as SDF quad instances.
///
/// Supported paints:
/// - `Paint::Solid`
/// - `Paint::LinearGradient` (two stops, world-space axis)
/// - `Paint::Pattern` (stripes, sweep, rings, diamonds, grain; optional highlight)
///
/// Borders are drawn on the inner edge. `softness > 0` replaces the AA edge
/// with a wide falloff. Lines are solid capsules.
#[derive(Default)]
pub(super) struct ShapeRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    instances: Vec<ShapeInstance>,
    buffer: InstanceBuffer,
}

impl ShapeRenderer {
    pub(super) fn begin(&mut self) {
        self.instances.clear();
    }

    #[inline]
    pub(super) fn len(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Appends the instance for `cmd`. Non-shape commands and shapes that
    /// would draw nothing are skipped.
    pub(super) fn push(&mut self, cmd: &DrawCmd) {
        let instance = match cmd {
            DrawCmd::Rect(c) => shape_instance(c.rect, CornerRadii::zero(), &c.paint, None, 0.0),
            DrawCmd::RoundedRect(c) => {
                shape_instance(c.rect, c.radii, &c.paint, c.border.as_ref(), c.softness)
            }
            DrawCmd::Circle(c) => {
                let d = c.radius * 2.0;
                shape_instance(
                    Rect::new(c.center.x - c.radius, c.center.y - c.radius, d, d),
                    CornerRadii::all(c.radius),
                    &c.paint,
                    c.border.as_ref(),
                    c.softness,
                )
            }
            DrawCmd::Line(c) => line_instance(c),
            DrawCmd::Text(_) => None,
        };
        if let Some(i) = instance {
            self.instances.push(i);
        }
    }

    /// Creates GPU resources on first use and uploads this frame's instances.
    pub(super) fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        self.ensure_pipeline(ctx);
        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue.write_buffer(
                ubo,
                0,
                bytemuck::bytes_of(&ViewportUniform::from_viewport(ctx.viewport)),
            );
        }
        self.buffer.upload(ctx, "folio shape instances", &self.instances);
    }

    /// Binds the pipeline and instance buffer; returns false when not ready.
    pub(super) fn bind(&self, rpass: &mut wgpu::RenderPass<'_>) -> bool {
        let (Some(pipeline), Some(bind_group), Some(instances)) =
            (self.pipeline.as_ref(), self.bind_group.as_ref(), self.buffer.buffer())
        else {
            return false;
        };
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(1, instances.slice(..));
        true
    }

    pub(super) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, range: Range<u32>) {
        rpass.draw_indexed(0..6, 0, range);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("folio shape bgl"),
            entries: &[viewport_ubo_layout_entry()],
        });

        let pipeline = quad_pipeline(
            ctx,
            "folio shape pipeline",
            include_str!("shaders/shape.wgsl"),
            &bgl,
            ShapeInstance::layout(),
        );

        let ubo = create_viewport_ubo(ctx, "folio shape viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("folio shape bind group"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry { binding: 0, resource: ubo.as_entire_binding() }],
        });

        log::debug!("ShapeRenderer: pipeline built for {:?}", ctx.surface_format);
        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group = Some(bind_group);
        self.viewport_ubo = Some(ubo);
    }
}

// ── instance encoding ─────────────────────────────────────────────────────

const PAINT_SOLID: f32 = 0.0;
const PAINT_LINEAR: f32 = 1.0;
const PAINT_STRIPES: f32 = 2.0;
const PAINT_SWEEP: f32 = 3.0;
const PAINT_RINGS: f32 = 4.0;
const PAINT_DIAMONDS: f32 = 5.0;
const PAINT_GRAIN: f32 = 6.0;

/// Paint fields as the shader reads them.
#[derive(Debug, Copy, Clone, PartialEq)]
struct PaintFields {
    kind: f32,
    color0: [f32; 4],
    color1: [f32; 4],
    params: [f32; 4],
    highlight: [f32; 4],
    highlight_color: [f32; 4],
}

fn paint_fields(paint: &Paint) -> PaintFields {
    let mut f = PaintFields {
        kind: PAINT_SOLID,
        color0: [0.0; 4],
        color1: [0.0; 4],
        params: [0.0; 4],
        highlight: [0.0; 4],
        highlight_color: [0.0; 4],
    };

    match paint {
        Paint::Solid(c) => {
            f.color0 = c.to_array();
        }
        Paint::LinearGradient(g) if !g.is_valid() => {
            // Degenerate axis: draw the start color flat.
            f.color0 = g.from.to_array();
        }
        Paint::LinearGradient(g) => {
            f.kind = PAINT_LINEAR;
            f.color0 = g.from.to_array();
            f.color1 = g.to.to_array();
            f.params = [g.start.x, g.start.y, g.end.x, g.end.y];
        }
        Paint::Pattern(p) => {
            f.color0 = p.base.to_array();
            f.color1 = p.ink.to_array();
            let tile = p.tile.max(0.0);
            let (kind, params) = match p.kind {
                PatternKind::Stripes { angle_deg, period, line } => (
                    PAINT_STRIPES,
                    [angle_deg.to_radians(), period.max(0.01), line.max(0.0), tile],
                ),
                PatternKind::Sweep => (PAINT_SWEEP, [0.0, 0.0, 0.0, tile]),
                PatternKind::Rings { period } => (PAINT_RINGS, [period.max(0.01), 0.0, 0.0, tile]),
                PatternKind::Diamonds { coverage } => {
                    (PAINT_DIAMONDS, [coverage.clamp(0.0, 1.0), 0.0, 0.0, tile.max(0.01)])
                }
                PatternKind::Grain { frequency, octaves } => {
                    (PAINT_GRAIN, [frequency.max(0.0), octaves.min(8) as f32, 0.0, 0.0])
                }
            };
            f.kind = kind;
            f.params = params;
            if let Some(h) = p.highlight {
                f.highlight = [h.center.x, h.center.y, h.radius.max(0.0), 0.0];
                f.highlight_color = h.color.to_array();
            }
        }
    }
    f
}

fn shape_instance(
    rect: Rect,
    radii: CornerRadii,
    paint: &Paint,
    border: Option<&Border>,
    softness: f32,
) -> Option<ShapeInstance> {
    let r = rect.normalized();
    if r.is_empty() || !r.is_finite() {
        return None;
    }

    let (border_width, border_color) = match border {
        Some(b) if b.width > 0.0 && b.color.a > 0.0 => (b.width, b.color.to_array()),
        _ => (0.0, [0.0; 4]),
    };
    if paint.is_invisible() && border_width == 0.0 {
        return None;
    }

    let p = paint_fields(paint);
    Some(ShapeInstance {
        rect: [r.origin.x, r.origin.y, r.size.x, r.size.y],
        radii: radii.fitted(r.size.x, r.size.y),
        style: [softness.max(0.0), border_width, p.kind, 0.0],
        color0: p.color0,
        color1: p.color1,
        params: p.params,
        highlight: p.highlight,
        highlight_color: p.highlight_color,
        border_color,
    })
}

/// Capsule around the segment: `params` carries the endpoints and `style.w`
/// the half width, which is what switches the shader to the segment SDF.
fn line_instance(cmd: &LineCmd) -> Option<ShapeInstance> {
    let half = cmd.width * 0.5;
    let (a, b) = (cmd.from, cmd.to);
    if half <= 0.0 || cmd.color.a <= 0.0 || !a.is_finite() || !b.is_finite() {
        return None;
    }
    let min = Vec2::new(a.x.min(b.x) - half, a.y.min(b.y) - half);
    let max = Vec2::new(a.x.max(b.x) + half, a.y.max(b.y) + half);

    Some(ShapeInstance {
        rect: [min.x, min.y, max.x - min.x, max.y - min.y],
        radii: [0.0; 4],
        style: [0.0, 0.0, PAINT_SOLID, half],
        color0: cmd.color.to_array(),
        color1: [0.0; 4],
        params: [a.x, a.y, b.x, b.y],
        highlight: [0.0; 4],
        highlight_color: [0.0; 4],
        border_color: [0.0; 4],
    })
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (144 bytes), locations 1–9.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct ShapeInstance {
    rect: [f32; 4],
    radii: [f32; 4],
    style: [f32; 4],
    color0: [f32; 4],
    color1: [f32; 4],
    params: [f32; 4],
    highlight: [f32; 4],
    highlight_color: [f32; 4],
    border_color: [f32; 4],
}

impl ShapeInstance {
    const ATTRS: [wgpu::VertexAttribute; 9] = wgpu::vertex_attr_array![
        1 => Float32x4, // rect
        2 => Float32x4, // radii
        3 => Float32x4, // style
        4 => Float32x4, // color0
        5 => Float32x4, // color1
        6 => Float32x4, // params
        7 => Float32x4, // highlight
        8 => Float32x4, // highlight_color
        9 => Float32x4  // border_color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, LinearGradient, Pattern};
    use crate::scene::{CircleCmd, RectCmd};

    // ── paint encoding ────────────────────────────────────────────────────

    #[test]
    fn stripes_encode_radians_and_tile() {
        let p = Pattern::new(
            PatternKind::Stripes { angle_deg: 90.0, period: 10.0, line: 2.0 },
            Color::transparent(),
            Color::black(),
            40.0,
        );
        let f = paint_fields(&Paint::Pattern(p));
        assert_eq!(f.kind, PAINT_STRIPES);
        assert!((f.params[0] - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(&f.params[1..], &[10.0, 2.0, 40.0]);
        assert_eq!(f.highlight[2], 0.0);
    }

    #[test]
    fn highlight_is_forwarded() {
        let p = Pattern::new(PatternKind::Sweep, Color::white(), Color::black(), 40.0)
            .with_highlight(Vec2::new(0.3, 0.2), 0.5, Color::white());
        let f = paint_fields(&Paint::Pattern(p));
        assert_eq!(f.highlight, [0.3, 0.2, 0.5, 0.0]);
        assert_eq!(f.highlight_color, Color::white().to_array());
    }

    #[test]
    fn degenerate_gradient_falls_back_to_solid() {
        let g = LinearGradient::new(Vec2::zero(), Vec2::zero(), Color::white(), Color::black());
        let f = paint_fields(&Paint::LinearGradient(g));
        assert_eq!(f.kind, PAINT_SOLID);
        assert_eq!(f.color0, Color::white().to_array());
    }

    // ── culling ───────────────────────────────────────────────────────────

    #[test]
    fn invisible_and_empty_shapes_are_skipped() {
        let mut r = ShapeRenderer::default();
        r.push(&RectCmd::new(Rect::new(0.0, 0.0, 0.0, 10.0), Color::black()).into());
        r.push(&RectCmd::new(Rect::new(0.0, 0.0, 10.0, 10.0), Color::transparent()).into());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn ring_with_transparent_fill_is_kept() {
        let mut r = ShapeRenderer::default();
        r.push(&CircleCmd::ring(Vec2::new(5.0, 5.0), 24.0, 1.0, Color::black()).into());
        assert_eq!(r.len(), 1);
        assert_eq!(r.instances[0].rect, [-19.0, -19.0, 48.0, 48.0]);
        assert_eq!(r.instances[0].radii, [24.0; 4]);
    }

    // ── lines ─────────────────────────────────────────────────────────────

    #[test]
    fn diagonal_line_is_one_capsule() {
        let mut r = ShapeRenderer::default();
        let line = LineCmd::new(Vec2::new(7.0, 17.0), Vec2::new(17.0, 7.0), 2.0, Color::black());
        r.push(&line.into());
        assert_eq!(r.len(), 1);
        let i = r.instances[0];
        assert_eq!(i.rect, [6.0, 6.0, 12.0, 12.0]);
        assert_eq!(i.params, [7.0, 17.0, 17.0, 7.0]);
        assert_eq!(i.style[3], 1.0);
    }

    #[test]
    fn zero_width_or_clear_lines_are_skipped() {
        let mut r = ShapeRenderer::default();
        let (a, b) = (Vec2::zero(), Vec2::new(10.0, 10.0));
        r.push(&LineCmd::new(a, b, 0.0, Color::black()).into());
        r.push(&LineCmd::new(a, b, 1.0, Color::transparent()).into());
        assert_eq!(r.len(), 0);
    }
}
