use std::collections::HashMap;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout};

use crate::scene::DrawCmd;
use crate::text::FontSystem;

use super::common::{
    create_viewport_ubo, quad_pipeline, viewport_ubo_layout_entry, InstanceBuffer, ViewportUniform,
};
use super::RenderCtx;

// ── atlas constants ────────────────────────────────────────────────────────

const ATLAS_SIZE: u32 = 2048;
const GLYPH_PADDING: u32 = 1; // pixels between glyphs in the atlas

// ── cached glyph ──────────────────────────────────────────────────────────

struct CachedGlyph {
    uv_min: [f32; 2],
    uv_max: [f32; 2],
}

/// Shelf allocator state for the glyph atlas.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Shelf {
    cursor_x: u32,
    cursor_y: u32,
    row_height: u32,
    full: bool,
}

impl Default for Shelf {
    fn default() -> Self {
        Self { cursor_x: GLYPH_PADDING, cursor_y: GLYPH_PADDING, row_height: 0, full: false }
    }
}

impl Shelf {
    /// Reserves a `w × h` slot; returns its top-left or `None` once the atlas is full.
    fn allocate(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if self.full {
            return None;
        }
        if self.cursor_x + w + GLYPH_PADDING > ATLAS_SIZE {
            self.cursor_y += self.row_height + GLYPH_PADDING;
            self.cursor_x = GLYPH_PADDING;
            self.row_height = 0;
        }
        if self.cursor_y + h + GLYPH_PADDING > ATLAS_SIZE {
            self.full = true;
            return None;
        }
        let slot = (self.cursor_x, self.cursor_y);
        self.cursor_x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(slot)
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Encodes `DrawCmd::Text` as glyph quad instances.
///
/// Maintains a 2048 × 2048 R8Unorm glyph atlas. Glyphs are rasterized at
/// physical size (`size * scale_factor`) on first use and cached for the
/// renderer's lifetime, keyed by `fontdue::layout::GlyphRasterConfig`.
pub(super) struct TextRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    atlas_texture: Option<wgpu::Texture>,
    shelf: Shelf,
    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,

    instances: Vec<GlyphInstance>,
    buffer: InstanceBuffer,

    layout: Layout<()>,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            pipeline_format: None,
            pipeline: None,
            bind_group: None,
            viewport_ubo: None,
            atlas_texture: None,
            shelf: Shelf::default(),
            glyph_cache: HashMap::new(),
            instances: Vec::new(),
            buffer: InstanceBuffer::default(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRenderer {
    pub(super) fn begin(&mut self, ctx: &RenderCtx<'_>) {
        self.instances.clear();
        self.ensure_resources(ctx);
    }

    #[inline]
    pub(super) fn len(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Lays out `cmd`, rasterizing unseen glyphs into the atlas.
    pub(super) fn push(&mut self, ctx: &RenderCtx<'_>, cmd: &DrawCmd, fonts: &FontSystem) {
        let DrawCmd::Text(cmd) = cmd else { return; };
        if cmd.color.a <= 0.0 || cmd.text.is_empty() {
            return;
        }
        let Some(font) = fonts.get(cmd.font) else {
            log::warn!("TextRenderer: unknown FontId {:?}, skipping", cmd.font);
            return;
        };

        let scale = ctx.scale_factor.max(0.01);
        let color = cmd.color.to_array();
        let glyphs = fonts.place_glyphs(
            &mut self.layout,
            &cmd.text,
            cmd.font,
            cmd.size,
            cmd.origin,
            cmd.max_width,
            cmd.letter_spacing,
            scale,
        );

        for g in glyphs.into_iter().filter(|g| g.visible) {
            if !self.glyph_cache.contains_key(&g.key) {
                let (metrics, bitmap) = font.rasterize_config(g.key);
                if metrics.width == 0 || metrics.height == 0 {
                    continue;
                }
                match self.place_glyph(ctx, &bitmap, metrics.width as u32, metrics.height as u32) {
                    Some(entry) => {
                        self.glyph_cache.insert(g.key, entry);
                    }
                    None => continue,
                }
            }
            let Some(cached) = self.glyph_cache.get(&g.key) else { continue; };

            // Snap to the physical pixel grid, then back to logical space.
            let x = g.x.round();
            let y = g.y.round();
            self.instances.push(GlyphInstance {
                dst_min: [x / scale, y / scale],
                dst_max: [(x + g.width as f32) / scale, (y + g.height as f32) / scale],
                uv_min: cached.uv_min,
                uv_max: cached.uv_max,
                color,
            });
        }
    }

    pub(super) fn prepare(&mut self, ctx: &RenderCtx<'_>) {
        if let Some(ubo) = self.viewport_ubo.as_ref() {
            ctx.queue.write_buffer(
                ubo,
                0,
                bytemuck::bytes_of(&ViewportUniform::from_viewport(ctx.viewport)),
            );
        }
        self.buffer.upload(ctx, "folio text instances", &self.instances);
    }

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

    // ── atlas ──────────────────────────────────────────────────────────────

    fn place_glyph(
        &mut self,
        ctx: &RenderCtx<'_>,
        bitmap: &[u8],
        w: u32,
        h: u32,
    ) -> Option<CachedGlyph> {
        let was_full = self.shelf.full;
        let Some((gx, gy)) = self.shelf.allocate(w, h) else {
            if !was_full {
                log::warn!(
                    "TextRenderer: glyph atlas is full ({ATLAS_SIZE}×{ATLAS_SIZE}); \
                     some glyphs will not be rendered"
                );
            }
            return None;
        };

        let atlas = self.atlas_texture.as_ref()?;
        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: atlas,
                mip_level: 0,
                origin: wgpu::Origin3d { x: gx, y: gy, z: 0 },
                aspect: wgpu::TextureAspect::All,
            },
            bitmap,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(w),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d { width: w, height: h, depth_or_array_layers: 1 },
        );

        let atlas_f = ATLAS_SIZE as f32;
        Some(CachedGlyph {
            uv_min: [gx as f32 / atlas_f,       gy as f32 / atlas_f],
            uv_max: [(gx + w) as f32 / atlas_f, (gy + h) as f32 / atlas_f],
        })
    }

    // ── lazy init ──────────────────────────────────────────────────────────

    fn ensure_resources(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("folio text bgl"),
            entries: &[
                viewport_ubo_layout_entry(),
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline = quad_pipeline(
            ctx,
            "folio text pipeline",
            include_str!("shaders/text.wgsl"),
            &bgl,
            GlyphInstance::layout(),
        );

        // A new atlas means every cached UV is stale.
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("folio text atlas"),
            size: wgpu::Extent3d {
                width: ATLAS_SIZE,
                height: ATLAS_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        self.glyph_cache.clear();
        self.shelf = Shelf::default();

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("folio text sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        let ubo = create_viewport_ubo(ctx, "folio text viewport ubo");
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("folio text bind group"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry { binding: 0, resource: ubo.as_entire_binding() },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        log::debug!("TextRenderer: pipeline + atlas built for {:?}", ctx.surface_format);
        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.atlas_texture = Some(texture);
        self.bind_group = Some(bind_group);
        self.viewport_ubo = Some(ubo);
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Instance data layout (48 bytes):
///
///  offset  0  dst_min  [f32; 2]   loc 1
///  offset  8  dst_max  [f32; 2]   loc 2
///  offset 16  uv_min   [f32; 2]   loc 3
///  offset 24  uv_max   [f32; 2]   loc 4
///  offset 32  color    [f32; 4]   loc 5
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct GlyphInstance {
    dst_min: [f32; 2],
    dst_max: [f32; 2],
    uv_min:  [f32; 2],
    uv_max:  [f32; 2],
    color:   [f32; 4],
}

impl GlyphInstance {
    const ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        1 => Float32x2, // dst_min
        2 => Float32x2, // dst_max
        3 => Float32x2, // uv_min
        4 => Float32x2, // uv_max
        5 => Float32x4  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GlyphInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shelf_wraps_to_next_row() {
        let mut shelf = Shelf::default();
        assert_eq!(shelf.allocate(ATLAS_SIZE - 4, 10), Some((1, 1)));
        // Does not fit beside the first glyph: new row below it.
        assert_eq!(shelf.allocate(8, 5), Some((1, 12)));
    }

    #[test]
    fn shelf_reports_full_once_out_of_rows() {
        let mut shelf = Shelf::default();
        assert!(shelf.allocate(10, ATLAS_SIZE - 2).is_some());
        assert_eq!(shelf.allocate(ATLAS_SIZE - 2, 10), None);
        assert!(shelf.full);
        assert_eq!(shelf.allocate(1, 1), None);
    }
}
