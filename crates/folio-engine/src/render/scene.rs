use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::scene::{DrawList, Pipeline};
use crate::text::FontSystem;

use super::common::{logical_clip_to_scissor, QUAD_INDICES, QUAD_VERTICES};
use super::shapes::ShapeRenderer;
use super::text::TextRenderer;
use super::{RenderCtx, RenderTarget};

/// One draw call: a contiguous instance range of a single pipeline under one scissor.
#[derive(Debug, Clone, PartialEq)]
struct DrawCall {
    pipeline: Pipeline,
    scissor: (u32, u32, u32, u32),
    instances: Range<u32>,
}

/// Draws a [`DrawList`] in a single render pass, in exact paint order.
///
/// Shapes and text are encoded into separate instance buffers, but draw calls
/// are issued per [`crate::scene::Batch`], so a text run recorded between two
/// shapes is drawn between them.
#[derive(Default)]
pub struct SceneRenderer {
    shapes: ShapeRenderer,
    text: TextRenderer,
    quad: Option<(wgpu::Buffer, wgpu::Buffer)>,
    calls: Vec<DrawCall>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        fonts: &FontSystem,
    ) {
        self.shapes.begin();
        self.text.begin(ctx);
        self.calls.clear();

        for batch in draw_list.batches() {
            let Some(scissor) =
                logical_clip_to_scissor(batch.clip_rect, ctx.viewport, ctx.scale_factor)
            else {
                continue;
            };

            let start = match batch.pipeline {
                Pipeline::Shapes => self.shapes.len(),
                Pipeline::Text => self.text.len(),
            };
            for pos in batch.range.clone() {
                let Some(item) = draw_list.item_in_paint_order(pos) else { continue; };
                match batch.pipeline {
                    Pipeline::Shapes => self.shapes.push(&item.cmd),
                    Pipeline::Text => self.text.push(ctx, &item.cmd, fonts),
                }
            }
            let end = match batch.pipeline {
                Pipeline::Shapes => self.shapes.len(),
                Pipeline::Text => self.text.len(),
            };

            if end > start {
                self.calls.push(DrawCall { pipeline: batch.pipeline, scissor, instances: start..end });
            }
        }

        if self.calls.is_empty() {
            return;
        }

        self.shapes.prepare(ctx);
        self.text.prepare(ctx);
        let (quad_vbo, quad_ibo) = self.quad.get_or_insert_with(|| {
            let vbo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("folio quad vbo"),
                contents: bytemuck::cast_slice(&QUAD_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });
            let ibo = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("folio quad ibo"),
                contents: bytemuck::cast_slice(&QUAD_INDICES),
                usage: wgpu::BufferUsages::INDEX,
            });
            (vbo, ibo)
        });

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("folio scene pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);

        let mut bound: Option<Pipeline> = None;
        for call in &self.calls {
            if bound != Some(call.pipeline) {
                let ok = match call.pipeline {
                    Pipeline::Shapes => self.shapes.bind(&mut rpass),
                    Pipeline::Text => self.text.bind(&mut rpass),
                };
                if !ok {
                    bound = None;
                    continue;
                }
                bound = Some(call.pipeline);
            }

            let (x, y, w, h) = call.scissor;
            rpass.set_scissor_rect(x, y, w, h);
            match call.pipeline {
                Pipeline::Shapes => self.shapes.draw(&mut rpass, call.instances.clone()),
                Pipeline::Text => self.text.draw(&mut rpass, call.instances.clone()),
            }
        }
    }
}
