use winit::window::{Window, WindowId};

use crate::coords::Viewport;
use crate::device::{Gpu, GpuFrame, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// The window a frame is being drawn for.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

impl WindowCtx<'_> {
    /// Inner size in logical px, the unit all page geometry uses.
    pub fn logical_size(&self) -> (f32, f32) {
        let size = self.window.inner_size().to_logical::<f64>(self.window.scale_factor());
        (size.width as f32, size.height as f32)
    }

    pub fn scale_factor(&self) -> f32 {
        self.window.scale_factor() as f32
    }
}

/// Everything `App::on_frame` gets for one redraw.
///
/// `input` is the held state after this frame's events; `input_frame` holds
/// only the transitions since the previous frame.
pub struct FrameCtx<'a, 'w> {
    pub window:      WindowCtx<'a>,
    pub gpu:         &'a mut Gpu<'w>,
    pub input:       &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time:        FrameTime,
}

impl FrameCtx<'_, '_> {
    /// Acquires the next surface texture, fills it with `clear`, lets `draw`
    /// record on top and presents.
    ///
    /// A lost or outdated surface skips the frame after reconfiguring; only a
    /// fatal surface error returns `Exit`.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => AppControl::Exit,
                    _ => AppControl::Continue,
                };
            }
        };

        clear_pass(&mut frame, clear);

        let (w, h) = self.window.logical_size();
        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            Viewport::new(w, h),
            self.window.scale_factor(),
        );
        draw(&rctx, &mut RenderTarget::new(&mut frame.encoder, &frame.view));

        self.window.window.pre_present_notify();
        self.gpu.submit(frame);
        AppControl::Continue
    }
}

/// Page background. The pass ends before any renderer opens its own.
fn clear_pass(frame: &mut GpuFrame, color: Color) {
    let load = wgpu::LoadOp::Clear(wgpu::Color {
        r: color.r as f64,
        g: color.g as f64,
        b: color.b as f64,
        a: color.a as f64,
    });
    let _ = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("folio clear"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: &frame.view,
            resolve_target: None,
            ops: wgpu::Operations { load, store: wgpu::StoreOp::Store },
            depth_slice: None,
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
        multiview_mask: None,
    });
}
