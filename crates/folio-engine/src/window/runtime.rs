use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::FrameClock;

/// How the page window is opened.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// `false` hides the OS pointer over the window (the page draws its own).
    pub cursor_visible: bool,
    pub gpu: GpuInit,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "folio".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
            cursor_visible: true,
            gpu: GpuInit::default(),
        }
    }
}

/// Drives one window: opens it on resume, feeds it input, redraws it
/// continuously and exits when it closes.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: CoreApp + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        log::info!(
            "runtime starting: \"{}\" {}x{}",
            config.title,
            config.initial_size.width,
            config.initial_size.height
        );

        let mut host = Host { config, app, page: None, exiting: false };
        event_loop
            .run_app(&mut host)
            .context("winit event loop terminated with error")?;

        log::info!("runtime stopped");
        Ok(())
    }
}

// ── window + surface ──────────────────────────────────────────────────────

/// The window and everything borrowed from it. `gpu` holds a surface tied to
/// `window`, hence the self-reference.
#[self_referencing]
struct PageWindow {
    input: InputState,
    pending: InputFrame,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl PageWindow {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(config.initial_size);
        let window = event_loop.create_window(attrs).context("failed to create window")?;
        window.set_cursor_visible(config.cursor_visible);

        let gpu_init = config.gpu.clone();
        PageWindowTryBuilder {
            input: InputState::default(),
            pending: InputFrame::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed for window")
    }

    fn id(&self) -> WindowId {
        self.borrow_window().id()
    }

    fn request_redraw(&self) {
        self.borrow_window().request_redraw();
    }

    fn record(&mut self, event: &WindowEvent) {
        self.with_mut(|f| {
            if let Some(ev) = translate_window_event(f.window, f.input, event) {
                f.input.apply_event(f.pending, ev);
            }
        });
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        self.with_gpu_mut(|gpu| gpu.resize(size));
        self.request_redraw();
    }

    /// Hands one frame to `app`, then starts a fresh input frame.
    fn frame<A: CoreApp>(&mut self, app: &mut A) -> AppControl {
        let id = self.id();
        self.with_mut(|f| {
            let mut ctx = FrameCtx {
                window: WindowCtx { id, window: f.window },
                gpu: f.gpu,
                input: f.input,
                input_frame: f.pending,
                time: f.clock.tick(),
            };
            let control = app.on_frame(&mut ctx);
            f.pending.clear();
            control
        })
    }
}

// ── event loop handler ────────────────────────────────────────────────────

struct Host<A> {
    config: RuntimeConfig,
    app: A,
    page: Option<PageWindow>,
    exiting: bool,
}

impl<A> Host<A> {
    fn exit(&mut self, event_loop: &ActiveEventLoop) {
        if !self.exiting {
            log::debug!("exit requested");
        }
        self.exiting = true;
        self.page = None;
        event_loop.exit();
    }
}

impl<A> ApplicationHandler for Host<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.page.is_some() {
            return;
        }
        match PageWindow::open(event_loop, &self.config) {
            Ok(page) => {
                log::debug!("window {:?} created", page.id());
                page.request_redraw();
                self.page = Some(page);
            }
            Err(e) => {
                log::error!("failed to create window: {e:#}");
                self.exit(event_loop);
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exiting {
            event_loop.exit();
            return;
        }
        event_loop.set_control_flow(ControlFlow::Wait);

        // Transitions and the cursor follower animate every frame.
        if let Some(page) = &self.page {
            page.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(page) = self.page.as_mut().filter(|p| p.id() == window_id) else {
            return;
        };
        page.record(&event);

        match event {
            WindowEvent::CloseRequested => {
                log::debug!("window {window_id:?} closed");
                self.exit(event_loop);
            }
            WindowEvent::Resized(size) => page.resize(size),
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = page.borrow_window().inner_size();
                page.resize(size);
            }
            WindowEvent::RedrawRequested => {
                if page.frame(&mut self.app) == AppControl::Exit {
                    self.exit(event_loop);
                }
            }
            _ => {}
        }
    }
}
