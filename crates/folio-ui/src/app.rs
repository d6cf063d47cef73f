use std::collections::HashMap;

use winit::dpi::LogicalSize;

use folio_engine::coords::Vec2;
use folio_engine::core::{App as EngineApp, AppControl, FrameCtx};
use folio_engine::input::MouseButton;
use folio_engine::paint::Color;
use folio_engine::render::SceneRenderer;
use folio_engine::text::FontId;
use folio_engine::window::{Runtime, RuntimeConfig};

use crate::scene::{UiInput, UiScene};
use crate::surface::{DisplaySurface, SurfaceEvent};
use crate::widget::Element;

// ── FontMap ───────────────────────────────────────────────────────────────

/// A name-keyed map of loaded font handles.
///
/// Passed to the builder closure in [`Application::run_widget`] so page code
/// can look fonts up by name without touching engine internals.
#[derive(Debug, Clone, Default)]
pub struct FontMap(pub(crate) HashMap<String, FontId>);

impl FontMap {
    /// Returns the [`FontId`] registered under `name`, or `None` if the name
    /// was not registered or the font failed to load.
    pub fn get(&self, name: &str) -> Option<FontId> {
        self.0.get(name).copied()
    }

    /// Like [`get`](Self::get), falling back to the first font that loaded.
    pub fn get_or_default(&self, name: &str) -> FontId {
        self.get(name).unwrap_or_default()
    }
}

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("Folio")
///     .font("serif", serif_bytes)
///     .hide_os_cursor(true)
///     .run_widget(|fonts, surface| Page::new(fonts, surface).into());
/// ```
pub struct Application {
    title:          String,
    width:          f64,
    height:         f64,
    fonts:          Vec<(String, Vec<u8>)>,
    background:     Color,
    hide_os_cursor: bool,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title:          "folio".to_string(),
            width:          1280.0,
            height:         800.0,
            fonts:          Vec::new(),
            background:     Color::white(),
            hide_os_cursor: false,
        }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width  = width;
        self.height = height;
        self
    }

    /// Register a named font, retrievable later through [`FontMap::get`].
    ///
    /// Fonts load in registration order; the first one that loads is the
    /// default face.
    pub fn font(mut self, name: impl Into<String>, data: Vec<u8>) -> Self {
        self.fonts.push((name.into(), data));
        self
    }

    /// Clear colour behind the widget tree.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Hide the platform cursor while it is over the window.
    pub fn hide_os_cursor(mut self, hide: bool) -> Self {
        self.hide_os_cursor = hide;
        self
    }

    fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title:          self.title.clone(),
            initial_size:   LogicalSize::new(self.width, self.height),
            cursor_visible: !self.hide_os_cursor,
            ..RuntimeConfig::default()
        }
    }

    // ── Entry point ───────────────────────────────────────────────────────

    /// Start the event loop with a custom root widget.
    ///
    /// `build` is called once after fonts are loaded and receives the window's
    /// [`DisplaySurface`]; the returned [`Element`] persists across frames and
    /// is mutated in place via `on_event`.
    ///
    /// This never returns.
    pub fn run_widget<F>(self, build: F) -> !
    where
        F: FnOnce(&FontMap, &DisplaySurface) -> Element,
    {
        let config = self.runtime_config();
        let state = UiAppState::new(self, build);

        if let Err(e) = Runtime::run(config, state) {
            log::error!("runtime error: {e:#}");
            std::process::exit(1);
        }
        // Runtime::run only returns early on a fatal error; a normal close
        // still ends up here.
        std::process::exit(0);
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Implements `folio_engine::core::App`. Page code never sees this type.
struct UiAppState {
    ui_scene:   UiScene,
    renderer:   SceneRenderer,
    background: Color,

    surface: DisplaySurface,
    root:    Element,
}

impl UiAppState {
    fn new<F>(app: Application, build: F) -> Self
    where
        F: FnOnce(&FontMap, &DisplaySurface) -> Element,
    {
        let mut ui_scene = UiScene::new();
        let mut fonts = FontMap::default();
        for (name, bytes) in &app.fonts {
            match ui_scene.load_font(bytes) {
                Ok(id) => {
                    fonts.0.insert(name.clone(), id);
                }
                Err(e) => log::warn!("failed to load font '{name}': {e}"),
            }
        }

        let surface = DisplaySurface::new();
        let root = build(&fonts, &surface);
        Self {
            ui_scene,
            renderer:   SceneRenderer::new(),
            background: app.background,
            surface,
            root,
        }
    }
}

impl EngineApp for UiAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Every platform move reaches subscribers, not just the last one.
        for &(x, y) in &ctx.input_frame.pointer_moves {
            self.surface.emit(SurfaceEvent::PointerMove { x, y });
        }

        let (w, h) = ctx.window.logical_size();
        let viewport = Vec2::new(w, h);
        let ui_input = UiInput {
            mouse_pos:     ctx.input.pointer_pos.map(|(x, y)| Vec2::new(x, y)),
            mouse_clicked: ctx.input_frame.buttons_released.contains(&MouseButton::Left),
            keys_pressed:  ctx.input_frame.keys_pressed.clone(),
            modifiers:     ctx.input.modifiers,
            scroll_delta:  ctx.input_frame.scroll_delta,
            dt:            ctx.time.dt,
        };

        let _ = self.ui_scene.frame_ref(&mut self.root, viewport, &ui_input);

        // ── Render ────────────────────────────────────────────────────────
        let dl       = &mut self.ui_scene.draw_list;
        let fs       = &self.ui_scene.font_system;
        let renderer = &mut self.renderer;

        ctx.render(self.background, |rctx, target| {
            renderer.render(rctx, target, dl, fs);
        })
    }
}
