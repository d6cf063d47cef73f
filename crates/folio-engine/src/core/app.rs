use super::ctx::FrameCtx;

/// What the runtime should do after a callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// The layer above the runtime. Input is already folded into
/// [`FrameCtx::input`] by the time `on_frame` runs.
pub trait App {
    /// One redraw of the window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
