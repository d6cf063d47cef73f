//! GPU rendering subsystem.
//!
//! [`SceneRenderer`] consumes a `scene::DrawList` and issues GPU commands via
//! wgpu. Shapes (SDF quads with procedural fills) and text (glyph atlas) each
//! own their pipeline and instance buffer.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using a viewport uniform.

mod common;
mod ctx;
mod scene;
mod shapes;
mod text;

pub use ctx::{RenderCtx, RenderTarget};
pub use scene::SceneRenderer;
