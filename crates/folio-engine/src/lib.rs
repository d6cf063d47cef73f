//! Folio engine crate.
//!
//! Owns the platform + GPU runtime pieces the page is drawn with: the winit
//! loop, the wgpu device, input translation, the draw list and its renderers.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
