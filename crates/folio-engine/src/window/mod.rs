//! The platform loop: one `winit` window with a GPU surface, redrawn every
//! frame.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
