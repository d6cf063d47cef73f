//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)
//! - split paint order into pipeline/clip batches for the renderer

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::{DrawCmd, Pipeline};
pub use key::SortKey;
pub use list::{Batch, DrawItem, DrawList};
pub use shapes::Border;
pub use shapes::circle::CircleCmd;
pub use shapes::line::LineCmd;
pub use shapes::rect::RectCmd;
pub use shapes::rounded_rect::RoundedRectCmd;
pub use shapes::text::TextCmd;
pub use z_index::ZIndex;
