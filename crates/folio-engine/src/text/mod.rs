//! Font loading and text measurement.
//!
//! Layout is done with `fontdue`; the same routine feeds both measurement
//! (UI layout) and glyph placement (text renderer) so the two always agree.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, PlacedGlyph};
