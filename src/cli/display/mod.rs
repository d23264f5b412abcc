//! Terminal rendering of the clock face.

pub mod colors;
pub mod format;

pub use format::{render_face, GlyphSet};
