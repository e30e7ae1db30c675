//! Static display data: colors and terminal code points

pub mod colors;
pub mod glyphs;

pub use colors::*;
pub use glyphs::*;
