//! gm-core: Tile model for glyphmap
//!
//! Tiles know how they display (glyph, color, code point) and how they
//! register themselves on a [`GameMap`]. Walls pick a box-drawing glyph from
//! the walls around them when placed.
//!
//! This crate performs no terminal I/O. The map is always passed in
//! explicitly; there is no global map state.

pub mod coord;
pub mod data;
pub mod errors;
pub mod map;
pub mod options;
pub mod tile;

pub use coord::{Coord, Direction, Neighbors};
pub use errors::LoadError;
pub use map::{GameMap, GlyphMode};
pub use options::{MapOptions, OptionsError};
pub use tile::{Borders, Junction, Tier, Tile, TileKind};
