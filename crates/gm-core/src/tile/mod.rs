//! Tiles: what sits on a map cell and how it gets there

mod kind;
mod wall;

pub use kind::{Tier, TileKind};
pub use wall::{Borders, Junction, WALL_TOKEN, resolve};

use log::trace;
use serde::{Deserialize, Serialize};

use crate::coord::Coord;
use crate::map::GameMap;

/// How a tile shows up on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    pub glyph: Option<char>,
    pub color: u8,
    pub code_point: Option<u32>,
}

/// A tile instance at a map position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub pos: Coord,
}

impl Tile {
    pub const fn new(kind: TileKind, pos: Coord) -> Self {
        Self { kind, pos }
    }

    pub const fn empty(pos: Coord) -> Self {
        Self::new(TileKind::Empty, pos)
    }

    pub const fn ground(pos: Coord) -> Self {
        Self::new(TileKind::Ground, pos)
    }

    pub const fn generic(pos: Coord) -> Self {
        Self::new(TileKind::Generic, pos)
    }

    pub const fn treasure(pos: Coord) -> Self {
        Self::new(TileKind::Treasure, pos)
    }

    pub const fn food(pos: Coord) -> Self {
        Self::new(TileKind::Food, pos)
    }

    /// An unresolved wall; its glyph is picked by [`Tile::place`]
    pub const fn wall(pos: Coord) -> Self {
        Self::new(TileKind::Wall(None), pos)
    }

    pub const fn vertical_door(pos: Coord) -> Self {
        Self::new(TileKind::VerticalDoor, pos)
    }

    pub const fn horizontal_door(pos: Coord) -> Self {
        Self::new(TileKind::HorizontalDoor, pos)
    }

    pub const fn water(pos: Coord) -> Self {
        Self::new(TileKind::Water, pos)
    }

    pub const fn token(&self) -> Option<char> {
        self.kind.token()
    }

    pub const fn drawing(&self) -> Option<char> {
        self.kind.drawing()
    }

    pub const fn color(&self) -> u8 {
        self.kind.color()
    }

    pub const fn code_point(&self) -> Option<u32> {
        self.kind.code_point()
    }

    pub const fn appearance(&self) -> Appearance {
        Appearance {
            glyph: self.drawing(),
            color: self.color(),
            code_point: self.code_point(),
        }
    }

    pub const fn tier(&self) -> Tier {
        self.kind.tier()
    }

    /// Fallback used when the caller has no preference
    pub const fn default_fallback(&self) -> TileKind {
        self.tier().default_fallback()
    }

    /// Register this tile at its own position.
    ///
    /// Walls first resolve their junction from the map's tokens, so the
    /// tile written into `objects` already carries its final glyph.
    pub fn place(&mut self, map: &mut GameMap) {
        if self.kind.is_wall() {
            self.kind = TileKind::Wall(Some(resolve(self.pos, &map.tokens)));
        }
        trace!("place {} at ({}, {})", self.kind, self.pos.row, self.pos.col);
        map.objects.insert(self.pos, *self);
    }

    /// Move to `target`, leaving a `fallback` tile at the old position.
    ///
    /// The wall junction is not recomputed and the token layer is left alone.
    pub fn move_to(&mut self, target: Coord, map: &mut GameMap, fallback: TileKind) {
        let old = self.pos;
        trace!(
            "move {} ({}, {}) -> ({}, {}), leaving {}",
            self.kind, old.row, old.col, target.row, target.col, fallback
        );
        map.objects.insert(old, Tile::new(fallback, old));
        self.pos = target;
        map.objects.insert(target, *self);
    }
}
