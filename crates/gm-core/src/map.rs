//! The game map: object and token layers
//!
//! `objects` holds the tile at each position. `tokens` is the raw character
//! grid the map was built from; walls consult it when picking their glyph
//! and nothing else writes to it after loading.

use std::path::Path;

use hashbrown::HashMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::coord::Coord;
use crate::errors::LoadError;
use crate::options::MapOptions;
use crate::tile::{Tile, TileKind};

/// How tiles are turned into characters by [`GameMap::render_rows`]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum GlyphMode {
    /// Raw map tokens
    Classic,
    /// Tile drawings: box-drawing walls, shaded doors and water
    #[default]
    Fancy,
}

/// Coordinate for a line/character index pair of a token grid
fn grid_coord(row: usize, col: usize) -> Result<Coord, LoadError> {
    match (i32::try_from(row), i32::try_from(col)) {
        (Ok(r), Ok(c)) => Ok(Coord::new(r, c)),
        _ => Err(LoadError::OutOfRange { row, col }),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameMap {
    pub objects: HashMap<Coord, Tile>,
    pub tokens: HashMap<Coord, char>,
}

impl GameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a token grid.
    ///
    /// Each line is a row and each character a column. Every token is
    /// recorded before any tile is placed so walls see the whole grid.
    pub fn from_token_grid(text: &str, options: &MapOptions) -> Result<Self, LoadError> {
        let mut map = Self::new();

        for (row, line) in text.lines().enumerate() {
            for (col, token) in line.chars().enumerate() {
                map.tokens.insert(grid_coord(row, col)?, token);
            }
        }

        let mut cells: Vec<(Coord, char)> = map.tokens.iter().map(|(&c, &t)| (c, t)).collect();
        cells.sort_unstable();

        for (pos, token) in cells {
            match TileKind::from_token(token) {
                Some(kind) => Tile::new(kind, pos).place(&mut map),
                None if options.strict => {
                    return Err(LoadError::UnknownToken {
                        token,
                        row: pos.row,
                        col: pos.col,
                    });
                }
                None => warn!(
                    "skipping unknown token '{}' at ({}, {})",
                    token, pos.row, pos.col
                ),
            }
        }

        debug!(
            "loaded map: {} tokens, {} objects",
            map.tokens.len(),
            map.objects.len()
        );
        Ok(map)
    }

    /// Read and build a map from a token-grid file
    pub fn load_from_file(path: &Path, options: &MapOptions) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_token_grid(&text, options)
    }

    pub fn tile_at(&self, pos: Coord) -> Option<&Tile> {
        self.objects.get(&pos)
    }

    pub fn token_at(&self, pos: Coord) -> Option<char> {
        self.tokens.get(&pos).copied()
    }

    pub fn set_token(&mut self, pos: Coord, token: char) {
        self.tokens.insert(pos, token);
    }

    /// Number of occupied positions
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Move whatever occupies `from` to `to`, leaving the tile's default
    /// fallback behind. Returns `false` when `from` is unoccupied.
    pub fn move_tile(&mut self, from: Coord, to: Coord) -> bool {
        let Some(mut tile) = self.tile_at(from).copied() else {
            return false;
        };
        let fallback = tile.default_fallback();
        tile.move_to(to, self, fallback);
        true
    }

    /// Inclusive (min, max) corners over both layers, `None` for an empty map
    pub fn bounds(&self) -> Option<(Coord, Coord)> {
        let mut positions = self.objects.keys().chain(self.tokens.keys());
        let first = *positions.next()?;
        let (min, max) = positions.fold((first, first), |(min, max), p| {
            (
                Coord::new(min.row.min(p.row), min.col.min(p.col)),
                Coord::new(max.row.max(p.row), max.col.max(p.col)),
            )
        });
        Some((min, max))
    }

    /// Tiles in row-major order
    pub fn tiles_sorted(&self) -> Vec<Tile> {
        let mut tiles: Vec<Tile> = self.objects.values().copied().collect();
        tiles.sort_unstable_by_key(|t| t.pos);
        tiles
    }

    /// Character shown for the cell at `pos`
    pub fn glyph_at(&self, pos: Coord, mode: GlyphMode) -> char {
        let Some(tile) = self.tile_at(pos) else {
            return ' ';
        };
        let glyph = match mode {
            GlyphMode::Classic => tile.token(),
            GlyphMode::Fancy => tile.drawing().or_else(|| tile.token()),
        };
        glyph.unwrap_or(' ')
    }

    /// One string per row between the map bounds
    pub fn render_rows(&self, mode: GlyphMode) -> Vec<String> {
        let Some((min, max)) = self.bounds() else {
            return Vec::new();
        };
        (min.row..=max.row)
            .map(|row| {
                (min.col..=max.col)
                    .map(|col| self.glyph_at(Coord::new(row, col), mode))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}
