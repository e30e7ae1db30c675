//! Wall junction selection
//!
//! A wall looks at its four cardinal neighbours in the map's token layer and
//! picks the box-drawing glyph that connects to the walls next to it.
//! Diagonal neighbours play no part in the choice.

use bitflags::bitflags;
use hashbrown::HashMap;
use log::debug;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::coord::{Coord, Direction};
use crate::data::*;

/// Token that marks a wall in the token layer
pub const WALL_TOKEN: char = '#';

bitflags! {
    /// Which cardinal neighbours are walls
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Borders: u8 {
        const NORTH = 0x01;
        const SOUTH = 0x02;
        const EAST = 0x04;
        const WEST = 0x08;
    }
}

impl Borders {
    /// Read the wall neighbours of `pos` from a token layer.
    ///
    /// A missing token (edge of the map) counts as "no wall".
    pub fn from_tokens(pos: Coord, tokens: &HashMap<Coord, char>) -> Self {
        let neighbors = pos.neighbors();
        let mut borders = Borders::empty();
        for (dir, target) in neighbors.cardinal() {
            if tokens.get(&target) != Some(&WALL_TOKEN) {
                continue;
            }
            borders |= match dir {
                Direction::North => Borders::NORTH,
                Direction::South => Borders::SOUTH,
                Direction::East => Borders::EAST,
                Direction::West => Borders::WEST,
                _ => Borders::empty(),
            };
        }
        borders
    }

    pub const fn north(&self) -> bool {
        self.contains(Borders::NORTH)
    }

    pub const fn south(&self) -> bool {
        self.contains(Borders::SOUTH)
    }

    pub const fn east(&self) -> bool {
        self.contains(Borders::EAST)
    }

    pub const fn west(&self) -> bool {
        self.contains(Borders::WEST)
    }
}

/// Resolved wall shape
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Junction {
    /// No neighbouring walls
    #[default]
    Isolated,
    TopLeft,
    Horizontal,
    Vertical,
    TopRight,
    BottomRight,
    BottomLeft,
    TeeDown,
    TeeUp,
    TeeLeft,
    TeeRight,
    Cross,
}

impl Junction {
    /// Pick the junction for a set of wall neighbours.
    ///
    /// Rules are tried in order and the first match wins.
    pub fn classify(borders: Borders) -> Self {
        let (n, s, e, w) = (
            borders.north(),
            borders.south(),
            borders.east(),
            borders.west(),
        );

        if (!n && !w) && (e && s) {
            Junction::TopLeft
        } else if (!n && !s) && (e || w) {
            Junction::Horizontal
        } else if (!w && !e) && (n || s) {
            Junction::Vertical
        } else if (!n && !e) && (s && w) {
            Junction::TopRight
        } else if (!s && !e) && (n && w) {
            Junction::BottomRight
        } else if (!s && !w) && (n && e) {
            Junction::BottomLeft
        } else if !n && (w && s && e) {
            Junction::TeeDown
        } else if !s && (w && e && n) {
            Junction::TeeUp
        } else if !e && (n && s && w) {
            Junction::TeeLeft
        } else if !w && (n && s && e) {
            Junction::TeeRight
        } else if n && s && e && w {
            Junction::Cross
        } else {
            Junction::Isolated
        }
    }

    /// Box-drawing character for this junction
    pub const fn glyph(&self) -> char {
        match self {
            Junction::Isolated => ' ',
            Junction::TopLeft => '┌',
            Junction::Horizontal => '─',
            Junction::Vertical => '│',
            Junction::TopRight => '┐',
            Junction::BottomRight => '┘',
            Junction::BottomLeft => '└',
            Junction::TeeDown => '┬',
            Junction::TeeUp => '┴',
            Junction::TeeLeft => '┤',
            Junction::TeeRight => '├',
            Junction::Cross => '┼',
        }
    }

    /// Terminal code point, 0 when isolated
    pub const fn code_point(&self) -> u32 {
        match self {
            Junction::Isolated => 0,
            Junction::TopLeft => ACS_ULCORNER,
            Junction::Horizontal => ACS_HLINE,
            Junction::Vertical => ACS_VLINE,
            Junction::TopRight => ACS_URCORNER,
            Junction::BottomRight => ACS_LRCORNER,
            Junction::BottomLeft => ACS_LLCORNER,
            Junction::TeeDown => ACS_TTEE,
            Junction::TeeUp => ACS_BTEE,
            Junction::TeeLeft => ACS_RTEE,
            Junction::TeeRight => ACS_LTEE,
            Junction::Cross => ACS_PLUS,
        }
    }

    pub const fn color(&self) -> u8 {
        match self {
            Junction::Horizontal => CLR_WALL_HORIZONTAL,
            _ => CLR_WALL,
        }
    }
}

/// Junction for a wall at `pos`, given the map's token layer
pub fn resolve(pos: Coord, tokens: &HashMap<Coord, char>) -> Junction {
    let borders = Borders::from_tokens(pos, tokens);
    let junction = Junction::classify(borders);
    debug!(
        "wall at ({}, {}): borders {:?} -> {}",
        pos.row, pos.col, borders, junction
    );
    junction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(walls: &[(i32, i32)]) -> HashMap<Coord, char> {
        walls
            .iter()
            .map(|&(row, col)| (Coord::new(row, col), WALL_TOKEN))
            .collect()
    }

    #[test]
    fn test_borders_ignore_diagonals() {
        let t = tokens(&[(0, 0), (0, 2), (2, 0), (2, 2)]);
        assert_eq!(Borders::from_tokens(Coord::new(1, 1), &t), Borders::empty());
    }

    #[test]
    fn test_borders_only_wall_tokens_count() {
        let mut t = tokens(&[(0, 1)]);
        t.insert(Coord::new(2, 1), '|');
        t.insert(Coord::new(1, 2), ' ');
        assert_eq!(Borders::from_tokens(Coord::new(1, 1), &t), Borders::NORTH);
    }

    #[test]
    fn test_borders_missing_tokens_are_not_walls() {
        let t = HashMap::new();
        assert_eq!(Borders::from_tokens(Coord::new(0, 0), &t), Borders::empty());
    }

    #[test]
    fn test_horizontal_color() {
        assert_eq!(Junction::Horizontal.color(), CLR_WALL_HORIZONTAL);
        assert_eq!(Junction::Vertical.color(), CLR_WALL);
        assert_eq!(Junction::Cross.color(), CLR_WALL);
        assert_eq!(Junction::Isolated.color(), CLR_WALL);
    }

    #[test]
    fn test_resolve_corner() {
        let t = tokens(&[(1, 2), (2, 1)]);
        assert_eq!(resolve(Coord::new(1, 1), &t), Junction::TopLeft);
    }
}
