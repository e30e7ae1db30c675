//! Map coordinates and neighbour lookup

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// A (row, column) map position.
///
/// Rows grow downwards, columns grow to the right. Any pair of integers is
/// a valid key; positions outside the loaded grid simply have nothing there.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Position one step away in the given direction
    pub const fn step(self, dir: Direction) -> Self {
        let (drow, dcol) = dir.offset();
        Self::new(self.row + drow, self.col + dcol)
    }

    /// All eight surrounding positions
    pub fn neighbors(self) -> Neighbors {
        Neighbors { center: self }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Compass direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Row/column offset of a single step
    pub const fn offset(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    pub const fn is_cardinal(&self) -> bool {
        matches!(
            self,
            Direction::North | Direction::South | Direction::East | Direction::West
        )
    }

    /// The four cardinal directions
    pub fn cardinals() -> impl Iterator<Item = Direction> {
        Direction::iter().filter(Direction::is_cardinal)
    }
}

/// The ring of eight positions around a center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors {
    center: Coord,
}

impl Neighbors {
    pub const fn get(&self, dir: Direction) -> Coord {
        self.center.step(dir)
    }

    pub const fn north(&self) -> Coord {
        self.get(Direction::North)
    }

    pub const fn south(&self) -> Coord {
        self.get(Direction::South)
    }

    pub const fn east(&self) -> Coord {
        self.get(Direction::East)
    }

    pub const fn west(&self) -> Coord {
        self.get(Direction::West)
    }

    /// Every neighbour, diagonals included
    pub fn iter(&self) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::iter().map(|dir| (dir, self.get(dir)))
    }

    /// Only the north/south/east/west neighbours
    pub fn cardinal(&self) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        self.iter().filter(|(dir, _)| dir.is_cardinal())
    }
}
