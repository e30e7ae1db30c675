//! Tile kinds and their display attributes

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::wall::{Junction, WALL_TOKEN};
use crate::data::*;

/// Layer a tile lives on.
///
/// Decides what is left behind when a tile moves away: moving ground
/// leaves a void, moving an object leaves ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Tier {
    Empty,
    Ground,
    Object,
}

impl Tier {
    /// Kind placed at a vacated position unless the caller picks another
    pub const fn default_fallback(&self) -> TileKind {
        match self {
            Tier::Empty | Tier::Ground => TileKind::Empty,
            Tier::Object => TileKind::Ground,
        }
    }
}

/// What occupies a map cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum TileKind {
    /// Nothing at all, not even floor
    #[default]
    Empty,
    Ground,
    /// Map object with no display of its own
    Generic,
    Treasure,
    Food,
    /// `None` until the wall has been placed on a map
    Wall(Option<Junction>),
    VerticalDoor,
    HorizontalDoor,
    Water,
}

impl TileKind {
    /// Kind for a map token, if the token is known
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            ' ' => Some(TileKind::Ground),
            '$' => Some(TileKind::Treasure),
            'f' => Some(TileKind::Food),
            WALL_TOKEN => Some(TileKind::Wall(None)),
            '|' => Some(TileKind::VerticalDoor),
            '-' => Some(TileKind::HorizontalDoor),
            'w' => Some(TileKind::Water),
            _ => None,
        }
    }

    pub const fn tier(&self) -> Tier {
        match self {
            TileKind::Empty => Tier::Empty,
            TileKind::Ground => Tier::Ground,
            _ => Tier::Object,
        }
    }

    pub const fn is_wall(&self) -> bool {
        matches!(self, TileKind::Wall(_))
    }

    /// Serialization token; the void and generic objects have none
    pub const fn token(&self) -> Option<char> {
        match self {
            TileKind::Empty | TileKind::Generic => None,
            TileKind::Ground => Some(' '),
            TileKind::Treasure => Some('$'),
            TileKind::Food => Some('f'),
            TileKind::Wall(_) => Some(WALL_TOKEN),
            TileKind::VerticalDoor => Some('|'),
            TileKind::HorizontalDoor => Some('-'),
            TileKind::Water => Some('w'),
        }
    }

    pub const fn drawing(&self) -> Option<char> {
        match self {
            TileKind::Empty | TileKind::Generic | TileKind::Food => None,
            TileKind::Ground => Some(' '),
            TileKind::Treasure => Some('$'),
            TileKind::Wall(junction) => match junction {
                Some(j) => Some(j.glyph()),
                None => None,
            },
            TileKind::VerticalDoor | TileKind::HorizontalDoor | TileKind::Water => {
                Some(BLOCK_GLYPH)
            }
        }
    }

    pub const fn color(&self) -> u8 {
        match self {
            TileKind::Empty | TileKind::Ground | TileKind::Generic => CLR_NONE,
            TileKind::Treasure => CLR_TREASURE,
            TileKind::Food => CLR_FOOD,
            TileKind::Wall(Some(j)) => j.color(),
            TileKind::Wall(None) => CLR_WALL,
            TileKind::VerticalDoor | TileKind::HorizontalDoor => CLR_DOOR,
            TileKind::Water => CLR_WATER,
        }
    }

    /// Explicit terminal code point; `None` means "encode the drawing"
    pub const fn code_point(&self) -> Option<u32> {
        match self {
            TileKind::Empty | TileKind::Generic => Some(0),
            TileKind::Ground => Some(' ' as u32),
            TileKind::Treasure | TileKind::Food => None,
            TileKind::Wall(junction) => match junction {
                Some(j) => Some(j.code_point()),
                None => None,
            },
            TileKind::VerticalDoor | TileKind::HorizontalDoor | TileKind::Water => {
                Some(ACS_CKBOARD)
            }
        }
    }
}
