//! Board tiles.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;

/// Contents of one square.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Tile {
    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        matches!(self, Tile::Occupied(_))
    }

    /// The piece on this tile, if any
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> Option<&Piece> {
        match self {
            Tile::Empty => None,
            Tile::Occupied(piece) => Some(piece),
        }
    }
}

impl From<Option<Piece>> for Tile {
    fn from(piece: Option<Piece>) -> Self {
        piece.map_or(Tile::Empty, Tile::Occupied)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty => f.pad("-"),
            Tile::Occupied(piece) => f.pad(&piece.to_char().to_string()),
        }
    }
}
