//! Square index type.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;
use crate::board::geometry::{is_valid_square, NUM_TILES, NUM_TILES_PER_ROW};

/// A validated square index in `0..64`.
///
/// Index 0 is the top-left corner of the textual dump (a8) and index 63 the
/// bottom-right (h1). `column = index % 8`, `row = index / 8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Square(u8);

impl Square {
    /// Create a square, returning `None` for indices outside `0..64`.
    #[inline]
    #[must_use]
    pub const fn new(index: i32) -> Option<Self> {
        if is_valid_square(index) {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Get the flat index (0-63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the column (0-7)
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.index() % NUM_TILES_PER_ROW
    }

    /// Get the row (0-7, row 0 = Black's back rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.index() / NUM_TILES_PER_ROW
    }

    /// Add a raw index offset. Only bounds are checked here; callers guard
    /// against wrapping across the board edge themselves.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i32) -> Option<Self> {
        Square::new(self.0 as i32 + delta)
    }

    /// Iterate over all 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_TILES as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (self.column() as u8 + b'a') as char;
        let rank = NUM_TILES_PER_ROW - self.row();
        write!(f, "{file}{rank}")
    }
}

impl TryFrom<i32> for Square {
    type Error = SquareError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        Square::new(index).ok_or(SquareError::OutOfBounds {
            index: i64::from(index),
        })
    }
}

impl TryFrom<usize> for Square {
    type Error = SquareError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < NUM_TILES {
            Ok(Square(index as u8))
        } else {
            Err(SquareError::OutOfBounds {
                index: i64::try_from(index).unwrap_or(i64::MAX),
            })
        }
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::try_from(index as usize)
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl From<Square> for usize {
    fn from(square: Square) -> usize {
        square.index()
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let column = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match chars[1] {
            '1'..='8' => chars[1] as usize - '0' as usize,
            _ => return Err(invalid()),
        };

        let row = NUM_TILES_PER_ROW - rank;
        Ok(Square((row * NUM_TILES_PER_ROW + column) as u8))
    }
}
