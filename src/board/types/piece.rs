//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Parse a piece kind from a letter, ignoring case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Uppercase one-letter name
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Returns true if this piece moves along rays (Bishop, Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Chess colors.
///
/// White starts on the high indices and moves toward row 0; Black starts on
/// row 0 and moves toward higher indices.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors (White first)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Forward direction sign applied to pawn offsets (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn direction(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    #[inline]
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A single unit on the board: what it is, whose it is, and where it stands.
///
/// Pieces are values. Nothing in this crate moves a piece in place; a moved
/// piece would be a new value at its destination.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Square,
    first_move: bool,
}

impl Piece {
    /// Create a piece that has not moved yet.
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color, position: Square) -> Self {
        Piece {
            kind,
            color,
            position,
            first_move: true,
        }
    }

    /// Same piece with the first-move flag replaced.
    #[inline]
    #[must_use]
    pub const fn with_first_move(mut self, first_move: bool) -> Self {
        self.first_move = first_move;
        self
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Square {
        self.position
    }

    /// True until the piece has made a move. Only the pawn double step reads it.
    #[inline]
    #[must_use]
    pub const fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// Board letter: uppercase for White, lowercase for Black
    #[inline]
    #[must_use]
    pub fn to_char(&self) -> char {
        let c = self.kind.to_char();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
