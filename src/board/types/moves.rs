//! Move types and move list.

use std::fmt;
use std::hash::{Hash, Hasher};

use super::piece::Piece;
use super::square::Square;
use crate::board::Board;

/// Flat list of generated moves.
pub type MoveList<'b> = Vec<Move<'b>>;

/// A pseudo-legal move, tied to the board it was generated from.
///
/// A move is only a description. Nothing here changes the board; the moved
/// piece still reports its origin square through [`Move::from`].
#[derive(Clone, Copy)]
pub enum Move<'b> {
    /// Move to an empty square
    Quiet {
        board: &'b Board,
        piece: Piece,
        destination: Square,
    },
    /// Move onto a square held by an opposing piece
    Capture {
        board: &'b Board,
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
}

impl<'b> Move<'b> {
    /// Create a quiet move
    #[inline]
    #[must_use]
    pub const fn quiet(board: &'b Board, piece: Piece, destination: Square) -> Self {
        Move::Quiet {
            board,
            piece,
            destination,
        }
    }

    /// Create a capture move
    #[inline]
    #[must_use]
    pub const fn capture(
        board: &'b Board,
        piece: Piece,
        destination: Square,
        captured: Piece,
    ) -> Self {
        Move::Capture {
            board,
            piece,
            destination,
            captured,
        }
    }

    /// The position this move was generated from
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &'b Board {
        match *self {
            Move::Quiet { board, .. } | Move::Capture { board, .. } => board,
        }
    }

    /// The piece being moved, as it stands before the move
    #[inline]
    #[must_use]
    pub const fn piece(&self) -> &Piece {
        match self {
            Move::Quiet { piece, .. } | Move::Capture { piece, .. } => piece,
        }
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.piece().position()
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn destination(&self) -> Square {
        match *self {
            Move::Quiet { destination, .. } | Move::Capture { destination, .. } => destination,
        }
    }

    /// The captured piece, for capture moves
    #[inline]
    #[must_use]
    pub const fn captured(&self) -> Option<&Piece> {
        match self {
            Move::Quiet { .. } => None,
            Move::Capture { captured, .. } => Some(captured),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        matches!(self, Move::Capture { .. })
    }
}

// Moves from different snapshots are never equal, even if the snapshots
// happen to hold the same position.
impl PartialEq for Move<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.board(), other.board())
            && self.piece() == other.piece()
            && self.destination() == other.destination()
            && self.captured() == other.captured()
    }
}

impl Eq for Move<'_> {}

impl Hash for Move<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.piece().hash(state);
        self.destination().hash(state);
        self.captured().hash(state);
    }
}

impl fmt::Debug for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Quiet {
                piece, destination, ..
            } => f
                .debug_struct("Quiet")
                .field("piece", piece)
                .field("destination", destination)
                .finish(),
            Move::Capture {
                piece,
                destination,
                captured,
                ..
            } => f
                .debug_struct("Capture")
                .field("piece", piece)
                .field("destination", destination)
                .field("captured", captured)
                .finish(),
        }
    }
}

impl fmt::Display for Move<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            self.piece().kind(),
            self.from(),
            sep,
            self.destination()
        )
    }
}
