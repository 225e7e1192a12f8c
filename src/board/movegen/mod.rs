//! Pseudo-legal move generation.
//!
//! Each piece kind has its own rule, selected by [`Piece::generate_moves`].
//! Squares are flat indices, so every generator has to guard against steps
//! that stay in `0..64` but wrap around the left or right edge. The guard is
//! decided by the column of the square the step starts from.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub use sliders::SliderType;

use super::geometry::{EIGHTH_COLUMN, FIRST_COLUMN};
use super::{Board, Move, MoveList, Piece, PieceKind, Square, Tile};

impl Piece {
    /// Every pseudo-legal move this piece can make on `board`.
    ///
    /// The piece must be the one standing on its own square of `board`.
    /// Targets that are off the board, wrap around an edge or hold a friendly
    /// piece are skipped; this never fails.
    #[must_use]
    pub fn generate_moves<'b>(&self, board: &'b Board) -> MoveList<'b> {
        debug_assert!(
            board
                .piece_at(self.position())
                .is_some_and(|p| p.kind() == self.kind() && p.color() == self.color()),
            "{} is not on {}",
            self,
            self.position()
        );

        let moves = match self.kind() {
            PieceKind::Pawn => board.generate_pawn_moves(self),
            PieceKind::Knight => board.generate_knight_moves(self),
            PieceKind::Bishop => board.generate_slider_moves(self, SliderType::Bishop),
            PieceKind::Rook => board.generate_slider_moves(self, SliderType::Rook),
            PieceKind::Queen => board.generate_slider_moves(self, SliderType::Queen),
            PieceKind::King => board.generate_king_moves(self),
        };

        crate::logging::trace_log!(
            "{} {} on {}: {} moves",
            self.color(),
            self.kind(),
            self.position(),
            moves.len()
        );
        moves
    }
}

impl Board {
    /// Move of `piece` onto `destination`: quiet if empty, a capture if an
    /// opponent stands there, nothing if a friend does.
    pub(crate) fn move_to(&self, piece: &Piece, destination: Square) -> Option<Move<'_>> {
        match self.tile(destination) {
            Tile::Empty => Some(Move::quiet(self, *piece, destination)),
            Tile::Occupied(occupant) if occupant.color() != piece.color() => {
                Some(Move::capture(self, *piece, destination, *occupant))
            }
            Tile::Occupied(_) => None,
        }
    }

    /// Fixed-offset moves for knights and kings.
    pub(crate) fn generate_leaper_moves(
        &self,
        piece: &Piece,
        offsets: &[i32],
        wraps: fn(Square, i32) -> bool,
    ) -> MoveList<'_> {
        let from = piece.position();
        offsets
            .iter()
            .filter(|&&offset| !wraps(from, offset))
            .filter_map(|&offset| from.offset(offset))
            .filter_map(|to| self.move_to(piece, to))
            .collect()
    }
}

/// True if a one-square step (orthogonal or diagonal) from `from` would
/// wrap around the left or right edge.
pub(crate) fn adjacent_step_wraps(from: Square, step: i32) -> bool {
    let idx = from.index();
    (FIRST_COLUMN[idx] && matches!(step, -9 | -1 | 7))
        || (EIGHTH_COLUMN[idx] && matches!(step, -7 | 1 | 9))
}
