use super::adjacent_step_wraps;
use super::super::{Board, MoveList, Piece};

pub(crate) const KING_OFFSETS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

impl Board {
    // TODO: castling needs the rook/king move history, which pieces do not track yet.
    pub(crate) fn generate_king_moves(&self, king: &Piece) -> MoveList<'_> {
        self.generate_leaper_moves(king, &KING_OFFSETS, adjacent_step_wraps)
    }
}
