use super::super::geometry::{EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN};
use super::super::{Board, MoveList, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [i32; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

// An offset wraps when it moves one or two columns past the edge the knight
// is standing on or next to.
fn knight_wraps(from: Square, offset: i32) -> bool {
    let idx = from.index();
    (FIRST_COLUMN[idx] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[idx] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[idx] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[idx] && matches!(offset, -15 | -6 | 10 | 17))
}

impl Board {
    pub(crate) fn generate_knight_moves(&self, knight: &Piece) -> MoveList<'_> {
        self.generate_leaper_moves(knight, &KNIGHT_OFFSETS, knight_wraps)
    }
}
