use super::super::geometry::{EIGHTH_COLUMN, FIRST_COLUMN, SECOND_ROW, SEVENTH_ROW};
use super::super::{Board, Color, Move, MoveList, Piece, Square};

// Offsets for Black; White uses the same values times its direction (-1).
const PUSH: i32 = 8;
const DOUBLE_PUSH: i32 = 16;
const CAPTURE_OFFSETS: [i32; 2] = [7, 9];

fn on_start_row(square: Square, color: Color) -> bool {
    match color {
        Color::White => SEVENTH_ROW[square.index()],
        Color::Black => SECOND_ROW[square.index()],
    }
}

// Direction flips which edge a diagonal offset wraps across: White's -7 and
// Black's +9 leave through the right edge, White's -9 and Black's +7 through
// the left.
fn diagonal_wraps(from: Square, color: Color, offset: i32) -> bool {
    let idx = from.index();
    match (color, offset) {
        (Color::White, 7) | (Color::Black, 9) => EIGHTH_COLUMN[idx],
        (Color::White, 9) | (Color::Black, 7) => FIRST_COLUMN[idx],
        _ => false,
    }
}

impl Board {
    // TODO: promotion; a pawn reaching the last row currently yields a plain move.
    pub(crate) fn generate_pawn_moves(&self, pawn: &Piece) -> MoveList<'_> {
        let mut moves = MoveList::new();
        let color = pawn.color();
        let dir = color.direction();
        let from = pawn.position();

        let single = from.offset(PUSH * dir).filter(|&to| self.is_empty(to));
        if let Some(to) = single {
            moves.push(Move::quiet(self, *pawn, to));

            if pawn.is_first_move() && on_start_row(from, color) {
                if let Some(to) = from.offset(DOUBLE_PUSH * dir).filter(|&to| self.is_empty(to)) {
                    moves.push(Move::quiet(self, *pawn, to));
                }
            }
        }

        for offset in CAPTURE_OFFSETS {
            if diagonal_wraps(from, color, offset) {
                continue;
            }
            let Some(to) = from.offset(offset * dir) else {
                continue;
            };
            if let Some(target) = self.piece_at(to) {
                if target.color() != color {
                    moves.push(Move::capture(self, *pawn, to, *target));
                }
            }
        }

        moves
    }
}
