use super::adjacent_step_wraps;
use super::super::{Board, Move, MoveList, Piece, Tile};

/// Type of sliding piece for move generation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SliderType {
    Bishop,
    Rook,
    Queen,
}

const BISHOP_VECTORS: [i32; 4] = [-9, -7, 7, 9];
const ROOK_VECTORS: [i32; 4] = [-8, -1, 1, 8];
const QUEEN_VECTORS: [i32; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

impl SliderType {
    /// Index steps along which this slider casts rays
    #[must_use]
    pub const fn vectors(self) -> &'static [i32] {
        match self {
            SliderType::Bishop => &BISHOP_VECTORS,
            SliderType::Rook => &ROOK_VECTORS,
            SliderType::Queen => &QUEEN_VECTORS,
        }
    }
}

impl Board {
    /// Walk each ray one square at a time. The edge guard is checked before
    /// every step, and the ray ends on the first occupied square.
    pub(crate) fn generate_slider_moves(&self, piece: &Piece, slider: SliderType) -> MoveList<'_> {
        let mut moves = MoveList::new();

        for &vector in slider.vectors() {
            let mut current = piece.position();
            while !adjacent_step_wraps(current, vector) {
                let Some(next) = current.offset(vector) else {
                    break;
                };
                match self.tile(next) {
                    Tile::Empty => moves.push(Move::quiet(self, *piece, next)),
                    Tile::Occupied(occupant) => {
                        if occupant.color() != piece.color() {
                            moves.push(Move::capture(self, *piece, next, *occupant));
                        }
                        break;
                    }
                }
                current = next;
            }
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queen_is_bishop_plus_rook() {
        let mut union: Vec<i32> = SliderType::Bishop
            .vectors()
            .iter()
            .chain(SliderType::Rook.vectors())
            .copied()
            .collect();
        union.sort_unstable();
        assert_eq!(union, SliderType::Queen.vectors());
    }
}
