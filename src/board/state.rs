use std::collections::HashMap;
use std::fmt;

use super::builder::BoardBuilder;
use super::error::SquareError;
use super::geometry::{NUM_TILES, NUM_TILES_PER_ROW};
use super::{Color, MoveList, Piece, Square, Tile};

/// An immutable position snapshot.
///
/// Holds the 64 tiles plus the per-color piece collections derived from
/// them at construction time. There are no mutators; a different position
/// is a different `Board`, built through [`BoardBuilder`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    side_to_move: Color,
}

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn standard() -> Self {
        BoardBuilder::starting_position().build()
    }

    /// A board with no pieces, White to move.
    #[must_use]
    pub fn empty() -> Self {
        BoardBuilder::new().build()
    }

    pub(crate) fn from_placements(placements: &HashMap<Square, Piece>, side_to_move: Color) -> Self {
        let tiles: Vec<Tile> = Square::all()
            .map(|sq| Tile::from(placements.get(&sq).copied()))
            .collect();

        let white_pieces = active_pieces(&tiles, Color::White);
        let black_pieces = active_pieces(&tiles, Color::Black);

        let board = Board {
            tiles,
            white_pieces,
            black_pieces,
            side_to_move,
        };
        debug_assert!(board.is_consistent());
        board
    }

    /// Tile at a validated square.
    #[inline]
    #[must_use]
    pub fn tile(&self, square: Square) -> &Tile {
        &self.tiles[square.index()]
    }

    /// Tile at a raw index, rejecting anything outside `0..64`.
    pub fn tile_at(&self, index: i32) -> Result<&Tile, SquareError> {
        let square = Square::try_from(index)?;
        Ok(self.tile(square))
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.tile(square).piece()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        !self.tile(square).is_occupied()
    }

    /// All 64 tiles in index order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Pieces belonging to `color`. Order is not meaningful.
    #[must_use]
    pub fn pieces(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_pieces,
            Color::Black => &self.black_pieces,
        }
    }

    #[must_use]
    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    #[must_use]
    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Every pseudo-legal move for `color`, concatenated piece by piece.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> MoveList<'_> {
        self.pieces(color)
            .iter()
            .flat_map(|piece| piece.generate_moves(self))
            .collect()
    }

    /// Pseudo-legal moves for the side to move.
    #[must_use]
    pub fn current_player_moves(&self) -> MoveList<'_> {
        self.pseudo_legal_moves(self.side_to_move)
    }

    fn is_consistent(&self) -> bool {
        self.tiles.len() == NUM_TILES
            && Color::BOTH.iter().all(|&color| {
                self.pieces(color).iter().all(|piece| {
                    piece.color() == color && self.piece_at(piece.position()) == Some(piece)
                })
            })
    }
}

fn active_pieces(tiles: &[Tile], color: Color) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(Tile::piece)
        .filter(|piece| piece.color() == color)
        .copied()
        .collect()
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, tile) in self.tiles.iter().enumerate() {
            write!(f, "{tile:>3}")?;
            if (idx + 1) % NUM_TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
