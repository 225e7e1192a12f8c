//! Fluent builder for constructing board snapshots.
//!
//! Allows creating positions piece by piece. Each piece carries its own
//! square, so placing a piece is all the information the builder needs.
//!
//! # Example
//! ```
//! use tile_chess::board::{BoardBuilder, Color, Piece, PieceKind, Square};
//!
//! let e1 = "e1".parse::<Square>().unwrap();
//! let e8 = "e8".parse::<Square>().unwrap();
//! let board = BoardBuilder::new()
//!     .set_piece(Piece::new(PieceKind::King, Color::White, e1))
//!     .set_piece(Piece::new(PieceKind::King, Color::Black, e8))
//!     .set_turn(Color::Black)
//!     .build();
//! assert_eq!(board.side_to_move(), Color::Black);
//! ```

use std::collections::HashMap;

use super::{Board, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    placements: HashMap<Square, Piece>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            placements: HashMap::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    ///
    /// Black occupies indices 0-15 and White 48-63; White moves first.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        for (column, &kind) in BACK_RANK.iter().enumerate() {
            let column = column as i32;
            builder = builder
                .place(kind, Color::Black, column)
                .place(PieceKind::Pawn, Color::Black, 8 + column)
                .place(PieceKind::Pawn, Color::White, 48 + column)
                .place(kind, Color::White, 56 + column);
        }

        builder.set_turn(Color::White)
    }

    // Only called with indices from the fixed layout above.
    fn place(self, kind: PieceKind, color: Color, index: i32) -> Self {
        match Square::new(index) {
            Some(square) => self.set_piece(Piece::new(kind, color, square)),
            None => self,
        }
    }

    /// Place a piece on its own square, replacing whatever was there.
    #[must_use]
    pub fn set_piece(mut self, piece: Piece) -> Self {
        self.placements.insert(piece.position(), piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.placements.remove(&square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn set_turn(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board.
    ///
    /// The placements are copied into the snapshot, so the builder can keep
    /// being modified or reused without affecting boards already built.
    #[must_use]
    pub fn build(&self) -> Board {
        let board = Board::from_placements(&self.placements, self.side_to_move);
        crate::logging::debug_log!(
            "built board: {} white, {} black, {} to move",
            board.white_pieces().len(),
            board.black_pieces().len(),
            board.side_to_move()
        );
        board
    }
}
