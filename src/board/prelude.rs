//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use tile_chess::board::prelude::*;
//!
//! let board = Board::standard();
//! assert_eq!(board.side_to_move(), Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, Color, Move, MoveList, Piece, PieceKind, Square, SquareError, Tile,
};
