//! Chess position snapshot and pseudo-legal move generation.
//!
//! A [`Board`] is an immutable array of 64 tiles built once by a
//! [`BoardBuilder`]. Each [`Piece`] generates its own moves against a board;
//! nothing here changes a position. Castling, en passant, promotion and
//! check detection are not handled.
//!
//! # Example
//! ```
//! use tile_chess::board::{Board, Color};
//!
//! let board = Board::standard();
//! let moves = board.pseudo_legal_moves(Color::White);
//! println!("Starting position has {} moves", moves.len());
//! ```

mod builder;
mod error;
pub mod geometry;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::SquareError;
pub use movegen::SliderType;
pub use state::Board;
pub use types::{Color, Move, MoveList, Piece, PieceKind, Square, Tile};
