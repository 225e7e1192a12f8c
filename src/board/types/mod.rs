//! Core board types.
//!
//! - `PieceKind`, `Color` and `Piece` - piece identity and placement
//! - `Square` - validated flat square index
//! - `Tile` - contents of one square
//! - `Move` and `MoveList` - generated moves

mod moves;
mod piece;
mod square;
mod tile;

pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
pub use tile::Tile;
