mod logging;

pub mod board;

pub use board::{Board, BoardBuilder, Color, Move, Piece, PieceKind, Square};
