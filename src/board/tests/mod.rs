//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece move generation on hand-built positions
//! - `edge_cases.rs` - Every square checked against row/column geometry
//! - `proptest.rs` - Property-based tests on random positions


use std::collections::BTreeSet;

use crate::board::{Board, BoardBuilder, Color, Move, Piece, PieceKind, Square};

pub(super) fn sq(index: i32) -> Square {
    Square::new(index).unwrap()
}

pub(super) fn piece(kind: PieceKind, color: Color, index: i32) -> Piece {
    Piece::new(kind, color, sq(index))
}

pub(super) fn board_with(pieces: &[Piece]) -> Board {
    pieces
        .iter()
        .fold(BoardBuilder::new(), |builder, &p| builder.set_piece(p))
        .build()
}

pub(super) fn destinations(moves: &[Move<'_>]) -> BTreeSet<usize> {
    moves.iter().map(|m| m.destination().index()).collect()
}

pub(super) fn capture_destinations(moves: &[Move<'_>]) -> BTreeSet<usize> {
    moves
        .iter()
        .filter(|m| m.is_capture())
        .map(|m| m.destination().index())
        .collect()
}

/// Moves of the piece standing on `index`.
pub(super) fn moves_from(board: &Board, index: i32) -> Vec<Move<'_>> {
    board
        .piece_at(sq(index))
        .map(|p| p.generate_moves(board))
        .unwrap_or_default()
}
