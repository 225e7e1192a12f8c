//! Board geometry: flat square indices, bounds and edge membership tables.
//!
//! Squares are numbered `0..64` row-major. Row 0 is Black's back rank, so
//! White pawns start on the seventh row and Black pawns on the second.
//! The column tables drive the wraparound guards used by move generation:
//! an offset that lands on a valid index can still cross the board edge,
//! and the only way to tell is the column the step starts from.

use once_cell::sync::Lazy;

/// Number of tiles on the board.
pub const NUM_TILES: usize = 64;

/// Number of tiles in one row.
pub const NUM_TILES_PER_ROW: usize = 8;

/// Squares on the leftmost column (index % 8 == 0).
pub static FIRST_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| init_column(0));
/// Squares on the second column (index % 8 == 1).
pub static SECOND_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| init_column(1));
/// Squares on the seventh column (index % 8 == 6).
pub static SEVENTH_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| init_column(6));
/// Squares on the rightmost column (index % 8 == 7).
pub static EIGHTH_COLUMN: Lazy<[bool; NUM_TILES]> = Lazy::new(|| init_column(7));

/// Black's pawn row (indices 8..16).
pub static SECOND_ROW: Lazy<[bool; NUM_TILES]> = Lazy::new(|| init_row(1));
/// White's pawn row (indices 48..56).
pub static SEVENTH_ROW: Lazy<[bool; NUM_TILES]> = Lazy::new(|| init_row(6));

fn init_column(column: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    for idx in (column..NUM_TILES).step_by(NUM_TILES_PER_ROW) {
        table[idx] = true;
    }
    table
}

fn init_row(row: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let start = row * NUM_TILES_PER_ROW;
    for entry in &mut table[start..start + NUM_TILES_PER_ROW] {
        *entry = true;
    }
    table
}

/// Returns true if `index` names a square on the board.
#[inline]
#[must_use]
pub const fn is_valid_square(index: i32) -> bool {
    index >= 0 && index < NUM_TILES as i32
}

/// Returns true if `index` is on the board and lies in `column` (0-7).
#[inline]
#[must_use]
pub const fn is_in_column(index: usize, column: usize) -> bool {
    index < NUM_TILES && index % NUM_TILES_PER_ROW == column
}

/// Returns true if `index` is on the board and lies in `row` (0-7).
#[inline]
#[must_use]
pub const fn is_in_row(index: usize, row: usize) -> bool {
    index < NUM_TILES && index / NUM_TILES_PER_ROW == row
}
