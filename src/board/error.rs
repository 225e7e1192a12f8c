//! Error types for board operations.

use std::fmt;

/// Error type for square construction and lookup failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Raw index outside `0..64`
    OutOfBounds { index: i64 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::OutOfBounds { index } => {
                write!(f, "Square index {index} out of bounds (must be 0-63)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
