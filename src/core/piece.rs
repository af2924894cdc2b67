//! Piece and cell types.
//!
//! The two sides are a fixed enumeration rather than character literals so
//! comparisons are unambiguous and exhaustively matchable.

use serde::{Deserialize, Serialize};

/// One of the two sides in a game.
///
/// The human always plays `Player` and moves first; the engine plays
/// `Computer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    /// The human player (moves first).
    Player,
    /// The computer opponent.
    Computer,
}

impl Piece {
    /// Get the opposing side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Piece::Player => Piece::Computer,
            Piece::Computer => Piece::Player,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Piece::Player => write!(f, "X"),
            Piece::Computer => write!(f, "O"),
        }
    }
}

/// Contents of one board square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No piece has been placed here.
    Empty,
    /// A piece occupies this square.
    Occupied(Piece),
}

impl Cell {
    /// Check if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Check if the cell holds the given piece.
    #[must_use]
    pub fn is(self, piece: Piece) -> bool {
        self == Cell::Occupied(piece)
    }
}
