//! Board state: cell contents, move history, and turn tracking.
//!
//! ## Invariants
//!
//! - Exactly `history.len()` cells are occupied, and they are the cells
//!   named by `history`.
//! - `history[i]` was the Player's move iff `i` is even. Alternation is
//!   enforced by the board itself: `to_move` tracks whose turn it is and
//!   placing out of turn panics.
//!
//! ## Contracts
//!
//! Illegal *user* moves are reported by `is_legal_move` returning false; the
//! board never mutates for them. Calling `place_player`/`place_computer`
//! with an illegal index, on a full board, or out of turn is a bug in the
//! calling layer and panics rather than corrupting state.

use serde::{Deserialize, Serialize};

use super::piece::{Cell, Piece};

/// Smallest board dimension the engine accepts.
///
/// Requested dimensions below this are clamped up; there is no hard maximum
/// at this layer (the input layer is expected to enforce its own upper
/// bound, conventionally 12).
pub const MIN_DIM: usize = 3;

/// A rectangular board with flat row-major cell storage.
///
/// Cells are addressed by a single flattened index `row * width + col`.
///
/// ## Example
///
/// ```
/// use mnk_engine::core::{Board, Cell, Piece};
///
/// let mut board = Board::new(3, 3);
/// assert!(board.is_legal_move(4));
///
/// board.place_player(4);
/// assert_eq!(board.cell(4), Some(Cell::Occupied(Piece::Player)));
/// assert!(!board.is_legal_move(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cell contents, length `width * height`.
    cells: Vec<Cell>,
    /// Played indices in play order, alternating starting with Player.
    history: Vec<usize>,
    /// Side to move next.
    to_move: Piece,
}

impl Board {
    /// Create an empty board, clamping each dimension up to [`MIN_DIM`].
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        let width = width.max(MIN_DIM);
        let height = height.max(MIN_DIM);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            history: Vec::new(),
            to_move: Piece::Player,
        }
    }

    /// Empty all cells and clear the history, keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.history.clear();
        self.to_move = Piece::Player;
    }

    /// Replace the board with an empty one of the given (clamped)
    /// dimensions, discarding all prior contents and history.
    pub fn resize(&mut self, width: usize, height: usize) {
        *self = Self::new(width, height);
    }

    /// Board width (columns).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height (rows).
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Never true: a board has at least 9 cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The smaller of width and height.
    #[must_use]
    pub fn min_dim(&self) -> usize {
        self.width.min(self.height)
    }

    /// Get the cell at a flattened index, or `None` if out of range.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Played indices in play order.
    #[must_use]
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Number of moves made so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.history.len() == self.cells.len()
    }

    /// Side to move next.
    #[must_use]
    pub fn to_move(&self) -> Piece {
        self.to_move
    }

    /// Indices of all currently empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if a move is legal: in range and targeting an empty cell.
    ///
    /// This check precedes every mutation; the board never writes out of
    /// bounds.
    #[must_use]
    pub fn is_legal_move(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Cell::Empty))
    }

    /// Place the Player's piece.
    ///
    /// ## Panics
    ///
    /// If the index is illegal, the board is full, or it is not the
    /// Player's turn.
    pub fn place_player(&mut self, index: usize) {
        self.place(Piece::Player, index);
    }

    /// Place the Computer's piece.
    ///
    /// ## Panics
    ///
    /// If the index is illegal, the board is full, or it is not the
    /// Computer's turn.
    pub fn place_computer(&mut self, index: usize) {
        self.place(Piece::Computer, index);
    }

    fn place(&mut self, piece: Piece, index: usize) {
        assert!(!self.is_full(), "place on a full board");
        assert!(self.is_legal_move(index), "illegal move at index {index}");
        assert_eq!(piece, self.to_move, "placed {piece} out of turn");

        self.cells[index] = Cell::Occupied(piece);
        self.history.push(index);
        self.to_move = piece.opponent();
    }

    /// Undo the last Player/Computer move pair.
    ///
    /// Pops up to two history entries (the most recent Computer move and the
    /// Player move preceding it, when both exist), restoring those cells to
    /// Empty. A no-op on an empty history. After an odd number of moves the
    /// single remaining entry is popped alone.
    pub fn undo_last_pair(&mut self) {
        for _ in 0..2 {
            let Some(index) = self.history.pop() else {
                return;
            };
            self.cells[index] = Cell::Empty;
            self.to_move = self.to_move.opponent();
        }
    }
}
