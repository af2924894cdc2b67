//! Computer move selection.
//!
//! A greedy one-ply heuristic, not a game-tree search (search is an
//! explicit non-goal of this engine):
//!
//! 1. Take an immediate win: the first line where the Computer has a
//!    near-win.
//! 2. Block the opponent: the first line where the Player has a near-win.
//! 3. Otherwise pick uniformly at random among the empty cells.
//!
//! "First" means first in the canonical scan order of [`Line::all`]
//! (columns, rows, then diagonals), which fixes the tie-break between
//! equally urgent lines.

use tracing::debug;

use crate::core::{Board, EngineRng, Piece};
use crate::lines::Line;
use crate::rules::near_win;

/// Select the Computer's next move.
///
/// ## Panics
///
/// If the board is full: there is no move to select, and the caller
/// should have detected the terminal state first.
#[must_use]
pub fn select_move(board: &Board, rng: &mut EngineRng) -> usize {
    assert!(!board.is_full(), "select_move on a full board");

    if let Some(index) = first_near_win(board, Piece::Computer) {
        debug!(index, "taking winning move");
        return index;
    }

    if let Some(index) = first_near_win(board, Piece::Player) {
        debug!(index, "blocking player near-win");
        return index;
    }

    let empty = board.empty_cells();
    let index = *rng
        .choose(&empty)
        .expect("non-full board has an empty cell");
    debug!(index, "no near-wins, playing random empty cell");
    index
}

/// The empty cell completing the first near-win line for `piece`, in
/// canonical scan order.
fn first_near_win(board: &Board, piece: Piece) -> Option<usize> {
    Line::all(board.width(), board.height()).find_map(|line| near_win(board, &line, piece))
}
