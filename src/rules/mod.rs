//! Win and draw detection.
//!
//! All queries are read-only sweeps over [`Line::all`] and are always safe
//! to call, at any point in a game.
//!
//! ## Near-wins
//!
//! A *near-win* is a line with exactly one empty cell and every other cell
//! held by the same piece. [`near_win`] is the primitive the move heuristic
//! uses to find immediate winning and blocking moves.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Piece};
use crate::lines::Line;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human player completed a line.
    PlayerWin,
    /// The computer completed a line.
    ComputerWin,
    /// The board is full and nobody won.
    Draw,
}

/// Check whether `piece` has completed any row, column, or toroidal
/// diagonal.
///
/// Short-circuits on the first full line. No line can be complete before
/// `2*min(w,h) - 1` moves have been made (the winner needs `min(w,h)`
/// pieces down with the opponent one move behind), so the sweep is skipped
/// entirely below that count.
#[must_use]
pub fn did_win(board: &Board, piece: Piece) -> bool {
    if board.move_count() < 2 * board.min_dim() - 1 {
        return false;
    }
    Line::all(board.width(), board.height()).any(|line| line_complete(board, &line, piece))
}

/// Check whether the game is a draw: board full with no winner.
///
/// Always false for a non-full board, even one no line can be won on
/// anymore (see [`is_dead_position`] for that query).
#[must_use]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !did_win(board, Piece::Player) && !did_win(board, Piece::Computer)
}

/// Determine the terminal state of the board, if any.
///
/// Win checks precede the draw check, so a final move that completes a
/// line on a full board is reported as a win.
#[must_use]
pub fn outcome(board: &Board) -> Option<Outcome> {
    if did_win(board, Piece::Player) {
        Some(Outcome::PlayerWin)
    } else if did_win(board, Piece::Computer) {
        Some(Outcome::ComputerWin)
    } else if board.is_full() {
        Some(Outcome::Draw)
    } else {
        None
    }
}

/// Find the single empty cell of a line otherwise filled by `piece`.
///
/// Returns `None` unless the line holds exactly `len - 1` cells of `piece`
/// and exactly one empty cell.
#[must_use]
pub fn near_win(board: &Board, line: &Line, piece: Piece) -> Option<usize> {
    let mut empty = None;
    for &index in line.indices() {
        match board.cell(index) {
            Some(Cell::Empty) => {
                if empty.is_some() {
                    return None;
                }
                empty = Some(index);
            }
            Some(Cell::Occupied(p)) if p == piece => {}
            _ => return None,
        }
    }
    empty
}

/// Check whether a line can still be completed by somebody: it holds
/// pieces of at most one side.
#[must_use]
pub fn line_winnable(board: &Board, line: &Line) -> bool {
    let mut seen = None;
    for &index in line.indices() {
        if let Some(Cell::Occupied(piece)) = board.cell(index) {
            match seen {
                None => seen = Some(piece),
                Some(p) if p == piece => {}
                Some(_) => return false,
            }
        }
    }
    true
}

/// Check whether no line remains winnable by either side.
///
/// A dead position plays out to a draw under any continuation, but
/// [`is_draw`] stays false until the board actually fills; this query lets
/// the display layer tell the user early.
#[must_use]
pub fn is_dead_position(board: &Board) -> bool {
    !Line::all(board.width(), board.height()).any(|line| line_winnable(board, &line))
}

fn line_complete(board: &Board, line: &Line, piece: Piece) -> bool {
    line.indices()
        .iter()
        .all(|&index| board.cell(index) == Some(Cell::Occupied(piece)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Play alternating moves: player takes `xs[i]`, computer takes `os[i]`.
    fn play(board: &mut Board, xs: &[usize], os: &[usize]) {
        for i in 0..xs.len().max(os.len()) {
            if let Some(&x) = xs.get(i) {
                board.place_player(x);
            }
            if let Some(&o) = os.get(i) {
                board.place_computer(o);
            }
        }
    }

    #[test]
    fn test_fresh_board_is_not_terminal() {
        let board = Board::new(3, 3);
        assert!(!did_win(&board, Piece::Player));
        assert!(!did_win(&board, Piece::Computer));
        assert!(!is_draw(&board));
        assert_eq!(outcome(&board), None);
    }

    #[test]
    fn test_row_win() {
        let mut board = Board::new(3, 3);
        play(&mut board, &[0, 1, 2], &[3, 4]);

        assert!(did_win(&board, Piece::Player));
        assert!(!did_win(&board, Piece::Computer));
        assert!(!is_draw(&board));
        assert_eq!(outcome(&board), Some(Outcome::PlayerWin));
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new(4, 3);
        play(&mut board, &[1, 5, 9], &[0, 2]);

        assert!(did_win(&board, Piece::Player));
        assert_eq!(outcome(&board), Some(Outcome::PlayerWin));
    }

    #[test]
    fn test_computer_diagonal_win() {
        let mut board = Board::new(3, 3);
        // O takes the main diagonal 0-4-8 while X wanders.
        play(&mut board, &[1, 2, 6], &[0, 4, 8]);

        assert!(did_win(&board, Piece::Computer));
        assert_eq!(outcome(&board), Some(Outcome::ComputerWin));
    }

    #[test]
    fn test_wrapping_diagonal_win() {
        let mut board = Board::new(3, 3);
        // Forward diagonal from the last column wraps: 2, 3, 7.
        play(&mut board, &[2, 3, 7], &[0, 4]);

        assert!(did_win(&board, Piece::Player));
    }

    #[test]
    fn test_spoiled_line_is_no_win() {
        let mut board = Board::new(3, 3);
        // Row 0 is X, X, O: one opposing cell spoils the line.
        play(&mut board, &[0, 1, 8], &[2, 3]);

        assert!(!did_win(&board, Piece::Player));
        assert!(!did_win(&board, Piece::Computer));
    }

    #[test]
    fn test_draw_requires_full_board() {
        let mut board = Board::new(4, 4);
        play(&mut board, &[0, 1, 6], &[2, 3, 4]);

        assert!(!board.is_full());
        assert!(!is_draw(&board));
        assert_eq!(outcome(&board), None);
    }

    /// Every row, column, and wrapped diagonal of this full 4x4 position
    /// holds both pieces (3x3 toroidal boards admit no draw at all: the 12
    /// lines form the affine plane AG(2,3), and any five cells of it
    /// contain a full line).
    const DRAW_4X4_X: [usize; 8] = [0, 1, 6, 7, 8, 9, 14, 15];
    const DRAW_4X4_O: [usize; 8] = [2, 3, 4, 5, 10, 11, 12, 13];

    #[test]
    fn test_full_board_draw() {
        let mut board = Board::new(4, 4);
        play(&mut board, &DRAW_4X4_X, &DRAW_4X4_O);

        assert!(board.is_full());
        assert!(!did_win(&board, Piece::Player));
        assert!(!did_win(&board, Piece::Computer));
        assert!(is_draw(&board));
        assert_eq!(outcome(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_win_gate_scales_with_dimensions() {
        // On a 4x4 board no win is possible before move 7; the gate must
        // not hide a legitimate later win.
        let mut board = Board::new(4, 4);
        play(&mut board, &[0, 1, 2, 3], &[4, 5, 6]);

        assert!(did_win(&board, Piece::Player));
    }

    #[test]
    fn test_near_win_finds_the_gap() {
        let mut board = Board::new(3, 3);
        play(&mut board, &[0, 1], &[3, 4]);

        let row0 = Line::row(3, 3, 0);
        assert_eq!(near_win(&board, &row0, Piece::Player), Some(2));
        assert_eq!(near_win(&board, &row0, Piece::Computer), None);
    }

    #[test]
    fn test_near_win_rejects_two_gaps() {
        let mut board = Board::new(3, 3);
        play(&mut board, &[0], &[]);

        let row0 = Line::row(3, 3, 0);
        assert_eq!(near_win(&board, &row0, Piece::Player), None);
    }

    #[test]
    fn test_near_win_rejects_mixed_line() {
        let mut board = Board::new(3, 3);
        play(&mut board, &[0], &[1]);

        let row0 = Line::row(3, 3, 0);
        assert_eq!(near_win(&board, &row0, Piece::Player), None);
        assert_eq!(near_win(&board, &row0, Piece::Computer), None);
    }

    #[test]
    fn test_line_winnable() {
        let mut board = Board::new(3, 3);
        play(&mut board, &[0], &[1]);

        assert!(!line_winnable(&board, &Line::row(3, 3, 0)));
        assert!(line_winnable(&board, &Line::row(3, 3, 1)));
        assert!(line_winnable(&board, &Line::column(3, 3, 0)));
    }

    #[test]
    fn test_dead_position() {
        let mut board = Board::new(4, 4);
        assert!(!is_dead_position(&board));

        // One move shy of the full-board draw: every line is already
        // spoiled, so the game is decided before the board fills.
        play(&mut board, &DRAW_4X4_X, &DRAW_4X4_O[..7]);
        assert!(is_dead_position(&board));
        assert!(!is_draw(&board));
    }
}
