//! Session state machine integration tests.

use mnk_engine::core::Piece;
use mnk_engine::rules;
use mnk_engine::session::{MoveError, Session, SessionState};

/// Play lowest-empty-square until the game ends, returning the terminal
/// state.
fn run_to_completion(session: &mut Session) -> SessionState {
    while !session.is_over() {
        let index = session.board().empty_cells()[0];
        session.play(index).unwrap();
    }
    session.state()
}

// =============================================================================
// Full Games
// =============================================================================

#[test]
fn test_seeded_games_terminate_consistently() {
    for (width, height) in [(3, 3), (4, 3), (5, 4), (12, 12)] {
        for seed in 0..5 {
            let mut session = Session::with_seed(width, height, seed);
            let state = run_to_completion(&mut session);

            let board = session.board();
            match state {
                SessionState::PlayerWon => assert!(rules::did_win(board, Piece::Player)),
                SessionState::ComputerWon => assert!(rules::did_win(board, Piece::Computer)),
                SessionState::Draw => assert!(rules::is_draw(board)),
                other => panic!("{width}x{height} seed {seed}: bad terminal {other:?}"),
            }

            // History stayed strictly alternating through the whole game.
            for (i, &index) in board.history().iter().enumerate() {
                let piece = if i % 2 == 0 { Piece::Player } else { Piece::Computer };
                assert!(board.cell(index).unwrap().is(piece));
            }
        }
    }
}

#[test]
fn test_finished_game_rejects_moves() {
    let mut session = Session::with_seed(3, 3, 1);
    let state = run_to_completion(&mut session);

    let err = session.play(0).unwrap_err();
    assert_eq!(err, MoveError::GameOver(state));
}

// =============================================================================
// Rejected Moves
// =============================================================================

#[test]
fn test_errors_leave_the_session_untouched() {
    let mut session = Session::with_seed(4, 4, 0);
    session.play(5).unwrap();
    let snapshot = session.board().clone();

    assert!(matches!(
        session.play(16),
        Err(MoveError::OutOfBounds { index: 16, cells: 16 })
    ));
    assert_eq!(session.play(5), Err(MoveError::Occupied(5)));
    assert_eq!(session.board(), &snapshot);
    assert_eq!(session.state(), SessionState::InProgress);
}

// =============================================================================
// Undo / Reset / Resize / Quit
// =============================================================================

#[test]
fn test_undo_reopens_a_finished_game() {
    let mut session = Session::with_seed(3, 3, 2);
    let moves_at_end = {
        run_to_completion(&mut session);
        session.board().move_count()
    };

    session.undo();

    assert_eq!(session.state(), SessionState::InProgress);
    assert!(session.board().move_count() < moves_at_end);
    // The reopened game accepts moves again.
    let index = session.board().empty_cells()[0];
    assert!(session.play(index).is_ok());
}

#[test]
fn test_undo_rewinds_exactly_one_pair_mid_game() {
    let mut session = Session::with_seed(4, 4, 3);
    session.play(0).unwrap();
    let next = session.board().empty_cells()[0];
    session.play(next).unwrap();
    assert_eq!(session.board().move_count(), 4);

    session.undo();
    assert_eq!(session.board().move_count(), 2);
    assert_eq!(session.board().to_move(), Piece::Player);
}

#[test]
fn test_resize_mid_game_starts_fresh() {
    let mut session = Session::with_seed(3, 3, 0);
    session.play(4).unwrap();

    session.resize(5, 4);
    assert_eq!(session.board().len(), 20);
    assert_eq!(session.board().move_count(), 0);
    assert_eq!(session.state(), SessionState::InProgress);

    // Tiny requests are clamped, not rejected, at this layer.
    session.resize(1, 2);
    assert_eq!(session.board().len(), 9);
}

#[test]
fn test_quit_is_final() {
    let mut session = Session::with_seed(3, 3, 0);
    session.play(4).unwrap();
    session.quit();

    assert_eq!(session.state(), SessionState::Terminated);
    session.undo();
    assert_eq!(session.state(), SessionState::Terminated);
    assert!(matches!(session.play(0), Err(MoveError::GameOver(_))));
}
