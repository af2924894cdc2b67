//! Game session: the state machine driving one human-vs-computer game.
//!
//! The session owns the board, the RNG, and an explicit [`SessionState`]
//! (instead of a mutable quit flag). Turn sequencing lives here: the
//! caller hands in the player's move, and the session applies it, checks
//! for terminal conditions, and plays the computer's reply when the game
//! continues.
//!
//! Invalid *user* moves come back as [`MoveError`] values; the session
//! never forwards them to the board, so the board's contracts hold.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ai;
use crate::core::{Board, EngineRng};
use crate::rules::{self, Outcome};

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionState {
    /// Moves are being accepted.
    InProgress,
    /// The human completed a line.
    PlayerWon,
    /// The computer completed a line.
    ComputerWon,
    /// The board filled with no winner.
    Draw,
    /// The user quit; no further moves are accepted.
    Terminated,
}

impl From<Outcome> for SessionState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerWin => SessionState::PlayerWon,
            Outcome::ComputerWin => SessionState::ComputerWon,
            Outcome::Draw => SessionState::Draw,
        }
    }
}

/// Why a player move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// The index does not address a cell on the board.
    OutOfBounds { index: usize, cells: usize },
    /// The cell is already occupied.
    Occupied(usize),
    /// The game has already ended.
    GameOver(SessionState),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfBounds { index, cells } => {
                write!(f, "square {index} is off the board (0-{})", cells - 1)
            }
            MoveError::Occupied(index) => write!(f, "square {index} is already taken"),
            MoveError::GameOver(state) => write!(f, "the game is over ({state:?})"),
        }
    }
}

impl std::error::Error for MoveError {}

/// What happened during one call to [`Session::play`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Turn {
    /// The computer's reply, when the player's move left the game open.
    pub computer_move: Option<usize>,
    /// Session state after the full turn.
    pub state: SessionState,
}

/// One human-vs-computer game.
///
/// ## Example
///
/// ```
/// use mnk_engine::session::{Session, SessionState};
///
/// let mut session = Session::with_seed(3, 3, 42);
/// let turn = session.play(4).unwrap();
///
/// assert_eq!(turn.state, SessionState::InProgress);
/// assert!(turn.computer_move.is_some());
/// assert_eq!(session.board().move_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    rng: EngineRng,
    state: SessionState,
}

impl Session {
    /// Start a session with an OS-seeded RNG. Dimensions below 3 are
    /// clamped by the board.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_rng(width, height, EngineRng::from_entropy())
    }

    /// Start a session with a fixed seed, for reproducible games.
    #[must_use]
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Self {
        Self::with_rng(width, height, EngineRng::new(seed))
    }

    fn with_rng(width: usize, height: usize, rng: EngineRng) -> Self {
        Self {
            board: Board::new(width, height),
            rng,
            state: SessionState::InProgress,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current session state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Check if the session accepts no further moves.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != SessionState::InProgress
    }

    /// Play the human's move at `index`, then the computer's reply if the
    /// game is still open.
    ///
    /// ## Errors
    ///
    /// [`MoveError::GameOver`] if the session already ended;
    /// [`MoveError::OutOfBounds`] / [`MoveError::Occupied`] for illegal
    /// indices. Nothing is mutated on error.
    pub fn play(&mut self, index: usize) -> Result<Turn, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver(self.state));
        }
        if index >= self.board.len() {
            return Err(MoveError::OutOfBounds {
                index,
                cells: self.board.len(),
            });
        }
        if !self.board.is_legal_move(index) {
            return Err(MoveError::Occupied(index));
        }

        self.board.place_player(index);
        debug!(index, "player moved");

        if let Some(outcome) = rules::outcome(&self.board) {
            return Ok(self.finish(outcome, None));
        }

        let reply = ai::select_move(&self.board, &mut self.rng);
        self.board.place_computer(reply);
        debug!(index = reply, "computer replied");

        if let Some(outcome) = rules::outcome(&self.board) {
            return Ok(self.finish(outcome, Some(reply)));
        }

        Ok(Turn {
            computer_move: Some(reply),
            state: SessionState::InProgress,
        })
    }

    fn finish(&mut self, outcome: Outcome, computer_move: Option<usize>) -> Turn {
        self.state = SessionState::from(outcome);
        debug!(state = ?self.state, "game over");
        Turn {
            computer_move,
            state: self.state,
        }
    }

    /// Undo the last player/computer move pair.
    ///
    /// Undoing after a terminal state reopens the game: the cells come
    /// back empty and the session returns to `InProgress`. A terminated
    /// session stays terminated.
    pub fn undo(&mut self) {
        if self.state == SessionState::Terminated {
            return;
        }
        self.board.undo_last_pair();
        self.state = SessionState::InProgress;
        debug!(move_count = self.board.move_count(), "undid last pair");
    }

    /// Clear the board and start over with the same dimensions.
    pub fn reset(&mut self) {
        self.board.reset();
        self.state = SessionState::InProgress;
        debug!("session reset");
    }

    /// Start over on a board of new (clamped) dimensions.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.board.resize(width, height);
        self.state = SessionState::InProgress;
        debug!(
            width = self.board.width(),
            height = self.board.height(),
            "board resized"
        );
    }

    /// End the session. Valid from any state.
    pub fn quit(&mut self) {
        self.state = SessionState::Terminated;
        debug!("session terminated");
    }
}
