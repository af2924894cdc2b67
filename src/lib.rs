//! # mnk-engine
//!
//! A two-player (human vs. computer) board game engine generalizing 3x3
//! tic-tac-toe to arbitrary rectangular boards. Winning takes a full row,
//! a full column, or a full top-to-bottom diagonal, where diagonals wrap
//! around the left/right edges (a toroidal topology).
//!
//! ## Design Principles
//!
//! 1. **Bounds-checked containers**: cells and move history live in owned,
//!    index-validated buffers; illegal indices are rejected before any
//!    mutation.
//!
//! 2. **Explicit state**: whose turn it is and whether the game is over
//!    are fields of the board and session, never inferred from parity or
//!    tracked in flags scattered across call sites.
//!
//! 3. **Greedy AI by design**: the computer takes an immediate win, blocks
//!    an immediate loss, and otherwise moves at random. No game-tree
//!    search.
//!
//! ## Modules
//!
//! - `core`: pieces, board state, and the session RNG
//! - `lines`: row/column/toroidal-diagonal scanning primitives
//! - `rules`: win, draw, near-win, and dead-position detection
//! - `ai`: the computer's move heuristic
//! - `session`: the per-game state machine tying the above together
//! - `cli`: command parsing and board rendering for the `play` binary

pub mod ai;
pub mod cli;
pub mod core;
pub mod lines;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Board, Cell, EngineRng, Piece, MIN_DIM};
pub use crate::lines::{Line, LineKind};
pub use crate::rules::Outcome;
pub use crate::session::{MoveError, Session, SessionState, Turn};
