//! Core types: pieces, board state, and the session RNG.

pub mod board;
pub mod piece;
pub mod rng;

pub use board::{Board, MIN_DIM};
pub use piece::{Cell, Piece};
pub use rng::EngineRng;
