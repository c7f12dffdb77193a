//! Headless falling-block simulation - pure, deterministic, and testable.
//!
//! This crate contains all game rules and state with zero dependencies on
//! UI or I/O:
//!
//! - [`board`]: the 10x20 grid with occupancy queries and line clearing
//! - [`pieces`] / [`piece`]: tetromino geometry and the active piece value
//! - [`game`]: movement validation and the game lifecycle state machine
//! - [`rng`]: seedable piece selection (same seed, same game)
//! - [`scoring`]: line-clear points
//! - [`snapshot`]: by-value render projection of the query surface
//!
//! The driver owns the clock: it calls [`Game::tick`](game::Game::tick) at a
//! fixed cadence and forwards player commands between ticks.

pub mod board;
pub mod game;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export the commonly used types.
pub use board::Grid;
pub use game::Game;
pub use piece::Piece;
pub use pieces::{footprint, rotate_offsets, BlockOffset, PieceShape};
pub use rng::{PiecePicker, SimpleRng};
pub use scoring::line_clear_score;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
