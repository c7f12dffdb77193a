//! Terminal input: maps crossterm key events to game actions.
//!
//! Independent of any UI framework; the driver feeds key events in and
//! forwards the resulting actions to the game.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
