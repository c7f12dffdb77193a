//! Terminal rendering for blockfall.
//!
//! Rendering is split so the game projection stays testable:
//! - [`fb`]: a styled character framebuffer
//! - [`game_view`]: pure snapshot-to-framebuffer projection
//! - [`renderer`]: terminal lifecycle and frame flushing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
