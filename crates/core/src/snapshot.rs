//! By-value projection of the query surface, consumed by render paths.

use blockfall_types::{Cell, ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Active piece as a renderer sees it: kind plus absolute cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub cells: [(i8, i8); 4],
}

/// Complete render state. `cells[y][x]`, row 0 at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    pub cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub high_score: u32,
    pub paused: bool,
    pub game_over: bool,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cells: [[None; BOARD_WIDTH]; BOARD_HEIGHT],
            active: None,
            score: 0,
            high_score: 0,
            paused: false,
            game_over: false,
        }
    }
}
