//! Shared pure data types for the blockfall workspace.
//!
//! This crate has no dependencies; every other crate builds on it.

/// Board dimensions in cells. Row 0 is the bottom row, row
/// `BOARD_HEIGHT - 1` the top.
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// Gravity cadence: the driver calls `tick()` once per interval.
pub const GRAVITY_INTERVAL_MS: u64 = 500;

/// Points awarded per cleared row. Scoring is linear in rows cleared.
pub const POINTS_PER_LINE: u32 = 100;

/// The seven tetromino kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeKind {
    /// All kinds, in a fixed order usable for uniform selection.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];
}

/// A board cell: `None` means unoccupied.
pub type Cell = Option<ShapeKind>;

/// Player commands accepted by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Restart,
}
