//! Game lifecycle - spawn, gravity, locking, scoring, pause, game over.
//!
//! `Game` owns the grid, the single active piece, and the piece picker.
//! Every movement goes through `try_move`: a candidate piece is built as a
//! pure value, validated against the grid, and only then stored. The
//! external driver calls `tick` at a fixed cadence; player commands arrive
//! between ticks and bypass gravity timing.

use blockfall_types::{Cell, GameAction, BOARD_WIDTH};

use crate::board::Grid;
use crate::piece::Piece;
use crate::rng::PiecePicker;
use crate::scoring::line_clear_score;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};

#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    active: Option<Piece>,
    picker: PiecePicker,
    score: u32,
    high_score: u32,
    /// Set by a lock that cleared rows; the next tick spawns instead of
    /// applying gravity, so the respawn happens on a clean step.
    falling_finished: bool,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl Game {
    pub fn new(seed: u32) -> Self {
        Self::with_grid(seed, Grid::new())
    }

    /// Build a game over a prepared grid (used by tests and fixtures).
    pub fn with_grid(seed: u32, grid: Grid) -> Self {
        Self {
            grid,
            active: None,
            picker: PiecePicker::new(seed),
            score: 0,
            high_score: 0,
            falling_finished: false,
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Spawn the first piece. Call once before driving the game.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn falling_finished(&self) -> bool {
        self.falling_finished
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// The active piece's absolute cells, if one is falling.
    pub fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active.map(|piece| piece.cells())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Occupant of a board cell; panics out of range (caller bug).
    pub fn occupant_at(&self, x: i8, y: i8) -> Cell {
        self.grid.occupant_at(x, y)
    }

    /// One gravity step, driven externally at a fixed cadence.
    ///
    /// No-op while paused or after game over. A tick following a clearing
    /// lock spawns the next piece; any other tick drops the piece one row,
    /// locking it when the drop is blocked.
    pub fn tick(&mut self) {
        if self.paused || self.game_over || !self.started {
            return;
        }
        if self.falling_finished {
            self.falling_finished = false;
            self.spawn();
        } else if !self.shift(0, -1) {
            self.lock();
        }
    }

    /// Movement engine: accept `candidate` iff all four of its cells are in
    /// bounds and free. Acceptance atomically replaces the active piece;
    /// rejection changes nothing.
    pub fn try_move(&mut self, candidate: Piece) -> bool {
        let legal = candidate
            .cells()
            .iter()
            .all(|&(x, y)| self.grid.is_free(x, y));
        if legal {
            self.active = Some(candidate);
        }
        legal
    }

    pub fn move_left(&mut self) -> bool {
        self.shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.shift(1, 0)
    }

    /// Move the piece down one row without locking it.
    pub fn soft_drop(&mut self) -> bool {
        self.shift(0, -1)
    }

    fn shift(&mut self, dx: i8, dy: i8) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        self.try_move(active.with_position(active.x() + dx, active.y() + dy))
    }

    /// Rotate the piece in place; a colliding rotation leaves it unchanged.
    pub fn rotate(&mut self) -> bool {
        if self.paused || self.game_over {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        self.try_move(active.rotated())
    }

    /// Drop as far as possible, then lock immediately. Returns whether a
    /// lock happened.
    pub fn hard_drop(&mut self) -> bool {
        if self.paused || self.game_over || self.active.is_none() {
            return false;
        }
        while self.shift(0, -1) {}
        self.lock();
        true
    }

    /// Commit the piece, clear rows, and score. A clearing lock defers the
    /// respawn to the next tick; otherwise the next piece spawns at once.
    fn lock(&mut self) {
        let Some(active) = self.active else {
            return;
        };
        self.grid.commit(&active);
        let cleared = self.grid.clear_rows();
        if cleared.is_empty() {
            self.spawn();
        } else {
            self.score += line_clear_score(cleared.len());
            self.falling_finished = true;
            self.active = None;
        }
    }

    /// Spawn a random piece at the top of the board.
    ///
    /// A colliding spawn is the sole game-over trigger: the active piece is
    /// dropped and the high score finalized. Ticks are no-ops from then on
    /// until `restart`.
    pub fn spawn(&mut self) {
        let kind = self.picker.draw();
        if !self.try_move(Piece::spawn(kind)) {
            self.active = None;
            self.game_over = true;
            self.high_score = self.high_score.max(self.score);
        }
    }

    /// Freeze the game; gravity and piece commands are suppressed until
    /// `resume`.
    pub fn pause(&mut self) {
        if !self.game_over {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Fresh grid and score; the high score survives for the life of the
    /// process.
    pub fn restart(&mut self) {
        self.grid.reset();
        self.active = None;
        self.score = 0;
        self.falling_finished = false;
        self.paused = false;
        self.game_over = false;
        self.started = true;
        self.spawn();
    }

    /// Route an input action to the command surface.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => {
                if self.paused {
                    self.resume();
                } else {
                    self.pause();
                }
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Project the query surface for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        for (idx, &cell) in self.grid.cells().iter().enumerate() {
            snap.cells[idx / BOARD_WIDTH][idx % BOARD_WIDTH] = cell;
        }
        snap.active = self.active.map(|piece| ActiveSnapshot {
            kind: piece.kind(),
            cells: piece.cells(),
        });
        snap.score = self.score;
        snap.high_score = self.high_score;
        snap.paused = self.paused;
        snap.game_over = self.game_over;
        snap
    }
}
