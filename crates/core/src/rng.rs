//! Seedable randomness for piece selection.
//!
//! The generator is an owned handle passed into the game at construction;
//! there is no ambient global random state, so a fixed seed replays the
//! same piece sequence.

use blockfall_types::ShapeKind;

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would never leave zero.
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Owned source of piece kinds: every draw is uniform over the seven kinds.
#[derive(Debug, Clone)]
pub struct PiecePicker {
    rng: SimpleRng,
}

impl PiecePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next kind, consuming one unit of randomness.
    pub fn draw(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }

    /// Current generator state, usable to replay the sequence from here.
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}
