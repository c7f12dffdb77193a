//! Piece - a live tetromino instance.

use blockfall_types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::pieces::{footprint, rotate_offsets, PieceShape};

/// The active falling piece: kind, rotation footprint, absolute position.
///
/// `with_position`, `with_offsets`, and `rotated` build candidate values
/// without touching any board state; the movement engine validates a
/// candidate against the grid before storing it as the current piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: ShapeKind,
    offsets: PieceShape,
    x: i8,
    y: i8,
}

impl Piece {
    pub fn new(kind: ShapeKind, x: i8, y: i8) -> Self {
        Self {
            kind,
            offsets: footprint(kind),
            x,
            y,
        }
    }

    /// A piece at the spawn position: horizontally centered, raised so the
    /// footprint just touches the top row.
    pub fn spawn(kind: ShapeKind) -> Self {
        let piece = Self::new(kind, (BOARD_WIDTH / 2) as i8, 0);
        let y = (BOARD_HEIGHT - 1) as i8 + piece.min_offset_y();
        piece.with_position(piece.x, y)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn offsets(&self) -> PieceShape {
        self.offsets
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Candidate at a new position, same footprint.
    pub fn with_position(self, x: i8, y: i8) -> Self {
        Self { x, y, ..self }
    }

    /// Candidate with a replaced footprint, same position.
    pub fn with_offsets(self, offsets: PieceShape) -> Self {
        Self { offsets, ..self }
    }

    /// Candidate rotated 90 degrees in place.
    pub fn rotated(self) -> Self {
        self.with_offsets(rotate_offsets(self.kind, self.offsets))
    }

    /// Minimum relative y of the footprint; determines the spawn height.
    pub fn min_offset_y(&self) -> i8 {
        self.offsets.iter().map(|&(_, dy)| dy).min().unwrap_or(0)
    }

    /// The four absolute board cells covered by the piece.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.offsets.map(|(dx, dy)| (self.x + dx, self.y - dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_touches_the_top_row() {
        for kind in ShapeKind::ALL {
            let piece = Piece::spawn(kind);
            let top = piece.cells().iter().map(|&(_, y)| y).max().unwrap();
            assert_eq!(top, (BOARD_HEIGHT - 1) as i8, "{kind:?}");
        }
    }

    #[test]
    fn candidates_do_not_alias_the_original() {
        let piece = Piece::new(ShapeKind::T, 4, 10);
        let moved = piece.with_position(5, 9);
        assert_eq!(piece.x(), 4);
        assert_eq!(piece.y(), 10);
        assert_eq!(moved.x(), 5);
        assert_eq!(moved.y(), 9);
        assert_eq!(moved.offsets(), piece.offsets());
    }

    #[test]
    fn cells_project_offsets_onto_the_board() {
        let piece = Piece::new(ShapeKind::O, 4, 10);
        let mut cells = piece.cells();
        cells.sort_unstable();
        assert_eq!(cells, [(4, 9), (4, 10), (5, 9), (5, 10)]);
    }
}
