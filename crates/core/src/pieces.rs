//! Shape table - static tetromino geometry.
//!
//! Each kind is described by four block offsets relative to the piece
//! origin. A piece's absolute cells are `(x + dx, y - dy)` on the y-up
//! board, so offsets with larger `dy` sit lower on the screen.

use blockfall_types::ShapeKind;

/// Offset of a single block relative to the piece origin.
pub type BlockOffset = (i8, i8);

/// Footprint of a piece: 4 block offsets.
pub type PieceShape = [BlockOffset; 4];

/// Canonical footprint for a kind.
pub fn footprint(kind: ShapeKind) -> PieceShape {
    match kind {
        ShapeKind::I => [(0, -1), (0, 0), (0, 1), (0, 2)],
        ShapeKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        ShapeKind::T => [(-1, 0), (0, 0), (1, 0), (0, 1)],
        ShapeKind::S => [(0, -1), (0, 0), (1, 0), (1, 1)],
        ShapeKind::Z => [(0, -1), (0, 0), (-1, 0), (-1, 1)],
        ShapeKind::J => [(1, -1), (0, -1), (0, 0), (0, 1)],
        ShapeKind::L => [(-1, -1), (0, -1), (0, 0), (0, 1)],
    }
}

/// Rotate a footprint 90 degrees about the piece origin: `(x, y) -> (y, -x)`.
///
/// The square is rotation-invariant and returns its offsets unchanged.
pub fn rotate_offsets(kind: ShapeKind, offsets: PieceShape) -> PieceShape {
    if kind == ShapeKind::O {
        return offsets;
    }
    offsets.map(|(x, y)| (y, -x))
}
