//! Grid behavior through the public surface.

use blockfall::core::{Grid, Piece};
use blockfall::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(grid: &mut Grid, y: i8, kind: ShapeKind) {
    for x in 0..BOARD_WIDTH as i8 {
        assert!(grid.set(x, y, Some(kind)));
    }
}

#[test]
fn new_grid_is_entirely_empty() {
    let grid = Grid::new();
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(grid.occupant_at(x, y), None);
            assert!(grid.is_free(x, y));
        }
    }
}

#[test]
fn out_of_bounds_cells_are_never_free() {
    let grid = Grid::new();
    assert!(!grid.is_free(-1, 0));
    assert!(!grid.is_free(0, -1));
    assert!(!grid.is_free(BOARD_WIDTH as i8, 0));
    assert!(!grid.is_free(0, BOARD_HEIGHT as i8));
}

#[test]
#[should_panic(expected = "out of range")]
fn occupant_query_out_of_range_fails_loudly() {
    Grid::new().occupant_at(-1, 5);
}

#[test]
fn commit_writes_all_four_cells() {
    let mut grid = Grid::new();
    let piece = Piece::new(ShapeKind::T, 4, 10);
    grid.commit(&piece);

    for (x, y) in piece.cells() {
        assert_eq!(grid.occupant_at(x, y), Some(ShapeKind::T));
    }
    assert_eq!(grid.cells().iter().filter(|c| c.is_some()).count(), 4);
}

// The fixture from the line-clear contract: a full bottom row under a
// half-occupied row collapses into a single shifted row.
#[test]
fn single_clear_shifts_the_row_above_into_place() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 0, ShapeKind::I);
    for x in 0..5 {
        grid.set(x, 1, Some(ShapeKind::L));
    }

    let cleared = grid.clear_rows();
    assert_eq!(cleared.len(), 1);
    assert_eq!(cleared.as_slice(), [0]);

    for x in 0..BOARD_WIDTH as i8 {
        let expected = if x < 5 { Some(ShapeKind::L) } else { None };
        assert_eq!(grid.occupant_at(x, 0), expected);
        assert_eq!(grid.occupant_at(x, (BOARD_HEIGHT - 1) as i8), None);
    }
    // Everything above row 0 is empty again.
    assert!(grid.cells()[BOARD_WIDTH..].iter().all(|c| c.is_none()));
}

#[test]
fn adjacent_full_rows_are_both_cleared() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 0, ShapeKind::I);
    fill_row(&mut grid, 1, ShapeKind::J);
    for x in 3..7 {
        grid.set(x, 2, Some(ShapeKind::Z));
    }

    // The shift pulls the second full row down into row 0, which must be
    // re-examined rather than skipped.
    let cleared = grid.clear_rows();
    assert_eq!(cleared.len(), 2);

    for x in 0..BOARD_WIDTH as i8 {
        let expected = if (3..7).contains(&x) {
            Some(ShapeKind::Z)
        } else {
            None
        };
        assert_eq!(grid.occupant_at(x, 0), expected);
    }
}

#[test]
fn separated_full_rows_are_both_cleared() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 0, ShapeKind::S);
    grid.set(0, 1, Some(ShapeKind::T));
    fill_row(&mut grid, 2, ShapeKind::O);

    let cleared = grid.clear_rows();
    assert_eq!(cleared.len(), 2);

    // The partial row lands on the bottom.
    assert_eq!(grid.occupant_at(0, 0), Some(ShapeKind::T));
    for x in 1..BOARD_WIDTH as i8 {
        assert_eq!(grid.occupant_at(x, 0), None);
    }
    assert!(grid.cells()[BOARD_WIDTH..].iter().all(|c| c.is_none()));
}

#[test]
fn no_full_rows_means_no_change() {
    let mut grid = Grid::new();
    for x in 0..9 {
        grid.set(x, 0, Some(ShapeKind::I));
    }
    let before = grid.clone();
    assert!(grid.clear_rows().is_empty());
    assert_eq!(grid, before);
}

#[test]
fn reset_restores_an_empty_grid() {
    let mut grid = Grid::new();
    fill_row(&mut grid, 3, ShapeKind::T);
    grid.reset();
    assert_eq!(grid, Grid::new());
}
