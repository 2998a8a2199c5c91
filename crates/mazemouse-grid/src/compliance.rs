//! Structural checks every generated grid must pass.
//!
//! Shared by the generator tests and the segment index tests.

use crate::grid::Grid;
use mazemouse_core::{Cell, Heading};

/// Every boundary side is walled.
pub(crate) fn assert_boundary_closed(grid: &Grid) {
    for x in 0..grid.width() {
        assert!(grid.has_wall(Cell::new(x, 0), Heading::North));
        assert!(grid.has_wall(Cell::new(x, grid.height() - 1), Heading::South));
    }
    for y in 0..grid.height() {
        assert!(grid.has_wall(Cell::new(0, y), Heading::West));
        assert!(grid.has_wall(Cell::new(grid.width() - 1, y), Heading::East));
    }
}

/// Every interior wall agrees with its neighbour's opposite wall.
pub(crate) fn assert_symmetric(grid: &Grid) {
    for (cell, walls) in grid.cells() {
        for h in Heading::ALL {
            if let Some(n) = grid.neighbour(cell, h) {
                assert_eq!(
                    walls.contains(h),
                    grid.has_wall(n, h.opposite()),
                    "asymmetric wall between {cell} and {n}"
                );
            }
        }
    }
}

/// Exactly `cells - 1` passages and every cell reachable from the start.
pub(crate) fn assert_perfect(grid: &Grid) {
    assert_eq!(grid.passage_count() + 1, grid.cell_count());
    assert_eq!(grid.reachable_from(grid.start()), grid.cell_count());
    assert_eq!(grid.reachable_from(grid.end()), grid.cell_count());
}

pub(crate) fn assert_all(grid: &Grid) {
    assert_boundary_closed(grid);
    assert_symmetric(grid);
    assert_perfect(grid);
    assert!(grid.check_consistency().is_ok());
}
