//! Integer cell coordinates.

use crate::heading::Heading;
use std::fmt;

/// A cell coordinate `(x, y)` in a maze grid.
///
/// `x` is the column and `y` the row, with `(0, 0)` in the top-left
/// corner. Bounds are owned by the grid; a bare `Cell` only guarantees
/// non-negative components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
}

impl Cell {
    /// Create a cell coordinate.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The cell one step along `heading`, or `None` if that would leave
    /// the non-negative quadrant.
    ///
    /// Upper bounds are not checked here; see `Grid::neighbour`.
    pub fn step(self, heading: Heading) -> Option<Cell> {
        let (dx, dy) = heading.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Cell { x, y })
    }

    /// Row-major flat index of this cell in a grid of the given width.
    pub fn flat_index(self, width: u32) -> usize {
        (self.y as usize) * (width as usize) + (self.x as usize)
    }
}

impl From<(u32, u32)> for Cell {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

impl From<Cell> for (u32, u32) {
    fn from(c: Cell) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
