//! The maze grid: per-cell wall sets plus start and end cells.

use crate::error::GridError;
use mazemouse_core::{Cell, Heading, Walls};
use std::collections::VecDeque;

/// A rectangular maze of `width * height` cells.
///
/// Each cell stores the set of walls around it. Walls are kept
/// symmetric (the east wall of `(x, y)` is the west wall of
/// `(x + 1, y)`) and every boundary side is walled, so agents can never
/// step or see outside the grid.
///
/// Grids are immutable once built. Equality compares the maze layout
/// and endpoints only; the generation seed is metadata.
#[derive(Clone, Debug)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<Walls>,
    start: Cell,
    end: Cell,
    seed: Option<u64>,
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.start == other.start
            && self.end == other.end
            && self.cells == other.cells
    }
}

impl Eq for Grid {}

/// Validate dimensions and return the cell count.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimensions { width, height });
    }
    let count = width
        .checked_mul(height)
        .ok_or(GridError::TooLarge { width, height })?;
    Ok(count as usize)
}

impl Grid {
    /// A grid with every wall present, start at `(0, 0)` and end at
    /// the bottom-right corner. This is the generator's starting state.
    pub(crate) fn closed(width: u32, height: u32) -> Result<Self, GridError> {
        let count = check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Walls::ALL; count],
            start: Cell::new(0, 0),
            end: Cell::new(width - 1, height - 1),
            seed: None,
        })
    }

    /// Rebuild a grid from its parts.
    ///
    /// `walls` is row-major, one entry per cell. The layout is checked
    /// for symmetric walls and a closed boundary, and both endpoints
    /// must lie inside the grid. The result has no seed.
    pub fn from_parts(
        width: u32,
        height: u32,
        walls: Vec<Walls>,
        start: Cell,
        end: Cell,
    ) -> Result<Self, GridError> {
        let expected = check_dimensions(width, height)?;
        if walls.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: walls.len(),
            });
        }
        let grid = Self {
            width,
            height,
            cells: walls,
            start,
            end,
            seed: None,
        };
        for cell in [start, end] {
            if !grid.contains(cell) {
                return Err(GridError::CoordOutOfBounds {
                    cell,
                    width,
                    height,
                });
            }
        }
        grid.check_consistency()?;
        Ok(grid)
    }

    /// Attach the seed this layout was generated from.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The agent's starting cell.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// The goal cell.
    pub fn end(&self) -> Cell {
        self.end
    }

    /// Seed the layout was generated from, if known.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Wall set of `cell`, or `None` if out of bounds.
    pub fn walls(&self, cell: Cell) -> Option<Walls> {
        if self.contains(cell) {
            Some(self.cells[cell.flat_index(self.width)])
        } else {
            None
        }
    }

    /// Row-major wall sets, one per cell.
    pub fn wall_sets(&self) -> &[Walls] {
        &self.cells
    }

    /// Whether a wall blocks `cell` on its `side`.
    ///
    /// Out-of-bounds cells report every side as walled.
    pub fn has_wall(&self, cell: Cell, side: Heading) -> bool {
        self.walls(cell).is_none_or(|w| w.contains(side))
    }

    /// The in-bounds cell adjacent to `cell` along `heading`, ignoring walls.
    pub fn neighbour(&self, cell: Cell, heading: Heading) -> Option<Cell> {
        cell.step(heading).filter(|&n| self.contains(n))
    }

    /// The cell reached by stepping from `cell` along `heading`, or
    /// `None` if a wall is in the way.
    pub fn passage(&self, cell: Cell, heading: Heading) -> Option<Cell> {
        if self.has_wall(cell, heading) {
            None
        } else {
            self.neighbour(cell, heading)
        }
    }

    /// Iterate `(cell, walls)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Walls)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().map(move |(i, &w)| {
            let i = i as u32;
            (Cell::new(i % width, i / width), w)
        })
    }

    /// Number of open passages between adjacent cells.
    ///
    /// Each shared boundary is counted once.
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|(cell, walls)| {
                [Heading::East, Heading::South]
                    .into_iter()
                    .filter(|&h| !walls.contains(h) && self.neighbour(cell, h).is_some())
                    .count()
            })
            .sum()
    }

    /// Number of cells reachable from `origin` through open passages.
    pub fn reachable_from(&self, origin: Cell) -> usize {
        if !self.contains(origin) {
            return 0;
        }
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        seen[origin.flat_index(self.width)] = true;
        queue.push_back(origin);
        let mut count = 0;
        while let Some(cell) = queue.pop_front() {
            count += 1;
            for h in Heading::ALL {
                if let Some(next) = self.passage(cell, h) {
                    let idx = next.flat_index(self.width);
                    if !seen[idx] {
                        seen[idx] = true;
                        queue.push_back(next);
                    }
                }
            }
        }
        count
    }

    /// Whether the maze is perfect: connected, with exactly one path
    /// between any two cells.
    pub fn is_perfect(&self) -> bool {
        self.passage_count() + 1 == self.cells.len()
            && self.reachable_from(self.start) == self.cells.len()
    }

    /// Check wall symmetry and the closed boundary.
    pub fn check_consistency(&self) -> Result<(), GridError> {
        for (cell, walls) in self.cells() {
            for side in Heading::ALL {
                match self.neighbour(cell, side) {
                    None if !walls.contains(side) => {
                        return Err(GridError::OpenBoundary { cell, side });
                    }
                    None => {}
                    Some(n) => {
                        if walls.contains(side) != self.has_wall(n, side.opposite()) {
                            return Err(GridError::AsymmetricWall { cell, side });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Remove the wall between `cell` and its neighbour along `side`.
    ///
    /// Both sides are cleared. No-op on the boundary.
    pub(crate) fn carve(&mut self, cell: Cell, side: Heading) {
        if let Some(n) = self.neighbour(cell, side) {
            self.cells[cell.flat_index(self.width)].remove(side);
            self.cells[n.flat_index(self.width)].remove(side.opposite());
        }
    }
}
