//! Perfect-maze generation by randomized depth-first backtracking.
//!
//! The carve walks an explicit stack of frames, one per cell on the
//! current path, so maze size is bounded by memory rather than call
//! depth. Each frame owns its own shuffled heading order.

use crate::error::GridError;
use crate::grid::{check_dimensions, Grid};
use mazemouse_core::{Cell, Heading};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Builder for perfect mazes.
///
/// ```
/// use mazemouse_grid::MazeGenerator;
///
/// let grid = MazeGenerator::new(8, 6).seed(42).generate().unwrap();
/// assert!(grid.is_perfect());
/// assert_eq!(grid.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct MazeGenerator {
    width: u32,
    height: u32,
    seed: Option<u64>,
}

struct Frame {
    cell: Cell,
    order: [Heading; 4],
    next: usize,
}

impl Frame {
    fn new(cell: Cell, rng: &mut ChaCha8Rng) -> Self {
        let mut order = Heading::ALL;
        order.shuffle(rng);
        Self {
            cell,
            order,
            next: 0,
        }
    }
}

impl MazeGenerator {
    /// A generator for a `width * height` maze with a fresh random seed.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            seed: None,
        }
    }

    /// Fix the seed. The same dimensions and seed always give the same maze.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Carve a maze.
    ///
    /// Start is `(0, 0)`, end is `(width - 1, height - 1)`. Without a
    /// fixed seed each call draws a new one from the thread RNG, and the
    /// seed used is recorded on the returned grid.
    pub fn generate(&self) -> Result<Grid, GridError> {
        check_dimensions(self.width, self.height)?;
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut grid = Grid::closed(self.width, self.height)?;
        carve(&mut grid, seed);
        tracing::debug!(
            width = self.width,
            height = self.height,
            seed,
            "generated maze"
        );
        Ok(grid.with_seed(Some(seed)))
    }
}

/// Generate a `width * height` perfect maze, optionally seeded.
pub fn generate(width: u32, height: u32, seed: Option<u64>) -> Result<Grid, GridError> {
    let builder = MazeGenerator::new(width, height);
    match seed {
        Some(s) => builder.seed(s).generate(),
        None => builder.generate(),
    }
}

fn carve(grid: &mut Grid, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let width = grid.width();
    let mut visited = vec![false; grid.cell_count()];
    let origin = grid.start();
    visited[origin.flat_index(width)] = true;
    let mut stack = vec![Frame::new(origin, &mut rng)];

    while let Some(frame) = stack.last_mut() {
        if frame.next == frame.order.len() {
            stack.pop();
            continue;
        }
        let heading = frame.order[frame.next];
        frame.next += 1;
        let cell = frame.cell;

        let Some(next) = grid.neighbour(cell, heading) else {
            continue;
        };
        let idx = next.flat_index(width);
        if visited[idx] {
            continue;
        }
        grid.carve(cell, heading);
        visited[idx] = true;
        tracing::trace!(from = %cell, to = %next, "carved passage");
        stack.push(Frame::new(next, &mut rng));
    }
}
