//! Hand-built grids.
//!
//! - [`corridor`]: a single open row.
//! - [`serpentine`]: a perfect maze that snakes row by row.
//! - [`open_room`]: no interior walls at all (not perfect).
//! - [`walled_goal`]: a corridor whose end cell is sealed off.

use std::sync::Arc;

use mazemouse_core::{Cell, Heading, Walls};
use mazemouse_grid::{generate, Grid};

fn closed(width: u32, height: u32) -> Vec<Walls> {
    vec![Walls::ALL; (width * height) as usize]
}

fn open_between(walls: &mut [Walls], width: u32, cell: Cell, side: Heading) {
    let Some(next) = cell.step(side) else {
        return;
    };
    walls[cell.flat_index(width)].remove(side);
    walls[next.flat_index(width)].remove(side.opposite());
}

fn build(width: u32, height: u32, walls: Vec<Walls>) -> Grid {
    Grid::from_parts(
        width,
        height,
        walls,
        Cell::new(0, 0),
        Cell::new(width - 1, height - 1),
    )
    .unwrap_or_else(|e| panic!("fixture {width}x{height} is invalid: {e}"))
}

/// A `len * 1` maze with every interior wall removed.
pub fn corridor(len: u32) -> Grid {
    let mut walls = closed(len, 1);
    for x in 0..len.saturating_sub(1) {
        open_between(&mut walls, len, Cell::new(x, 0), Heading::East);
    }
    build(len, 1, walls)
}

/// A perfect maze where every row is open and consecutive rows join at
/// alternating ends: east end after even rows, west end after odd rows.
pub fn serpentine(width: u32, height: u32) -> Grid {
    let mut walls = closed(width, height);
    for y in 0..height {
        for x in 0..width - 1 {
            open_between(&mut walls, width, Cell::new(x, y), Heading::East);
        }
        if y + 1 < height {
            let x = if y % 2 == 0 { width - 1 } else { 0 };
            open_between(&mut walls, width, Cell::new(x, y), Heading::South);
        }
    }
    build(width, height, walls)
}

/// A `width * height` room with only the outer boundary.
pub fn open_room(width: u32, height: u32) -> Grid {
    let mut walls = closed(width, height);
    for y in 0..height {
        for x in 0..width {
            let cell = Cell::new(x, y);
            if x + 1 < width {
                open_between(&mut walls, width, cell, Heading::East);
            }
            if y + 1 < height {
                open_between(&mut walls, width, cell, Heading::South);
            }
        }
    }
    build(width, height, walls)
}

/// A `len * 1` corridor whose last cell is walled off from the rest.
///
/// No agent can reach the goal, so solvers must stop at their limit.
pub fn walled_goal(len: u32) -> Grid {
    let mut walls = closed(len, 1);
    for x in 0..len.saturating_sub(2) {
        open_between(&mut walls, len, Cell::new(x, 0), Heading::East);
    }
    build(len, 1, walls)
}

/// A generated maze behind an `Arc`, ready to hand to an agent.
pub fn seeded(width: u32, height: u32, seed: u64) -> Arc<Grid> {
    Arc::new(
        generate(width, height, Some(seed))
            .unwrap_or_else(|e| panic!("generate {width}x{height}: {e}")),
    )
}
