//! A grid-stepping agent that moves one cell at a time.

use std::sync::Arc;

use indexmap::IndexMap;
use mazemouse_core::{Cell, Heading};
use mazemouse_grid::Grid;

use crate::agent::{Agent, WallReadings};
use crate::config::DiscreteConfig;

/// An agent that occupies exactly one cell and faces one of four headings.
///
/// Wall checks read only the current cell's wall set; the grid's
/// symmetry invariant makes that equivalent to checking the neighbour.
#[derive(Clone, Debug)]
pub struct DiscreteAgent {
    grid: Arc<Grid>,
    config: DiscreteConfig,
    position: Cell,
    heading: Heading,
    path: Vec<Cell>,
    visits: IndexMap<Cell, u32>,
}

impl DiscreteAgent {
    /// Place a new agent at the grid's start.
    pub fn new(grid: Arc<Grid>, config: DiscreteConfig) -> Self {
        let start = grid.start();
        let mut agent = Self {
            grid,
            config,
            position: start,
            heading: config.initial_heading,
            path: Vec::new(),
            visits: IndexMap::new(),
        };
        agent.reset();
        agent
    }

    /// The maze this agent moves through.
    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    /// Current cell.
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Face `heading` directly.
    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Every position recorded since the last reset, starting with the
    /// start cell. Blocked moves record the unchanged position.
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// How often each cell appears in the path, in first-visit order.
    pub fn visit_counts(&self) -> &IndexMap<Cell, u32> {
        &self.visits
    }

    /// Step one cell along `heading` without turning.
    ///
    /// Returns whether the agent moved. The resulting position is
    /// appended to the path either way.
    pub fn move_towards(&mut self, heading: Heading) -> bool {
        let moved = match self.grid.passage(self.position, heading) {
            Some(next) => {
                self.position = next;
                true
            }
            None => {
                tracing::trace!(cell = %self.position, %heading, "move blocked by wall");
                false
            }
        };
        self.record(self.position);
        moved
    }

    fn record(&mut self, cell: Cell) {
        self.path.push(cell);
        *self.visits.entry(cell).or_insert(0) += 1;
    }
}

impl Agent for DiscreteAgent {
    fn move_forward(&mut self) {
        self.move_towards(self.heading);
    }

    fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    fn turn_around(&mut self) {
        self.heading = self.heading.opposite();
    }

    fn check_for_walls(&self) -> WallReadings {
        let [left, front, right] = self
            .heading
            .relative_triple()
            .map(|side| self.grid.has_wall(self.position, side));
        WallReadings::new(left, front, right)
    }

    fn is_solved(&self) -> bool {
        self.position == self.grid.end()
    }

    fn reset(&mut self) {
        self.position = self.grid.start();
        self.heading = self.config.initial_heading;
        self.path.clear();
        self.visits.clear();
        self.record(self.position);
    }

    fn steps(&self) -> usize {
        self.path.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Sensor;
    use mazemouse_grid::generate;
    use proptest::prelude::*;

    fn agent(w: u32, h: u32, seed: u64) -> DiscreteAgent {
        let grid = Arc::new(generate(w, h, Some(seed)).unwrap());
        DiscreteAgent::new(grid, DiscreteConfig::default())
    }

    // ── Construction ────────────────────────────────────────

    #[test]
    fn starts_at_start_facing_north() {
        let a = agent(4, 3, 1);
        assert_eq!(a.position(), Cell::new(0, 0));
        assert_eq!(a.heading(), Heading::North);
        assert_eq!(a.path(), &[Cell::new(0, 0)]);
        assert_eq!(a.steps(), 1);
    }

    #[test]
    fn single_cell_is_solved_and_walled() {
        let a = agent(1, 1, 0);
        assert!(a.is_solved());
        assert_eq!(a.check_for_walls(), WallReadings::new(true, true, true));
    }

    // ── Movement ────────────────────────────────────────────

    #[test]
    fn blocked_move_still_records_position() {
        let mut a = agent(2, 1, 0);
        a.move_forward(); // north is the boundary
        assert_eq!(a.position(), Cell::new(0, 0));
        assert_eq!(a.path(), &[Cell::new(0, 0), Cell::new(0, 0)]);
        assert_eq!(a.visit_counts()[&Cell::new(0, 0)], 2);
    }

    #[test]
    fn corridor_walk_reaches_end() {
        let mut a = agent(2, 1, 0);
        a.turn_right();
        assert_eq!(a.heading(), Heading::East);
        assert!(!a.read_sensor(Sensor::Front));
        a.move_forward();
        assert_eq!(a.position(), Cell::new(1, 0));
        assert!(a.is_solved());
        assert_eq!(a.steps(), 2);
    }

    #[test]
    fn move_towards_keeps_heading() {
        let mut a = agent(3, 1, 0);
        assert!(a.move_towards(Heading::East));
        assert_eq!(a.heading(), Heading::North);
        assert!(!a.move_towards(Heading::South));
        assert_eq!(a.position(), Cell::new(1, 0));
    }

    #[test]
    fn turns_cycle_headings() {
        let mut a = agent(2, 2, 3);
        a.turn_left();
        assert_eq!(a.heading(), Heading::West);
        a.turn_around();
        assert_eq!(a.heading(), Heading::East);
        a.set_heading(Heading::South);
        a.turn_right();
        assert_eq!(a.heading(), Heading::West);
    }

    #[test]
    fn check_for_walls_is_relative_to_heading() {
        // In a 3x1 corridor at the west end facing east: left is the
        // north boundary, front is open, right is the south boundary.
        let mut a = agent(3, 1, 0);
        a.set_heading(Heading::East);
        assert_eq!(a.check_for_walls(), WallReadings::new(true, false, true));
        a.set_heading(Heading::South);
        assert_eq!(a.check_for_walls(), WallReadings::new(false, true, true));
    }

    #[test]
    fn reset_restores_start() {
        let mut a = DiscreteAgent::new(
            Arc::new(generate(3, 1, Some(0)).unwrap()),
            DiscreteConfig {
                initial_heading: Heading::East,
            },
        );
        a.move_forward();
        a.turn_around();
        a.reset();
        assert_eq!(a.position(), Cell::new(0, 0));
        assert_eq!(a.heading(), Heading::East);
        assert_eq!(a.path(), &[Cell::new(0, 0)]);
        assert_eq!(a.visit_counts().len(), 1);
    }

    #[test]
    fn visit_counts_keep_first_visit_order() {
        let mut a = agent(3, 1, 0);
        a.move_towards(Heading::East);
        a.move_towards(Heading::East);
        a.move_towards(Heading::West);
        let order: Vec<(Cell, u32)> = a.visit_counts().iter().map(|(&c, &n)| (c, n)).collect();
        assert_eq!(
            order,
            vec![
                (Cell::new(0, 0), 1),
                (Cell::new(1, 0), 2),
                (Cell::new(2, 0), 1)
            ]
        );
    }

    proptest! {
        #[test]
        fn never_crosses_a_wall(
            seed in any::<u64>(),
            w in 1u32..8,
            h in 1u32..8,
            script in prop::collection::vec(0u8..4, 0..200),
        ) {
            let mut a = agent(w, h, seed);
            for op in script {
                match op {
                    0 => a.move_forward(),
                    1 => a.turn_left(),
                    2 => a.turn_right(),
                    _ => a.turn_around(),
                }
            }
            let grid = a.grid().clone();
            for pair in a.path().windows(2) {
                let (from, to) = (pair[0], pair[1]);
                if from != to {
                    let crossed = Heading::ALL
                        .into_iter()
                        .find(|&h| grid.neighbour(from, h) == Some(to));
                    prop_assert!(crossed.is_some(), "{} -> {} is not adjacent", from, to);
                    prop_assert!(!grid.has_wall(from, crossed.unwrap()));
                }
            }
        }
    }
}
