//! Left-hand wall following.
//!
//! In a perfect maze the left-hand wall traces a walk around the
//! spanning tree that visits every cell, so a discrete agent always
//! reaches the goal. Each passage is walked at most twice and each
//! dead end costs one extra turn, which [`decision_budget`] bounds.

use std::error::Error;
use std::fmt;

use mazemouse_grid::Grid;

use crate::agent::Agent;

/// What the solver did in one [`step`](WallFollowSolver::step).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The agent was already at the goal; nothing was done.
    Solved,
    /// Left was open: turned left and moved forward.
    Left,
    /// Front was open: moved forward.
    Forward,
    /// Only right was open: turned right and moved forward.
    Right,
    /// Walled on three sides: turned around without moving.
    TurnAround,
}

impl Decision {
    /// Whether this decision included a forward move.
    pub fn moved(self) -> bool {
        matches!(self, Decision::Left | Decision::Forward | Decision::Right)
    }
}

/// Counters from a solver run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveReport {
    /// Decisions taken, excluding the final [`Decision::Solved`].
    pub decisions: usize,
    /// Decisions that moved the agent forward.
    pub forward_moves: usize,
    /// The agent's path length when the run stopped.
    pub steps: usize,
}

/// Errors from [`WallFollowSolver::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The agent was not at the goal after `limit` decisions.
    DecisionLimit {
        /// The limit that was reached.
        limit: usize,
        /// Counters at the point the run gave up.
        report: SolveReport,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecisionLimit { limit, report } => write!(
                f,
                "maze not solved after {limit} decisions ({} forward moves)",
                report.forward_moves
            ),
        }
    }
}

impl Error for SolveError {}

/// Upper bound on the decisions a discrete agent needs for `grid`:
/// `4 * width * height`.
pub fn decision_budget(grid: &Grid) -> usize {
    grid.cell_count().saturating_mul(4)
}

/// Drives an [`Agent`] with the left-hand rule.
///
/// Accepts the agent by value or as `&mut A`:
///
/// ```
/// use std::sync::Arc;
/// use mazemouse_agent::{Agent, DiscreteAgent, DiscreteConfig, WallFollowSolver, decision_budget};
/// use mazemouse_grid::generate;
///
/// let grid = Arc::new(generate(6, 6, Some(3)).unwrap());
/// let mut agent = DiscreteAgent::new(grid.clone(), DiscreteConfig::default());
/// let report = WallFollowSolver::new(&mut agent)
///     .run(decision_budget(&grid))
///     .unwrap();
/// assert!(agent.is_solved());
/// assert_eq!(report.steps, agent.steps());
/// ```
#[derive(Debug)]
pub struct WallFollowSolver<A: Agent> {
    agent: A,
    decisions: usize,
    forward_moves: usize,
}

impl<A: Agent> WallFollowSolver<A> {
    /// Wrap `agent`. The agent is used from its current pose.
    pub fn new(agent: A) -> Self {
        Self {
            agent,
            decisions: 0,
            forward_moves: 0,
        }
    }

    /// The driven agent.
    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// Release the agent.
    pub fn into_inner(self) -> A {
        self.agent
    }

    /// Counters so far.
    pub fn report(&self) -> SolveReport {
        SolveReport {
            decisions: self.decisions,
            forward_moves: self.forward_moves,
            steps: self.agent.steps(),
        }
    }

    /// Take one decision.
    pub fn step(&mut self) -> Decision {
        if self.agent.is_solved() {
            return Decision::Solved;
        }
        let walls = self.agent.check_for_walls();
        let decision = if !walls.left {
            self.agent.turn_left();
            Decision::Left
        } else if !walls.front {
            Decision::Forward
        } else if !walls.right {
            self.agent.turn_right();
            Decision::Right
        } else {
            self.agent.turn_around();
            Decision::TurnAround
        };
        if decision.moved() {
            self.agent.move_forward();
            self.forward_moves += 1;
        }
        self.decisions += 1;
        decision
    }

    /// Step until the agent is solved or `max_decisions` have been taken.
    pub fn run(&mut self, max_decisions: usize) -> Result<SolveReport, SolveError> {
        while !self.agent.is_solved() {
            if self.decisions >= max_decisions {
                let report = self.report();
                tracing::debug!(
                    limit = max_decisions,
                    forward_moves = report.forward_moves,
                    "solver hit decision limit"
                );
                return Err(SolveError::DecisionLimit {
                    limit: max_decisions,
                    report,
                });
            }
            self.step();
        }
        let report = self.report();
        tracing::debug!(
            decisions = report.decisions,
            forward_moves = report.forward_moves,
            steps = report.steps,
            "maze solved"
        );
        Ok(report)
    }
}
