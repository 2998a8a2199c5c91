//! A maze session: one grid, one agent.
//!
//! # Ownership model
//!
//! The session owns the grid through an `Arc` and hands a clone of it
//! to the agent it builds. Replacing the grid (regenerate or load)
//! always rebuilds the agent, so an agent never outlives the maze it
//! was placed in.

use std::sync::Arc;

use mazemouse_agent::{
    decision_budget, Agent, ContinuousAgent, DiscreteAgent, SolveError, SolveReport,
    WallFollowSolver, WallReadings,
};
use mazemouse_core::{Cell, Heading};
use mazemouse_grid::{generate, Grid, Point};

use crate::config::{AgentKind, ConfigError, SessionConfig};

// Fails to compile if a session can no longer move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Session>();
    }
};

// ── SessionAgent ────────────────────────────────────────────────

/// The agent a session drives.
#[derive(Clone, Debug)]
pub enum SessionAgent {
    /// Cell-stepping agent.
    Discrete(DiscreteAgent),
    /// Pixel-space disc agent.
    Continuous(ContinuousAgent),
}

impl SessionAgent {
    fn build(grid: Arc<Grid>, config: &SessionConfig) -> Result<Self, ConfigError> {
        Ok(match config.agent {
            AgentKind::Discrete => Self::Discrete(DiscreteAgent::new(grid, config.discrete)),
            AgentKind::Continuous => {
                Self::Continuous(ContinuousAgent::new(grid, config.continuous)?)
            }
        })
    }

    /// Which variant this is.
    pub fn kind(&self) -> AgentKind {
        match self {
            Self::Discrete(_) => AgentKind::Discrete,
            Self::Continuous(_) => AgentKind::Continuous,
        }
    }

    /// The agent as a trait object.
    pub fn as_dyn_mut(&mut self) -> &mut dyn Agent {
        match self {
            Self::Discrete(a) => a,
            Self::Continuous(a) => a,
        }
    }

    fn as_dyn(&self) -> &dyn Agent {
        match self {
            Self::Discrete(a) => a,
            Self::Continuous(a) => a,
        }
    }

    /// Current pose.
    pub fn pose(&self) -> Pose {
        match self {
            Self::Discrete(a) => Pose::Discrete {
                cell: a.position(),
                heading: a.heading(),
            },
            Self::Continuous(a) => Pose::Continuous {
                position: a.position(),
                angle: a.angle(),
            },
        }
    }
}

impl Agent for SessionAgent {
    fn move_forward(&mut self) {
        self.as_dyn_mut().move_forward();
    }

    fn turn_left(&mut self) {
        self.as_dyn_mut().turn_left();
    }

    fn turn_right(&mut self) {
        self.as_dyn_mut().turn_right();
    }

    fn turn_around(&mut self) {
        self.as_dyn_mut().turn_around();
    }

    fn check_for_walls(&self) -> WallReadings {
        self.as_dyn().check_for_walls()
    }

    fn is_solved(&self) -> bool {
        self.as_dyn().is_solved()
    }

    fn reset(&mut self) {
        self.as_dyn_mut().reset();
    }

    fn steps(&self) -> usize {
        self.as_dyn().steps()
    }
}

// ── Snapshot ────────────────────────────────────────────────────

/// Agent pose in the units of its variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pose {
    /// Cell and compass heading.
    Discrete {
        /// Occupied cell.
        cell: Cell,
        /// Facing.
        heading: Heading,
    },
    /// Pixel position and angle in degrees.
    Continuous {
        /// Disc centre.
        position: Point,
        /// Heading in `[0, 360)`.
        angle: f64,
    },
}

/// Read-only view of a session for renderers and script hosts.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionSnapshot {
    /// Maze columns.
    pub width: u32,
    /// Maze rows.
    pub height: u32,
    /// Start cell.
    pub start: Cell,
    /// Goal cell.
    pub end: Cell,
    /// Generation seed, if known.
    pub seed: Option<u64>,
    /// Agent pose.
    pub pose: Pose,
    /// Agent path length.
    pub steps: usize,
    /// Whether the agent is at the goal.
    pub solved: bool,
}

// ── Session ─────────────────────────────────────────────────────

/// One maze and the agent exploring it.
///
/// # Example
///
/// ```
/// use mazemouse_engine::{Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig {
///     seed: Some(4),
///     ..SessionConfig::default()
/// })
/// .unwrap();
/// let report = session.solve().unwrap();
/// assert!(session.snapshot().solved);
/// assert_eq!(report.steps, session.snapshot().steps);
/// ```
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    grid: Arc<Grid>,
    agent: SessionAgent,
}

impl Session {
    /// Validate `config`, generate the first maze, and place the agent.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Arc::new(generate(config.width, config.height, config.seed)?);
        let agent = SessionAgent::build(grid.clone(), &config)?;
        tracing::debug!(
            width = config.width,
            height = config.height,
            seed = grid.seed(),
            agent = ?config.agent,
            "session created"
        );
        Ok(Self {
            config,
            grid,
            agent,
        })
    }

    /// The configuration in effect.
    ///
    /// Width and height follow the current grid after a
    /// [`load_grid`](Self::load_grid).
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The current maze.
    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    /// The agent.
    pub fn agent(&self) -> &SessionAgent {
        &self.agent
    }

    /// The agent, for scripts to drive.
    pub fn agent_mut(&mut self) -> &mut SessionAgent {
        &mut self.agent
    }

    fn install(&mut self, grid: Grid) -> Result<(), ConfigError> {
        let grid = Arc::new(grid);
        self.agent = SessionAgent::build(grid.clone(), &self.config)?;
        self.grid = grid;
        Ok(())
    }

    /// Replace the maze with a newly generated one of the configured size
    /// and rebuild the agent at its start.
    ///
    /// `None` draws a fresh seed.
    pub fn regenerate(&mut self, seed: Option<u64>) -> Result<(), ConfigError> {
        let grid = generate(self.config.width, self.config.height, seed)?;
        tracing::debug!(seed = grid.seed(), "session regenerated maze");
        self.install(grid)
    }

    /// Replace the maze with one supplied by an external loader.
    ///
    /// The configured dimensions are updated to match, so later
    /// regenerations keep the loaded size.
    pub fn load_grid(&mut self, grid: Grid) -> Result<(), ConfigError> {
        let (width, height) = (grid.width(), grid.height());
        self.install(grid)?;
        self.config.width = width;
        self.config.height = height;
        tracing::debug!(width, height, "session loaded maze");
        Ok(())
    }

    /// Return the agent to the start.
    pub fn reset(&mut self) {
        self.agent.reset();
    }

    /// Wall-follow from the agent's current pose until solved, within
    /// `4 * width * height` decisions.
    pub fn solve(&mut self) -> Result<SolveReport, SolveError> {
        let budget = decision_budget(&self.grid);
        WallFollowSolver::new(&mut self.agent).run(budget)
    }

    /// Current state for renderers.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            width: self.grid.width(),
            height: self.grid.height(),
            start: self.grid.start(),
            end: self.grid.end(),
            seed: self.grid.seed(),
            pose: self.agent.pose(),
            steps: self.agent.steps(),
            solved: self.agent.is_solved(),
        }
    }
}
