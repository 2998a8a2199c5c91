//! Session configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use mazemouse_agent::{ConfigError as AgentConfigError, ContinuousConfig, DiscreteConfig};
use mazemouse_grid::GridError;

// ── AgentKind ───────────────────────────────────────────────────

/// Which agent variant a session drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AgentKind {
    /// Cell-stepping agent.
    #[default]
    Discrete,
    /// Pixel-space disc agent.
    Continuous,
}

// ── ConfigError ─────────────────────────────────────────────────

/// Errors detected while building or rebuilding a session.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero.
    InvalidDimensions {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// Maze generation or grid validation failed.
    Grid(GridError),
    /// Agent tuning is invalid.
    Agent(AgentConfigError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "maze dimensions must be positive, got {width}x{height}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Agent(e) => write!(f, "agent: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Agent(e) => Some(e),
            Self::InvalidDimensions { .. } => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<AgentConfigError> for ConfigError {
    fn from(e: AgentConfigError) -> Self {
        Self::Agent(e)
    }
}

// ── SessionConfig ───────────────────────────────────────────────

/// Everything needed to build a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Maze columns. Default: 10.
    pub width: u32,
    /// Maze rows. Default: 10.
    pub height: u32,
    /// Seed for the first maze; `None` draws a fresh one.
    pub seed: Option<u64>,
    /// Which agent to build.
    pub agent: AgentKind,
    /// Tuning used when `agent` is [`AgentKind::Discrete`].
    pub discrete: DiscreteConfig,
    /// Tuning used when `agent` is [`AgentKind::Continuous`].
    pub continuous: ContinuousConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            seed: None,
            agent: AgentKind::default(),
            discrete: DiscreteConfig::default(),
            continuous: ContinuousConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Check dimensions and the continuous tuning.
    ///
    /// Continuous tuning is validated even for discrete sessions so a
    /// config can switch kinds without surprises.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        self.continuous.validate()?;
        Ok(())
    }
}
