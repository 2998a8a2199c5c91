//! Agents that move through a mazemouse [`Grid`](mazemouse_grid::Grid).
//!
//! Two implementations share the [`Agent`] trait:
//!
//! - [`DiscreteAgent`] steps cell to cell and reads walls straight from
//!   the grid.
//! - [`ContinuousAgent`] moves a disc through pixel space, collides with
//!   wall segments, and senses walls with rays.
//!
//! [`WallFollowSolver`] drives either one with the left-hand rule.
//!
//! Agents hold the grid through an [`Arc`](std::sync::Arc), so several
//! agents can share one maze and a session can own both.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod continuous;
pub mod discrete;
pub mod solver;

pub use agent::{Agent, ParseSensorError, Sensor, WallReadings};
pub use config::{ConfigError, ContinuousConfig, DiscreteConfig};
pub use continuous::ContinuousAgent;
pub use discrete::DiscreteAgent;
pub use solver::{decision_budget, Decision, SolveError, SolveReport, WallFollowSolver};
