//! Benchmark profiles for mazemouse.
//!
//! - [`reference_grid`]: 100x100 maze (10K cells)
//! - [`stress_grid`]: 316x316 maze (~100K cells)
//! - [`reference_session`]: session config over the reference size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use mazemouse_agent::{ContinuousAgent, ContinuousConfig};
use mazemouse_engine::{AgentKind, SessionConfig};
use mazemouse_grid::{generate, Grid};

/// Side length of the reference maze.
pub const REFERENCE_SIDE: u32 = 100;

/// Side length of the stress maze.
pub const STRESS_SIDE: u32 = 316;

/// Build the reference benchmark maze: 100x100.
pub fn reference_grid(seed: u64) -> Arc<Grid> {
    square(REFERENCE_SIDE, seed)
}

/// Build the stress benchmark maze: 316x316.
///
/// Large enough that a recursive carver would exhaust the default
/// thread stack.
pub fn stress_grid(seed: u64) -> Arc<Grid> {
    square(STRESS_SIDE, seed)
}

fn square(side: u32, seed: u64) -> Arc<Grid> {
    match generate(side, side, Some(seed)) {
        Ok(grid) => Arc::new(grid),
        Err(e) => panic!("benchmark maze {side}x{side} failed: {e}"),
    }
}

/// Session config for a reference-sized maze with the given agent.
pub fn reference_session(seed: u64, agent: AgentKind) -> SessionConfig {
    SessionConfig {
        width: REFERENCE_SIDE,
        height: REFERENCE_SIDE,
        seed: Some(seed),
        agent,
        ..SessionConfig::default()
    }
}

/// Continuous agent with default tuning at the start of `grid`.
pub fn continuous_agent(grid: Arc<Grid>) -> ContinuousAgent {
    match ContinuousAgent::new(grid, ContinuousConfig::default()) {
        Ok(agent) => agent,
        Err(e) => panic!("default continuous tuning rejected: {e}"),
    }
}
