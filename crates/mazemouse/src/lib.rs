//! Mazemouse: perfect-maze generation and a scriptable mouse agent.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the mazemouse sub-crates. Adding `mazemouse` as a single dependency
//! is enough for most hosts.
//!
//! # Quick start
//!
//! ```rust
//! use mazemouse::prelude::*;
//!
//! let grid = std::sync::Arc::new(generate(8, 8, Some(42)).unwrap());
//! let mut mouse = DiscreteAgent::new(grid.clone(), DiscreteConfig::default());
//!
//! // A user script reads sensors and moves.
//! if !mouse.read_sensor(Sensor::Front) {
//!     mouse.move_forward();
//! }
//!
//! // Or hand the mouse to the left-hand solver.
//! mouse.reset();
//! WallFollowSolver::new(&mut mouse)
//!     .run(decision_budget(&grid))
//!     .unwrap();
//! assert!(mouse.is_solved());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mazemouse-core` | `Cell`, `Heading`, `Walls` |
//! | [`grid`] | `mazemouse-grid` | `Grid`, generator, wall geometry |
//! | [`agent`] | `mazemouse-agent` | `Agent` trait, both agents, solver |
//! | [`engine`] | `mazemouse-engine` | `Session` and its configuration |
//! | [`codec`] | `mazemouse-codec` | Grid blobs and hashing |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell coordinates, headings and wall sets (`mazemouse-core`).
pub use mazemouse_core as types;

/// The grid, its generator, and wall geometry (`mazemouse-grid`).
///
/// [`grid::MazeGenerator`] carves mazes; [`grid::SegmentIndex`] backs
/// the continuous agent's collision and sensing.
pub use mazemouse_grid as grid;

/// Agents and the wall-follow solver (`mazemouse-agent`).
pub use mazemouse_agent as agent;

/// Sessions owning one grid and one agent (`mazemouse-engine`).
pub use mazemouse_engine as engine;

/// Grid blob encoding and hashing (`mazemouse-codec`).
pub use mazemouse_codec as codec;

/// Common imports for typical mazemouse usage.
///
/// ```rust
/// use mazemouse::prelude::*;
/// ```
pub mod prelude {
    // Primitives
    pub use mazemouse_core::{Cell, Heading, Walls};

    // Grid
    pub use mazemouse_grid::{generate, Grid, GridError, MazeGenerator, Point};

    // Agents
    pub use mazemouse_agent::{
        decision_budget, Agent, ContinuousAgent, ContinuousConfig, Decision, DiscreteAgent,
        DiscreteConfig, Sensor, SolveError, SolveReport, WallFollowSolver, WallReadings,
    };

    // Engine
    pub use mazemouse_engine::{
        AgentKind, Pose, Session, SessionAgent, SessionConfig, SessionSnapshot,
    };

    // Codec
    pub use mazemouse_codec::{from_bytes, grid_hash, to_bytes, CodecError};
}
