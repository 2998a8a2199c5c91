//! Maze sessions for mazemouse.
//!
//! A [`Session`] owns one [`Grid`](mazemouse_grid::Grid) and one agent
//! built from a [`SessionConfig`]. It is the object a GUI or script
//! host holds instead of process-wide state: regenerate or load a maze,
//! drive the agent, solve, and read back a [`SessionSnapshot`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod session;

pub use config::{AgentKind, ConfigError, SessionConfig};
pub use session::{Pose, Session, SessionAgent, SessionSnapshot};
