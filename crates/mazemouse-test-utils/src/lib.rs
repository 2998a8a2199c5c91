//! Test utilities and mock types for mazemouse development.
//!
//! [`fixtures`] builds hand-shaped grids whose layout a test can reason
//! about without running the generator. [`ScriptedAgent`] is an
//! [`Agent`](mazemouse_agent::Agent) that replays canned sensor
//! readings and records what it was told to do.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod scripted;

pub use fixtures::{corridor, open_room, seeded, serpentine, walled_goal};
pub use scripted::{Action, ScriptedAgent};
