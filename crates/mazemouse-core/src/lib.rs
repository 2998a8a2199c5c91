//! Core types for the mazemouse simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the grid, the agents and the codec:
//! cell coordinates, compass headings and per-cell wall sets.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod heading;
pub mod walls;

pub use cell::Cell;
pub use heading::Heading;
pub use walls::Walls;
