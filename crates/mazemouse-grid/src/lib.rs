//! Maze grids for the mazemouse simulator.
//!
//! This crate owns the maze itself: the [`Grid`] of per-cell wall sets,
//! the [`MazeGenerator`] that carves a perfect maze into it, and the
//! floating-point wall geometry the continuous agent collides with and
//! senses.
//!
//! # Lifecycle
//!
//! A [`Grid`] is produced once, either by [`MazeGenerator::generate`] or
//! reconstructed from its parts with [`Grid::from_parts`], and is
//! immutable afterwards. Agents share it read-only.
//!
//! # Geometry
//!
//! [`geometry`] holds the closed-form circle/segment and
//! segment/segment tests. [`SegmentIndex`] buckets the wall segments
//! per cell so queries only touch the cells they overlap.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod segments;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::GridError;
pub use generator::{generate, MazeGenerator};
pub use geometry::{Point, Segment};
pub use grid::Grid;
pub use segments::{SegmentIndex, WallSegment};
