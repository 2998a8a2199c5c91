//! Error types for grid construction.

use mazemouse_core::{Cell, Heading};
use std::fmt;

/// Errors arising from generating or reconstructing a [`Grid`](crate::Grid).
///
/// Every constructor validates before allocating the final grid, so a
/// `GridError` always means no grid was produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// `width * height` does not fit in a `u32` cell count.
    TooLarge {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The number of wall sets supplied does not match `width * height`.
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Number of wall sets supplied.
        found: usize,
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// A wall is present on one side of a shared boundary but not the other.
    AsymmetricWall {
        /// The cell whose flag disagrees with its neighbour.
        cell: Cell,
        /// The side of `cell` facing the neighbour.
        side: Heading,
    },
    /// A cell on the outer edge has no wall towards the outside.
    OpenBoundary {
        /// The edge cell.
        cell: Cell,
        /// The side that faces out of the grid.
        side: Heading,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "maze dimensions must be positive, got {width}x{height}")
            }
            Self::TooLarge { width, height } => {
                write!(f, "maze {width}x{height} exceeds u32::MAX cells")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "expected {expected} wall sets, got {found}")
            }
            Self::CoordOutOfBounds {
                cell,
                width,
                height,
            } => {
                write!(f, "cell {cell} out of bounds for {width}x{height} maze")
            }
            Self::AsymmetricWall { cell, side } => {
                write!(f, "wall on {side} side of {cell} does not match its neighbour")
            }
            Self::OpenBoundary { cell, side } => {
                write!(f, "outer wall missing on {side} side of {cell}")
            }
        }
    }
}

impl std::error::Error for GridError {}
