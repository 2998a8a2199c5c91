//! Error types for the grid codec.

use std::fmt;
use std::io;

use mazemouse_grid::GridError;

/// Errors that can occur while encoding or decoding a grid blob.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred, including reading past the end of the blob.
    Io(io::Error),
    /// The blob does not start with `b"MAZE"`.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the blob.
        found: u8,
    },
    /// The blob is structurally corrupt.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The blob decoded cleanly but describes an invalid grid.
    InvalidGrid(GridError),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"MAZE\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::Malformed { detail } => write!(f, "malformed grid blob: {detail}"),
            Self::InvalidGrid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidGrid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for CodecError {
    fn from(e: GridError) -> Self {
        Self::InvalidGrid(e)
    }
}
