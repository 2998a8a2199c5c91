//! Binary grid blobs for mazemouse.
//!
//! A grid is fully described by `(width, height, walls, start, end)`.
//! This crate writes that tuple to a compact binary blob so an external
//! loader can persist mazes and hand them back to a session, and hashes
//! it for determinism checks.
//!
//! # Format
//!
//! ```text
//! [MAGIC "MAZE"] [VERSION u8]
//! [width u32] [height u32]
//! [start.x u32] [start.y u32] [end.x u32] [end.y u32]
//! [seed flag u8] [seed u64 if flag == 1]
//! [wall mask u8] * width * height   (row-major)
//! ```
//!
//! All integers are little-endian. Decoding validates the layout
//! through [`Grid::from_parts`](mazemouse_grid::Grid::from_parts), so a
//! decoded grid always satisfies the grid invariants.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod hash;

pub use codec::{decode_grid, encode_grid, from_bytes, to_bytes};
pub use error::CodecError;
pub use hash::grid_hash;

/// Magic bytes at the start of every grid blob.
pub const MAGIC: [u8; 4] = *b"MAZE";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
