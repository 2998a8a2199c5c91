//! FNV-1a hashing of grid layouts.
//!
//! The hash covers dimensions, endpoints and wall masks, the same data
//! grid equality compares. The seed is left out, so a loaded grid
//! hashes the same as the generated grid it was saved from. Not
//! cryptographically secure.

use mazemouse_core::Cell;
use mazemouse_grid::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u32(mut hash: u64, v: u32) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

#[inline]
fn fnv1a_cell(hash: u64, cell: Cell) -> u64 {
    fnv1a_u32(fnv1a_u32(hash, cell.x), cell.y)
}

/// Hash the layout of `grid`.
pub fn grid_hash(grid: &Grid) -> u64 {
    let mut hash = FNV_OFFSET;
    hash = fnv1a_u32(hash, grid.width());
    hash = fnv1a_u32(hash, grid.height());
    hash = fnv1a_cell(hash, grid.start());
    hash = fnv1a_cell(hash, grid.end());
    for walls in grid.wall_sets() {
        hash = fnv1a_byte(hash, walls.bits());
    }
    hash
}
