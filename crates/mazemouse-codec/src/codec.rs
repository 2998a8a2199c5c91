//! Binary encode/decode for grid blobs.
//!
//! All integers are little-endian. Wall masks are one byte per cell
//! with the upper four bits clear.

use std::io::{Read, Write};

use mazemouse_core::{Cell, Walls};
use mazemouse_grid::Grid;

use crate::error::CodecError;
use crate::{FORMAT_VERSION, MAGIC};

// ── Primitives ──────────────────────────────────────────────────

fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), CodecError> {
    w.write_all(&[v])?;
    Ok(())
}

fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

fn write_cell(w: &mut dyn Write, cell: Cell) -> Result<(), CodecError> {
    write_u32_le(w, cell.x)?;
    write_u32_le(w, cell.y)
}

fn read_u8(r: &mut dyn Read) -> Result<u8, CodecError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

fn read_u32_le(r: &mut dyn Read) -> Result<u32, CodecError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

fn read_u64_le(r: &mut dyn Read) -> Result<u64, CodecError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

fn read_cell(r: &mut dyn Read) -> Result<Cell, CodecError> {
    let x = read_u32_le(r)?;
    let y = read_u32_le(r)?;
    Ok(Cell::new(x, y))
}

// ── Grid ────────────────────────────────────────────────────────

/// Write `grid` as a blob.
pub fn encode_grid(w: &mut dyn Write, grid: &Grid) -> Result<(), CodecError> {
    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u32_le(w, grid.width())?;
    write_u32_le(w, grid.height())?;
    write_cell(w, grid.start())?;
    write_cell(w, grid.end())?;
    match grid.seed() {
        Some(seed) => {
            write_u8(w, 1)?;
            write_u64_le(w, seed)?;
        }
        None => write_u8(w, 0)?,
    }
    let masks: Vec<u8> = grid.wall_sets().iter().map(|walls| walls.bits()).collect();
    w.write_all(&masks)?;
    Ok(())
}

/// Read one blob and rebuild the grid it describes.
///
/// Reads exactly one blob's worth of bytes; anything after it is left
/// in the reader.
pub fn decode_grid(r: &mut dyn Read) -> Result<Grid, CodecError> {
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(CodecError::InvalidMagic);
    }
    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(CodecError::UnsupportedVersion { found: version });
    }
    let width = read_u32_le(r)?;
    let height = read_u32_le(r)?;
    let start = read_cell(r)?;
    let end = read_cell(r)?;
    let seed = match read_u8(r)? {
        0 => None,
        1 => Some(read_u64_le(r)?),
        flag => {
            return Err(CodecError::Malformed {
                detail: format!("seed presence flag must be 0 or 1, got {flag}"),
            })
        }
    };

    let count = u64::from(width) * u64::from(height);
    let mut masks = Vec::new();
    // Bounded by `take` so a corrupt header cannot force a huge allocation.
    (&mut *r).take(count).read_to_end(&mut masks)?;
    if masks.len() as u64 != count {
        return Err(CodecError::Malformed {
            detail: format!(
                "expected {count} wall masks for {width}x{height}, got {}",
                masks.len()
            ),
        });
    }
    let walls = masks
        .iter()
        .enumerate()
        .map(|(i, &bits)| {
            Walls::from_bits(bits).ok_or_else(|| CodecError::Malformed {
                detail: format!("wall mask {bits:#04x} at cell {i} has bits above 0b1111"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let grid = Grid::from_parts(width, height, walls, start, end)?;
    Ok(grid.with_seed(seed))
}

/// Encode `grid` into a fresh byte vector.
pub fn to_bytes(grid: &Grid) -> Result<Vec<u8>, CodecError> {
    // Header is at most 38 bytes.
    let mut buf = Vec::with_capacity(38 + grid.cell_count());
    encode_grid(&mut buf, grid)?;
    Ok(buf)
}

/// Decode a byte slice holding exactly one blob.
pub fn from_bytes(bytes: &[u8]) -> Result<Grid, CodecError> {
    let mut cursor = bytes;
    let grid = decode_grid(&mut cursor)?;
    if !cursor.is_empty() {
        return Err(CodecError::Malformed {
            detail: format!("{} trailing bytes after grid", cursor.len()),
        });
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazemouse_core::Heading;
    use mazemouse_grid::generate;

    fn two_by_one() -> Grid {
        generate(2, 1, Some(0)).unwrap()
    }

    // ── Layout ──────────────────────────────────────────────

    #[test]
    fn header_layout_is_little_endian() {
        let bytes = to_bytes(&two_by_one()).unwrap();
        assert_eq!(&bytes[0..4], b"MAZE");
        assert_eq!(bytes[4], FORMAT_VERSION);
        assert_eq!(&bytes[5..9], &2u32.to_le_bytes());
        assert_eq!(&bytes[9..13], &1u32.to_le_bytes());
        // start (0, 0), end (1, 0)
        assert_eq!(&bytes[13..21], &[0u8; 8]);
        assert_eq!(&bytes[21..25], &1u32.to_le_bytes());
        assert_eq!(&bytes[25..29], &0u32.to_le_bytes());
        // seed present
        assert_eq!(bytes[29], 1);
        assert_eq!(&bytes[30..38], &0u64.to_le_bytes());
        // West cell: N, S, W walls. East cell: N, E, S walls.
        assert_eq!(bytes[38], 0b1101);
        assert_eq!(bytes[39], 0b0111);
        assert_eq!(bytes.len(), 40);
    }

    #[test]
    fn unseeded_grid_writes_zero_flag() {
        let g = two_by_one().with_seed(None);
        let bytes = to_bytes(&g).unwrap();
        assert_eq!(bytes[29], 0);
        assert_eq!(bytes.len(), 32);
        assert_eq!(from_bytes(&bytes).unwrap().seed(), None);
    }

    #[test]
    fn roundtrip_preserves_seed() {
        let g = generate(9, 4, Some(77)).unwrap();
        let back = from_bytes(&to_bytes(&g).unwrap()).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.seed(), Some(77));
    }

    // ── Rejection ───────────────────────────────────────────

    #[test]
    fn bad_magic_rejected() {
        let mut bytes = to_bytes(&two_by_one()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(from_bytes(&bytes), Err(CodecError::InvalidMagic)));
    }

    #[test]
    fn unknown_version_rejected() {
        let mut bytes = to_bytes(&two_by_one()).unwrap();
        bytes[4] = FORMAT_VERSION + 1;
        assert!(matches!(
            from_bytes(&bytes),
            Err(CodecError::UnsupportedVersion { found }) if found == FORMAT_VERSION + 1
        ));
    }

    #[test]
    fn truncated_header_is_io_error() {
        let bytes = to_bytes(&two_by_one()).unwrap();
        assert!(matches!(from_bytes(&bytes[..10]), Err(CodecError::Io(_))));
    }

    #[test]
    fn truncated_walls_are_malformed() {
        let bytes = to_bytes(&two_by_one()).unwrap();
        assert!(matches!(
            from_bytes(&bytes[..bytes.len() - 1]),
            Err(CodecError::Malformed { .. })
        ));
    }

    #[test]
    fn trailing_bytes_are_malformed() {
        let mut bytes = to_bytes(&two_by_one()).unwrap();
        bytes.push(0);
        assert!(matches!(
            from_bytes(&bytes),
            Err(CodecError::Malformed { .. })
        ));
    }

    #[test]
    fn high_mask_bits_are_malformed() {
        let mut bytes = to_bytes(&two_by_one()).unwrap();
        let last = bytes.len() - 1;
        bytes[last] |= 0b1_0000;
        assert!(matches!(
            from_bytes(&bytes),
            Err(CodecError::Malformed { .. })
        ));
    }

    #[test]
    fn bad_seed_flag_is_malformed() {
        let mut bytes = to_bytes(&two_by_one()).unwrap();
        bytes[29] = 7;
        assert!(matches!(
            from_bytes(&bytes),
            Err(CodecError::Malformed { .. })
        ));
    }

    #[test]
    fn asymmetric_walls_are_invalid_grid() {
        let mut bytes = to_bytes(&two_by_one()).unwrap();
        // Close the west cell's east side only.
        bytes[38] |= 1 << Heading::East.index();
        let err = from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, CodecError::InvalidGrid(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn decode_leaves_following_bytes_in_reader() {
        let g = two_by_one();
        let mut stream = to_bytes(&g).unwrap();
        stream.extend(to_bytes(&g).unwrap());
        let mut r: &[u8] = &stream;
        assert_eq!(decode_grid(&mut r).unwrap(), g);
        assert_eq!(decode_grid(&mut r).unwrap(), g);
        assert!(r.is_empty());
    }
}
