//! Wall segments in pixel space and a per-cell index over them.

use crate::geometry::{Point, Segment};
use crate::grid::Grid;
use mazemouse_core::{Cell, Heading};
use smallvec::SmallVec;

/// One wall of the maze in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallSegment {
    /// The cell that owns this wall.
    pub cell: Cell,
    /// Which side of `cell` the wall is on.
    pub side: Heading,
    /// The wall's endpoints.
    pub segment: Segment,
}

/// The segment along `side` of `cell` for square cells of `cell_size` pixels.
pub fn cell_wall_segment(cell: Cell, side: Heading, cell_size: f64) -> Segment {
    let x0 = f64::from(cell.x) * cell_size;
    let y0 = f64::from(cell.y) * cell_size;
    let x1 = x0 + cell_size;
    let y1 = y0 + cell_size;
    let (a, b) = match side {
        Heading::North => ((x0, y0), (x1, y0)),
        Heading::East => ((x1, y0), (x1, y1)),
        Heading::South => ((x0, y1), (x1, y1)),
        Heading::West => ((x0, y0), (x0, y1)),
    };
    Segment::new(Point::new(a.0, a.1), Point::new(b.0, b.1))
}

impl Grid {
    /// Every wall of the maze as a pixel-space segment, each shared
    /// wall emitted once.
    ///
    /// Interior walls are reported by the cell below or to the right of
    /// them (as its north or west side); the bottom and right boundary
    /// come from the last row and column.
    pub fn wall_segments(&self, cell_size: f64) -> Vec<WallSegment> {
        let mut out = Vec::new();
        for (cell, walls) in self.cells() {
            let mut sides: SmallVec<[Heading; 4]> = SmallVec::new();
            sides.extend([Heading::North, Heading::West]);
            if cell.x + 1 == self.width() {
                sides.push(Heading::East);
            }
            if cell.y + 1 == self.height() {
                sides.push(Heading::South);
            }
            for side in sides {
                if walls.contains(side) {
                    out.push(WallSegment {
                        cell,
                        side,
                        segment: cell_wall_segment(cell, side, cell_size),
                    });
                }
            }
        }
        out
    }
}

/// Wall segments bucketed by the cells whose boundary they lie on.
///
/// A query for a bounding box only looks at the buckets of the cells
/// the box overlaps, so the cost of a collision or sensing check
/// depends on the agent's reach rather than the maze size.
#[derive(Clone, Debug)]
pub struct SegmentIndex {
    cell_size: f64,
    width: u32,
    height: u32,
    segments: Vec<Segment>,
    buckets: Vec<SmallVec<[u32; 4]>>,
}

impl SegmentIndex {
    /// Index the walls of `grid` for cells of `cell_size` pixels.
    pub fn new(grid: &Grid, cell_size: f64) -> Self {
        let width = grid.width();
        let walls = grid.wall_segments(cell_size);
        let mut buckets: Vec<SmallVec<[u32; 4]>> = vec![SmallVec::new(); grid.cell_count()];
        let mut segments = Vec::with_capacity(walls.len());
        for (i, wall) in walls.iter().enumerate() {
            let id = i as u32;
            segments.push(wall.segment);
            buckets[wall.cell.flat_index(width)].push(id);
            if let Some(other) = grid.neighbour(wall.cell, wall.side) {
                buckets[other.flat_index(width)].push(id);
            }
        }
        tracing::debug!(
            segments = segments.len(),
            cell_size,
            "built wall segment index"
        );
        Self {
            cell_size,
            width,
            height: grid.height(),
            segments,
            buckets,
        }
    }

    /// Pixel size of one cell.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// All indexed segments.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn cell_span(&self, lo: f64, hi: f64, limit: u32) -> (u32, u32) {
        let max = f64::from(limit - 1);
        let lo_cells = lo / self.cell_size;
        let mut first = lo_cells.floor();
        // On a cell line, segments of the previous column or row can
        // still touch the box at their endpoint.
        if first == lo_cells {
            first -= 1.0;
        }
        let first = first.clamp(0.0, max) as u32;
        let last = (hi / self.cell_size).floor().clamp(0.0, max) as u32;
        (first, last)
    }

    /// Segments that may touch the axis-aligned box `[min, max]`.
    ///
    /// Every segment that actually intersects the box is returned, each
    /// once. Some returned segments may lie just outside it.
    pub fn query(&self, min: Point, max: Point) -> impl Iterator<Item = &Segment> + '_ {
        let (x0, x1) = self.cell_span(min.x, max.x, self.width);
        let (y0, y1) = self.cell_span(min.y, max.y, self.height);
        let mut ids: SmallVec<[u32; 16]> = SmallVec::new();
        for y in y0..=y1 {
            for x in x0..=x1 {
                ids.extend_from_slice(&self.buckets[Cell::new(x, y).flat_index(self.width)]);
            }
        }
        ids.sort_unstable();
        ids.dedup();
        ids.into_iter().map(move |id| &self.segments[id as usize])
    }
}
