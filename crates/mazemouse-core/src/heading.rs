//! Compass headings and their fixed rotation order.

use std::fmt;

/// One of the four compass directions an agent can face.
///
/// The discriminants define the rotation order used everywhere in the
/// workspace: `North = 0`, `East = 1`, `South = 2`, `West = 3`. Turning
/// right adds one modulo 4, turning left subtracts one.
///
/// The grid uses screen coordinates, so `North` decreases `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Heading {
    /// Towards row `y - 1`.
    North = 0,
    /// Towards column `x + 1`.
    East = 1,
    /// Towards row `y + 1`.
    South = 2,
    /// Towards column `x - 1`.
    West = 3,
}

impl Heading {
    /// All headings in rotation order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Position of this heading in the rotation order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Heading at `index` in the rotation order, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Rotate 90° counter-clockwise.
    pub fn left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Rotate 90° clockwise.
    pub fn right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate 180°.
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Returns the `(dx, dy)` offset of one step along this heading.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }

    /// The `(left, front, right)` headings relative to `self`.
    pub fn relative_triple(self) -> [Heading; 3] {
        [self.left(), self, self.right()]
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        };
        f.write_str(name)
    }
}
