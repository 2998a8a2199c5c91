//! Per-cell wall sets.

use crate::heading::Heading;
use smallvec::SmallVec;
use std::fmt;

/// The set of walls present around one cell.
///
/// Stored as a 4-bit mask where bit `i` is the wall on the side of
/// [`Heading::from_index(i)`](Heading::from_index). The mask is also
/// the byte written per cell by the grid blob codec.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Walls(u8);

impl Walls {
    /// No walls.
    pub const NONE: Walls = Walls(0);
    /// All four walls.
    pub const ALL: Walls = Walls(0b1111);

    /// Build a wall set from its mask, rejecting bits above `0b1111`.
    pub fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::ALL.0 != 0 {
            None
        } else {
            Some(Self(bits))
        }
    }

    /// The raw 4-bit mask.
    pub fn bits(self) -> u8 {
        self.0
    }

    fn mask(heading: Heading) -> u8 {
        1 << heading.index()
    }

    /// Whether the wall on the `heading` side is present.
    pub fn contains(self, heading: Heading) -> bool {
        self.0 & Self::mask(heading) != 0
    }

    /// Add the wall on the `heading` side.
    pub fn insert(&mut self, heading: Heading) {
        self.0 |= Self::mask(heading);
    }

    /// Remove the wall on the `heading` side. Returns whether it was present.
    pub fn remove(&mut self, heading: Heading) -> bool {
        let present = self.contains(heading);
        self.0 &= !Self::mask(heading);
        present
    }

    /// Number of walls present.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no walls are present.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Present walls in rotation order.
    pub fn iter(self) -> impl Iterator<Item = Heading> {
        Heading::ALL.into_iter().filter(move |&h| self.contains(h))
    }

    /// Headings with no wall, in rotation order.
    pub fn open_headings(self) -> SmallVec<[Heading; 4]> {
        Heading::ALL
            .into_iter()
            .filter(|&h| !self.contains(h))
            .collect()
    }
}

impl FromIterator<Heading> for Walls {
    fn from_iter<I: IntoIterator<Item = Heading>>(iter: I) -> Self {
        let mut walls = Walls::NONE;
        for h in iter {
            walls.insert(h);
        }
        walls
    }
}

impl fmt::Debug for Walls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for Walls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (h, c) in Heading::ALL.into_iter().zip(['N', 'E', 'S', 'W']) {
            let ch = if self.contains(h) { c } else { '.' };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
