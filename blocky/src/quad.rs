//! Raw types to name the four child slots of a block

use std::ops::{Index, IndexMut};

/// One of the four child slots of an internal block.
///
/// Declared in canonical (clockwise) order, which is the order used by every
/// traversal: breadth-first indexing, flattening, and rotation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    NW,
    NE,
    SE,
    SW,
}
impl Quadrant {
    pub const ALL: [Quadrant; 4] = [Self::NW, Self::NE, Self::SE, Self::SW];

    pub fn is_north(self) -> bool {
        matches!(self, Self::NW | Self::NE)
    }
    pub fn is_west(self) -> bool {
        matches!(self, Self::NW | Self::SW)
    }

    /// the slot a block in this slot moves to when its parent rotates
    pub fn clockwise(self) -> Self {
        match self {
            Self::NW => Self::NE,
            Self::NE => Self::SE,
            Self::SE => Self::SW,
            Self::SW => Self::NW,
        }
    }

    /// Which slot of its parent the block at breadth-first index `index`
    /// occupies.
    ///
    /// Every block except the root is enumerated as part of a run of four
    /// siblings, and runs start right after the root, so siblings occupy
    /// `4k + 1 ..= 4k + 4` for some `k`. The root (index 0) has no slot.
    pub fn of_bfs_index(index: usize) -> Option<Self> {
        match index {
            0 => None,
            _ => Some(Self::ALL[(index - 1) % 4]),
        }
    }

    pub fn iter_all() -> impl ExactSizeIterator<Item = Quadrant> {
        Self::ALL.into_iter()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub nw: T,
    pub ne: T,
    pub se: T,
    pub sw: T,
}
impl<T> Quad<T> {
    /// iterates in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Quadrant::iter_all().map(|q| &self[q])
    }
    pub fn from_fn(mut f: impl FnMut(Quadrant) -> T) -> Self {
        Quad {
            nw: f(Quadrant::NW),
            ne: f(Quadrant::NE),
            se: f(Quadrant::SE),
            sw: f(Quadrant::SW),
        }
    }
    /// every value moves one slot clockwise
    pub fn rotate_cw(self) -> Self {
        Quad {
            nw: self.sw,
            ne: self.nw,
            se: self.ne,
            sw: self.se,
        }
    }
}
impl<T> From<[T; 4]> for Quad<T> {
    /// takes values in canonical order
    fn from([nw, ne, se, sw]: [T; 4]) -> Self {
        Quad { nw, ne, se, sw }
    }
}
impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.nw, self.ne, self.se, self.sw].into_iter()
    }
}
impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;
    fn index(&self, index: Quadrant) -> &Self::Output {
        match index {
            Quadrant::NW => &self.nw,
            Quadrant::NE => &self.ne,
            Quadrant::SE => &self.se,
            Quadrant::SW => &self.sw,
        }
    }
}
impl<T> IndexMut<Quadrant> for Quad<T> {
    fn index_mut(&mut self, index: Quadrant) -> &mut Self::Output {
        match index {
            Quadrant::NW => &mut self.nw,
            Quadrant::NE => &mut self.ne,
            Quadrant::SE => &mut self.se,
            Quadrant::SW => &mut self.sw,
        }
    }
}
