use crate::{Pos, Quadrant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Side {
    min: i64,
    max: i64,
}
impl Side {
    const fn min_max(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    fn is_empty(self) -> bool {
        self.max <= self.min
    }
    fn mid(self) -> i64 {
        // average_floor taken from num-integer
        // https://docs.rs/num-integer/0.1.45/src/num_integer/average.rs.html#57
        (self.min & self.max) + ((self.min ^ self.max) >> 1)
    }
    /// the lower half if `low`, else the upper half
    fn half(self, low: bool) -> Self {
        if low {
            Self::min_max(self.min, self.mid())
        } else {
            Self::min_max(self.mid(), self.max)
        }
    }
}

/// Rect spanning from its north west corner (inclusive) to its south east
/// corner (exclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    x: Side,
    y: Side,
}
impl Rect {
    /// the extent of the root block
    pub const BOARD: Self = Self::from_sides(Side::min_max(0, Pos::MAX), Side::min_max(0, Pos::MAX));

    const fn from_sides(x: Side, y: Side) -> Self {
        Self { x, y }
    }
    pub fn new(nw: Pos, se: Pos) -> Self {
        Self::from_sides(Side::min_max(nw.x, se.x), Side::min_max(nw.y, se.y))
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty() || self.y.is_empty()
    }
    /// both corners on the board, north west corner not past the south east one
    pub fn in_bounds(&self) -> bool {
        self.nw().in_bounds()
            && self.se().in_bounds()
            && self.x.min <= self.x.max
            && self.y.min <= self.y.max
    }
    pub fn size(&self) -> Pos {
        self.se() - self.nw()
    }

    pub fn north(&self) -> i64 {
        self.y.min
    }
    pub fn south(&self) -> i64 {
        self.y.max
    }
    pub fn west(&self) -> i64 {
        self.x.min
    }
    pub fn east(&self) -> i64 {
        self.x.max
    }

    pub fn nw(&self) -> Pos {
        Pos::new(self.x.min, self.y.min)
    }
    pub fn se(&self) -> Pos {
        Pos::new(self.x.max, self.y.max)
    }

    pub(crate) fn set_nw(&mut self, pos: Pos) {
        self.x.min = pos.x;
        self.y.min = pos.y;
    }
    pub(crate) fn set_se(&mut self, pos: Pos) {
        self.x.max = pos.x;
        self.y.max = pos.y;
    }

    /// The rect of the child in slot `q` of a block covering `self`.
    ///
    /// Splits at the (floored) midpoint; the four quadrants partition `self`.
    pub fn quadrant(&self, q: Quadrant) -> Self {
        Self::from_sides(self.x.half(q.is_west()), self.y.half(q.is_north()))
    }
}
