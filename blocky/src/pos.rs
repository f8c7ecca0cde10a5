use std::fmt::{Debug, Display};
use std::ops::{Add, Sub};

use crate::Rejection;

/// A corner of a block's rectangle.
///
/// x increases to the east,
/// y increases to the south.
/// Coordinates live in `0..=Pos::MAX`, the extent of the root block.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Pos {
    pub x: i64,
    pub y: i64,
}
impl Pos {
    pub const MAX: i64 = 8;

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    pub fn in_bounds(self) -> bool {
        Self::coord_in_bounds(self.x) && Self::coord_in_bounds(self.y)
    }
    fn coord_in_bounds(value: i64) -> bool {
        (0..=Self::MAX).contains(&value)
    }

    pub fn set_x(&mut self, x: i64) -> Result<(), Rejection> {
        if !Self::coord_in_bounds(x) {
            return Err(Rejection::OutOfBounds);
        }
        self.x = x;
        Ok(())
    }
    pub fn set_y(&mut self, y: i64) -> Result<(), Rejection> {
        if !Self::coord_in_bounds(y) {
            return Err(Rejection::OutOfBounds);
        }
        self.y = y;
        Ok(())
    }

    pub fn map(self, mut f: impl FnMut(i64) -> i64) -> Self {
        Self {
            x: f(self.x),
            y: f(self.y),
        }
    }
}
impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}
