use std::ops::{Add, Sub};

use crate::Quadrant;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
/// board pixel coordinates, (0, 0) is the top left corner of the board
///
/// x increases to the east
/// y increases to the south
pub struct Pos {
    pub x: i64,
    pub y: i64,
}
impl Pos {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    /// offset of the top left corner of quadrant `q` inside a block whose children are `half` wide
    pub fn in_dir(q: Quadrant, half: i64) -> Self {
        Self {
            x: if q.is_west() { 0 } else { half },
            y: if q.is_north() { 0 } else { half },
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
