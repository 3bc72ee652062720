//! Names for the four child slots of a block, and the slot permutations

use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

/// child slot of a subdivided block, in storage order
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    NW,
    NE,
    SW,
    SE,
}
impl Quadrant {
    /// picks the quadrant of a block containing a point given in the block's local frame
    ///
    /// `row` and `column` are measured from the block's top left corner.
    /// Returns `None` when the point lies exactly on a midline, since it belongs to no quadrant.
    pub fn from_local(row: i64, column: i64, half: i64) -> Option<Self> {
        let north = match row.cmp(&half) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => return None,
        };
        let west = match column.cmp(&half) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => return None,
        };
        Some(match (north, west) {
            (true, true) => Self::NW,
            (true, false) => Self::NE,
            (false, true) => Self::SW,
            (false, false) => Self::SE,
        })
    }

    pub fn is_north(self) -> bool {
        matches!(self, Self::NW | Self::NE)
    }
    pub fn is_west(self) -> bool {
        matches!(self, Self::NW | Self::SW)
    }

    pub fn iter_all() -> impl ExactSizeIterator<Item = Quadrant> {
        QuadrantIter::new()
    }
}
struct QuadrantIter {
    next: Option<Quadrant>,
}
impl QuadrantIter {
    pub fn new() -> Self {
        QuadrantIter {
            next: Some(Quadrant::NW),
        }
    }
}
impl Iterator for QuadrantIter {
    type Item = Quadrant;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.next;
        let next = match curr {
            Some(Quadrant::NW) => Some(Quadrant::NE),
            Some(Quadrant::NE) => Some(Quadrant::SW),
            Some(Quadrant::SW) => Some(Quadrant::SE),
            _ => None,
        };
        self.next = next;
        curr
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.len();
        (size, Some(size))
    }
}
impl FusedIterator for QuadrantIter {}
impl ExactSizeIterator for QuadrantIter {
    fn len(&self) -> usize {
        match self.next {
            Some(Quadrant::NW) => 4,
            Some(Quadrant::NE) => 3,
            Some(Quadrant::SW) => 2,
            Some(Quadrant::SE) => 1,
            None => 0,
        }
    }
}

/// midline a swap mirrors across
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    /// exchange the left and right columns
    Horizontal,
    /// exchange the top and bottom rows
    Vertical,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Quad<T> {
    pub nw: T,
    pub ne: T,
    pub sw: T,
    pub se: T,
}
impl<T> Quad<T> {
    pub fn from_fn(mut f: impl FnMut(Quadrant) -> T) -> Self {
        Quad {
            nw: f(Quadrant::NW),
            ne: f(Quadrant::NE),
            sw: f(Quadrant::SW),
            se: f(Quadrant::SE),
        }
    }
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> {
        Quadrant::iter_all().map(|q| &self[q])
    }
    pub fn index_map<U>(self, mut f: impl FnMut(Quadrant, T) -> U) -> Quad<U> {
        Quad {
            nw: f(Quadrant::NW, self.nw),
            ne: f(Quadrant::NE, self.ne),
            sw: f(Quadrant::SW, self.sw),
            se: f(Quadrant::SE, self.se),
        }
    }

    /// `[ne, nw, se, sw]` for horizontal, `[sw, se, nw, ne]` for vertical
    pub fn swap(self, axis: Axis) -> Self {
        let Quad { nw, ne, sw, se } = self;
        match axis {
            Axis::Horizontal => Quad {
                nw: ne,
                ne: nw,
                sw: se,
                se: sw,
            },
            Axis::Vertical => Quad {
                nw: sw,
                ne: se,
                sw: nw,
                se: ne,
            },
        }
    }
    /// `[sw, nw, se, ne]`, the old south west slot becomes the new north west slot
    pub fn rotate_cw(self) -> Self {
        let Quad { nw, ne, sw, se } = self;
        Quad {
            nw: sw,
            ne: nw,
            sw: se,
            se: ne,
        }
    }
    /// `[ne, se, nw, sw]`
    pub fn rotate_ccw(self) -> Self {
        let Quad { nw, ne, sw, se } = self;
        Quad {
            nw: ne,
            ne: se,
            sw: nw,
            se: sw,
        }
    }
    pub fn rotate(self, clockwise: bool) -> Self {
        if clockwise {
            self.rotate_cw()
        } else {
            self.rotate_ccw()
        }
    }
}
impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.nw, self.ne, self.sw, self.se].into_iter()
    }
}
impl<T> Index<Quadrant> for Quad<T> {
    type Output = T;
    fn index(&self, index: Quadrant) -> &Self::Output {
        match index {
            Quadrant::NW => &self.nw,
            Quadrant::NE => &self.ne,
            Quadrant::SW => &self.sw,
            Quadrant::SE => &self.se,
        }
    }
}
impl<T> IndexMut<Quadrant> for Quad<T> {
    fn index_mut(&mut self, index: Quadrant) -> &mut Self::Output {
        match index {
            Quadrant::NW => &mut self.nw,
            Quadrant::NE => &mut self.ne,
            Quadrant::SW => &mut self.sw,
            Quadrant::SE => &mut self.se,
        }
    }
}
