//! Raw types to name indicies to what would otherwise be fixed length arrays

use std::fmt::Debug;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use crate::pos::Pos;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    NW,
    NE,
    SW,
    SE,
}
impl Quadrant {
    /// quadrant of a node split at `half` that contains `pos`
    pub fn from_pos(pos: Pos, half: usize) -> Self {
        if pos.row < half {
            if pos.col < half {
                Self::NW
            } else {
                Self::NE
            }
        } else {
            if pos.col < half {
                Self::SW
            } else {
                Self::SE
            }
        }
    }

    pub fn is_north(self) -> bool {
        matches!(self, Self::NW | Self::NE)
    }
    pub fn is_west(self) -> bool {
        matches!(self, Self::NW | Self::SW)
    }

    /// NW, NE, SW, SE
    pub fn iter_all() -> impl Iterator<Item = Quadrant> {
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

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Quad<T> {
    pub nw: T,
    pub ne: T,
    pub sw: T,
    pub se: T,
}
impl<T> Quad<T> {
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Quadrant::iter_all().map(move |q| &self[q])
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        [&mut self.nw, &mut self.ne, &mut self.sw, &mut self.se].into_iter()
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
