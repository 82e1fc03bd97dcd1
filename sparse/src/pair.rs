//! The one dimensional counterpart of `quad`

use std::fmt::Debug;
use std::ops::{Index, IndexMut};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Half {
    North,
    South,
}
impl Half {
    /// half of a node split at `half` that contains `index`
    pub fn from_index(index: usize, half: usize) -> Self {
        if index < half {
            Self::North
        } else {
            Self::South
        }
    }
    pub(crate) fn rebase(self, index: usize, half: usize) -> usize {
        match self {
            Self::North => index,
            Self::South => index - half,
        }
    }
    pub(crate) fn offset(self, index: usize, half: usize) -> usize {
        match self {
            Self::North => index,
            Self::South => index + half,
        }
    }

    /// North, South
    pub fn iter_all() -> impl Iterator<Item = Half> {
        [Self::North, Self::South].into_iter()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Pair<T> {
    pub north: T,
    pub south: T,
}
impl<T> Pair<T> {
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Half::iter_all().map(move |h| &self[h])
    }
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        [&mut self.north, &mut self.south].into_iter()
    }
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Pair<U> {
        Pair {
            north: f(self.north),
            south: f(self.south),
        }
    }
}
impl<T> Index<Half> for Pair<T> {
    type Output = T;
    fn index(&self, index: Half) -> &Self::Output {
        match index {
            Half::North => &self.north,
            Half::South => &self.south,
        }
    }
}
impl<T> IndexMut<Half> for Pair<T> {
    fn index_mut(&mut self, index: Half) -> &mut Self::Output {
        match index {
            Half::North => &mut self.north,
            Half::South => &mut self.south,
        }
    }
}
