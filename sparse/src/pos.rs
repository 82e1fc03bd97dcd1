use std::fmt::Debug;

use crate::Quadrant;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// row increases to the south
/// col increases to the east
pub struct Pos {
    pub row: usize,
    pub col: usize,
}
impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
    /// position relative to the origin of quadrant `q` of a node split at `half`
    pub(crate) fn rebase(self, q: Quadrant, half: usize) -> Self {
        Self {
            row: if q.is_north() { self.row } else { self.row - half },
            col: if q.is_west() { self.col } else { self.col - half },
        }
    }
    /// inverse of `rebase`
    pub(crate) fn offset(self, q: Quadrant, half: usize) -> Self {
        Self {
            row: if q.is_north() { self.row } else { self.row + half },
            col: if q.is_west() { self.col } else { self.col + half },
        }
    }
}
impl From<Pos> for (usize, usize) {
    fn from(pos: Pos) -> Self {
        (pos.row, pos.col)
    }
}
