use crate::{Error, Result};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// The extent of the index range covered by a node and where it splits
///
/// `half` is the largest power of two strictly less than `size`, so a node
/// of any size splits into a lower range of `half` and an upper range of
/// `size - half`. Both children are given a span of `half`, which covers the
/// upper range since `size <= 2 * half`.
pub struct Span {
    size: usize,
    half: usize,
}
impl Span {
    pub const LEAF: Self = Self { size: 1, half: 0 };

    pub fn new(size: usize) -> Result<Self> {
        match size {
            0 => Err(Error::EmptySize),
            1 => Ok(Self::LEAF),
            _ => Ok(Self {
                size,
                half: 1 << (usize::BITS - (size - 1).leading_zeros() - 1),
            }),
        }
    }
    pub fn size(self) -> usize {
        self.size
    }
    /// zero for leaves
    pub fn half(self) -> usize {
        self.half
    }
    pub fn is_leaf(self) -> bool {
        self.size == 1
    }
    /// span of either child of a node with this span
    pub(crate) fn child(self) -> Self {
        debug_assert!(!self.is_leaf());
        if self.half == 1 {
            Self::LEAF
        } else {
            Self {
                size: self.half,
                half: self.half / 2,
            }
        }
    }
}
