//! lazy traversal of stored entries
//!
//! Both iterators keep an explicit stack, so every call to `values` or
//! `entries` starts a fresh traversal and dropping one early does no more
//! work than was asked for.

use std::fmt::{self, Display};
use std::iter::FusedIterator;

use itertools::Itertools;

use crate::node::{MatrixNode, VectorNode};
use crate::{Half, Pos, Quadrant, Scalar, SparseMatrix, SparseVector};

/// `(index, value)` for every stored leaf in increasing index order
pub struct Values<'a, T> {
    stack: Vec<(&'a VectorNode<T>, usize)>,
}
impl<T: Scalar> Iterator for Values<'_, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, index)) = self.stack.pop() {
            match node {
                VectorNode::Leaf(value) => return Some((index, *value)),
                VectorNode::Inner(span, children) => {
                    // pushed in reverse so north pops first
                    for h in [Half::South, Half::North] {
                        if let Some(child) = &children[h] {
                            self.stack.push((&**child, h.offset(index, span.half())));
                        }
                    }
                }
            }
        }
        None
    }
}
impl<T: Scalar> FusedIterator for Values<'_, T> {}

/// `((row, col), value)` for every stored leaf
///
/// Order is NW, NE, SW, SE at every level (Z-order), not row-major.
pub struct Entries<'a, T> {
    stack: Vec<(&'a MatrixNode<T>, Pos)>,
}
impl<T: Scalar> Iterator for Entries<'_, T> {
    type Item = ((usize, usize), T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, pos)) = self.stack.pop() {
            match node {
                MatrixNode::Leaf(value) => return Some((pos.into(), *value)),
                MatrixNode::Inner(span, quad) => {
                    for q in [Quadrant::SE, Quadrant::SW, Quadrant::NE, Quadrant::NW] {
                        if let Some(child) = &quad[q] {
                            self.stack.push((&**child, pos.offset(q, span.half())));
                        }
                    }
                }
            }
        }
        None
    }
}
impl<T: Scalar> FusedIterator for Entries<'_, T> {}

impl<T: Scalar> SparseVector<T> {
    pub fn values(&self) -> Values<'_, T> {
        Values {
            stack: vec![(&self.root, 0)],
        }
    }
}
impl<T: Scalar> SparseMatrix<T> {
    pub fn entries(&self) -> Entries<'_, T> {
        Entries {
            stack: vec![(&self.root, Pos::new(0, 0))],
        }
    }
}

impl<'a, T: Scalar> IntoIterator for &'a SparseVector<T> {
    type Item = (usize, T);
    type IntoIter = Values<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.values()
    }
}
impl<'a, T: Scalar> IntoIterator for &'a SparseMatrix<T> {
    type Item = ((usize, usize), T);
    type IntoIter = Entries<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

// one entry per line, informational only

impl<T: Scalar> Display for SparseVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.values().map(|entry| format!("{entry:?}")).join("\n"))
    }
}
impl<T: Scalar> Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.entries().map(|entry| format!("{entry:?}")).join("\n"))
    }
}
