//! row and column extraction
//!
//! The vector is built directly from the quadrants the line crosses: for a
//! row in the north half that is NW as the vector's north half and NE as
//! its south half. Regions without leaves stay absent.

use crate::node::{MatrixNode, VectorNode};
use crate::{Half, Pair, Quad, Result, Scalar, SparseMatrix, SparseVector};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Axis {
    Row,
    Col,
}
impl Axis {
    /// the two quadrants crossed by line `index` of a node split at `half`
    /// and the index of the line within them
    fn pick<N>(self, quad: &Quad<N>, index: usize, half: usize) -> (Pair<&N>, usize) {
        let h = Half::from_index(index, half);
        let pair = match (self, h) {
            (Axis::Row, Half::North) => Pair {
                north: &quad.nw,
                south: &quad.ne,
            },
            (Axis::Row, Half::South) => Pair {
                north: &quad.sw,
                south: &quad.se,
            },
            (Axis::Col, Half::North) => Pair {
                north: &quad.nw,
                south: &quad.sw,
            },
            (Axis::Col, Half::South) => Pair {
                north: &quad.ne,
                south: &quad.se,
            },
        };
        (pair, h.rebase(index, half))
    }
}

impl<T: Scalar> SparseMatrix<T> {
    pub fn row(&self, row: usize) -> Result<SparseVector<T>> {
        self.check_pos(row, 0)?;
        Ok(self.slice(Axis::Row, row))
    }
    pub fn col(&self, col: usize) -> Result<SparseVector<T>> {
        self.check_pos(0, col)?;
        Ok(self.slice(Axis::Col, col))
    }
    fn slice(&self, axis: Axis, index: usize) -> SparseVector<T> {
        let root = self
            .root
            .slice(axis, index)
            .unwrap_or_else(|| VectorNode::empty(self.root.span()));
        SparseVector::from_root(root)
    }
}

impl<T: Scalar> MatrixNode<T> {
    fn slice(&self, axis: Axis, index: usize) -> Option<VectorNode<T>> {
        match self {
            Self::Leaf(value) => Some(VectorNode::Leaf(*value)),
            Self::Inner(span, quad) => {
                let (pair, index) = axis.pick(quad, index, span.half());
                let children = pair.map(|child| {
                    child
                        .as_ref()
                        .and_then(|child| child.slice(axis, index))
                        .map(Box::new)
                });
                if children.iter().all(Option::is_none) {
                    None
                } else {
                    Some(VectorNode::Inner(*span, children))
                }
            }
        }
    }
}
