use crate::node::{ensure_matrix, ensure_vector, MatrixNode, VectorNode};
use crate::{Half, Pos, Quadrant, Result, Scalar, SparseMatrix, SparseVector};

impl<T: Scalar> SparseVector<T> {
    /// zero for any index in an absent region
    pub fn get(&self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.root.get_in_bounds(index))
    }
    /// allocates any missing nodes on the way to `index`
    ///
    /// Writing zero still stores a leaf.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index)?;
        self.root.set_in_bounds(index, value);
        Ok(())
    }
}

impl<T: Scalar> VectorNode<T> {
    fn get_in_bounds(&self, index: usize) -> T {
        match self {
            Self::Leaf(value) => *value,
            Self::Inner(span, children) => {
                let h = Half::from_index(index, span.half());
                match &children[h] {
                    None => T::zero(),
                    Some(child) => child.get_in_bounds(h.rebase(index, span.half())),
                }
            }
        }
    }
    fn set_in_bounds(&mut self, index: usize, value: T) {
        match self {
            Self::Leaf(leaf) => *leaf = value,
            Self::Inner(span, children) => {
                let h = Half::from_index(index, span.half());
                ensure_vector(&mut children[h], span.child())
                    .set_in_bounds(h.rebase(index, span.half()), value);
            }
        }
    }
}

impl<T: Scalar> SparseMatrix<T> {
    /// zero for any position in an absent quadrant
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let pos = self.check_pos(row, col)?;
        Ok(self.root.get_in_bounds(pos))
    }
    /// allocates any missing quadrants on the way to `(row, col)`
    ///
    /// Writing zero still stores a leaf.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let pos = self.check_pos(row, col)?;
        self.root.set_in_bounds(pos, value);
        Ok(())
    }
}

impl<T: Scalar> MatrixNode<T> {
    fn get_in_bounds(&self, pos: Pos) -> T {
        match self {
            Self::Leaf(value) => *value,
            Self::Inner(span, quad) => {
                let q = Quadrant::from_pos(pos, span.half());
                match &quad[q] {
                    None => T::zero(),
                    Some(child) => child.get_in_bounds(pos.rebase(q, span.half())),
                }
            }
        }
    }
    fn set_in_bounds(&mut self, pos: Pos, value: T) {
        match self {
            Self::Leaf(leaf) => *leaf = value,
            Self::Inner(span, quad) => {
                let q = Quadrant::from_pos(pos, span.half());
                ensure_matrix(&mut quad[q], span.child())
                    .set_in_bounds(pos.rebase(q, span.half()), value);
            }
        }
    }
}
