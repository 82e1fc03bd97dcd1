//! removes zero leaves and the subtrees left empty by them
//!
//! Arithmetic never prunes on its own, cancellation leaves zero leaves in
//! place until this is called.

use tracing::trace;

use crate::node::{MatrixNode, VectorNode};
use crate::{Population, Scalar, SparseMatrix, SparseVector};

impl<T: Scalar> SparseVector<T> {
    pub fn prune(&mut self) {
        let before = self.population();
        self.root.prune();
        trace!(before, after = self.population(), "prune");
    }
}
impl<T: Scalar> SparseMatrix<T> {
    pub fn prune(&mut self) {
        let before = self.population();
        self.root.prune();
        trace!(before, after = self.population(), "prune");
    }
}

// each returns true when the node holds nothing but zeros and can be dropped by its parent

impl<T: Scalar> VectorNode<T> {
    fn prune(&mut self) -> bool {
        match self {
            Self::Leaf(value) => value.is_zero(),
            Self::Inner(_, children) => {
                for child in children.iter_mut() {
                    if child.as_mut().is_some_and(|node| node.prune()) {
                        *child = None;
                    }
                }
                children.iter().all(Option::is_none)
            }
        }
    }
}
impl<T: Scalar> MatrixNode<T> {
    fn prune(&mut self) -> bool {
        match self {
            Self::Leaf(value) => value.is_zero(),
            Self::Inner(_, quad) => {
                for child in quad.iter_mut() {
                    if child.as_mut().is_some_and(|node| node.prune()) {
                        *child = None;
                    }
                }
                quad.iter().all(Option::is_none)
            }
        }
    }
}
