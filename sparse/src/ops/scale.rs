//! scalar multiplication
//!
//! Only stored leaves are visited, absent regions stay absent.

use crate::node::{MatrixNode, VectorNode};
use crate::{Scalar, SparseMatrix, SparseVector};

impl<T: Scalar> SparseVector<T> {
    pub fn mul_assign(&mut self, scalar: T) {
        self.root.scale(scalar);
    }
    pub fn mul(&self, scalar: T) -> Self {
        let mut product = self.clone();
        product.mul_assign(scalar);
        product
    }
    pub fn negate(&mut self) {
        self.root.negate();
    }
}

impl<T: Scalar> VectorNode<T> {
    fn scale(&mut self, scalar: T) {
        match self {
            Self::Leaf(value) => *value *= scalar,
            Self::Inner(_, children) => {
                for child in children.iter_mut().flatten() {
                    child.scale(scalar);
                }
            }
        }
    }
    pub(crate) fn negate(&mut self) {
        match self {
            Self::Leaf(value) => *value = -*value,
            Self::Inner(_, children) => {
                for child in children.iter_mut().flatten() {
                    child.negate();
                }
            }
        }
    }
}

impl<T: Scalar> SparseMatrix<T> {
    pub fn scale_assign(&mut self, scalar: T) {
        self.root.scale(scalar);
    }
    pub fn scale(&self, scalar: T) -> Self {
        let mut product = self.clone();
        product.scale_assign(scalar);
        product
    }
    pub fn negate(&mut self) {
        self.root.negate();
    }
}

impl<T: Scalar> MatrixNode<T> {
    fn scale(&mut self, scalar: T) {
        match self {
            Self::Leaf(value) => *value *= scalar,
            Self::Inner(_, quad) => {
                for child in quad.iter_mut().flatten() {
                    child.scale(scalar);
                }
            }
        }
    }
    fn negate(&mut self) {
        match self {
            Self::Leaf(value) => *value = -*value,
            Self::Inner(_, quad) => {
                for child in quad.iter_mut().flatten() {
                    child.negate();
                }
            }
        }
    }
}
