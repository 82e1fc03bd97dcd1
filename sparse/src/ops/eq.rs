//! value equality, where an absent region equals a stored region of zeros

use crate::node::{MatrixNode, VectorNode};
use crate::{Half, Quadrant, Scalar, SparseMatrix, SparseVector};

impl<T: Scalar> PartialEq for SparseVector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.root.same_values(&other.root)
    }
}
impl<T: Scalar> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.root.same_values(&other.root)
    }
}

impl<T: Scalar> VectorNode<T> {
    fn same_values(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Leaf(lhs), Self::Leaf(rhs)) => lhs == rhs,
            (Self::Inner(_, lhs), Self::Inner(_, rhs)) => Half::iter_all().all(|h| {
                match (lhs[h].as_deref(), rhs[h].as_deref()) {
                    (None, None) => true,
                    (Some(only), None) | (None, Some(only)) => only.is_zero_region(),
                    (Some(lhs), Some(rhs)) => lhs.same_values(rhs),
                }
            }),
            _ => unreachable!("inconsistent node size"),
        }
    }
    pub(crate) fn is_zero_region(&self) -> bool {
        match self {
            Self::Leaf(value) => value.is_zero(),
            Self::Inner(_, children) => children.iter().flatten().all(|child| child.is_zero_region()),
        }
    }
}

impl<T: Scalar> MatrixNode<T> {
    fn same_values(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Leaf(lhs), Self::Leaf(rhs)) => lhs == rhs,
            (Self::Inner(_, lhs), Self::Inner(_, rhs)) => Quadrant::iter_all().all(|q| {
                match (lhs[q].as_deref(), rhs[q].as_deref()) {
                    (None, None) => true,
                    (Some(only), None) | (None, Some(only)) => only.is_zero_region(),
                    (Some(lhs), Some(rhs)) => lhs.same_values(rhs),
                }
            }),
            _ => unreachable!("inconsistent node size"),
        }
    }
    pub(crate) fn is_zero_region(&self) -> bool {
        match self {
            Self::Leaf(value) => value.is_zero(),
            Self::Inner(_, quad) => quad.iter().flatten().all(|child| child.is_zero_region()),
        }
    }
}
