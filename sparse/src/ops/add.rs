//! elementwise addition and subtraction
//!
//! The `*_assign` forms mutate `self` and only read `other`. The plain forms
//! clone `self` first and never touch either operand.

use crate::node::{ensure_matrix, MatrixNode, VectorNode};
use crate::{Half, Quadrant, Result, Scalar, SparseMatrix, SparseVector};

impl<T: Scalar> SparseVector<T> {
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        self.check_size(other)?;
        self.root.add_assign(&other.root);
        Ok(())
    }
    pub fn add(&self, other: &Self) -> Result<Self> {
        let mut sum = self.clone();
        sum.add_assign(other)?;
        Ok(sum)
    }
    pub fn sub_assign(&mut self, other: &Self) -> Result<()> {
        self.check_size(other)?;
        self.root.sub_assign(&other.root);
        Ok(())
    }
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let mut difference = self.clone();
        difference.sub_assign(other)?;
        Ok(difference)
    }
}

impl<T: Scalar> VectorNode<T> {
    fn add_assign(&mut self, other: &Self) {
        match (self, other) {
            (Self::Leaf(lhs), Self::Leaf(rhs)) => *lhs += *rhs,
            (Self::Inner(_, lhs), Self::Inner(_, rhs)) => {
                for h in Half::iter_all() {
                    let Some(theirs) = &rhs[h] else { continue };
                    if let Some(child) = &mut lhs[h] {
                        child.add_assign(theirs);
                    } else {
                        lhs[h] = Some(theirs.clone());
                    }
                }
            }
            _ => unreachable!("inconsistent node size"),
        }
    }
    fn sub_assign(&mut self, other: &Self) {
        match (self, other) {
            (Self::Leaf(lhs), Self::Leaf(rhs)) => *lhs -= *rhs,
            (Self::Inner(_, lhs), Self::Inner(_, rhs)) => {
                for h in Half::iter_all() {
                    let Some(theirs) = &rhs[h] else { continue };
                    if let Some(child) = &mut lhs[h] {
                        child.sub_assign(theirs);
                    } else {
                        // an absent region is zero, so the result is -rhs
                        let mut negated = theirs.clone();
                        negated.negate();
                        lhs[h] = Some(negated);
                    }
                }
            }
            _ => unreachable!("inconsistent node size"),
        }
    }
}

impl<T: Scalar> SparseMatrix<T> {
    pub fn add_assign(&mut self, other: &Self) -> Result<()> {
        self.check_size(other)?;
        self.root.add_assign(&other.root);
        Ok(())
    }
    pub fn add(&self, other: &Self) -> Result<Self> {
        let mut sum = self.clone();
        sum.add_assign(other)?;
        Ok(sum)
    }
    pub fn sub_assign(&mut self, other: &Self) -> Result<()> {
        self.check_size(other)?;
        self.root.sub_assign(&other.root);
        Ok(())
    }
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let mut difference = self.clone();
        difference.sub_assign(other)?;
        Ok(difference)
    }
}

impl<T: Scalar> MatrixNode<T> {
    pub(crate) fn add_assign(&mut self, other: &Self) {
        match (self, other) {
            (Self::Leaf(lhs), Self::Leaf(rhs)) => *lhs += *rhs,
            (Self::Inner(span, lhs), Self::Inner(_, rhs)) => {
                for q in Quadrant::iter_all() {
                    if let Some(theirs) = &rhs[q] {
                        ensure_matrix(&mut lhs[q], span.child()).add_assign(theirs);
                    }
                }
            }
            _ => unreachable!("inconsistent node size"),
        }
    }
    // subtracting from a freshly allocated zero quadrant leaves -rhs in it
    fn sub_assign(&mut self, other: &Self) {
        match (self, other) {
            (Self::Leaf(lhs), Self::Leaf(rhs)) => *lhs -= *rhs,
            (Self::Inner(span, lhs), Self::Inner(_, rhs)) => {
                for q in Quadrant::iter_all() {
                    if let Some(theirs) = &rhs[q] {
                        ensure_matrix(&mut lhs[q], span.child()).sub_assign(theirs);
                    }
                }
            }
            _ => unreachable!("inconsistent node size"),
        }
    }
}
