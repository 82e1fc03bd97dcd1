//! matrix products
//!
//! `C = A * B` is computed one quadrant at a time with the 2x2 block rule,
//! e.g. `C.nw = A.nw * B.nw + A.ne * B.sw`. A term is only computed when
//! both of its factors are present, and a result quadrant is only allocated
//! when at least one of its terms is.

use tracing::{trace, trace_span};

use crate::node::{Child, MatrixNode};
use crate::{Population, Quad, Result, Scalar, SparseMatrix};

/// right hand side of [`SparseMatrix::mul`]
#[derive(Clone, Copy, Debug)]
pub enum Factor<'a, T> {
    Scalar(T),
    Matrix(&'a SparseMatrix<T>),
}
impl<'a, T> From<&'a SparseMatrix<T>> for Factor<'a, T> {
    fn from(matrix: &'a SparseMatrix<T>) -> Self {
        Self::Matrix(matrix)
    }
}

impl<T: Scalar> SparseMatrix<T> {
    pub fn mul(&self, factor: Factor<'_, T>) -> Result<Self> {
        match factor {
            Factor::Scalar(scalar) => Ok(self.scale(scalar)),
            Factor::Matrix(other) => self.matmul(other),
        }
    }
    pub fn mul_assign(&mut self, factor: Factor<'_, T>) -> Result<()> {
        match factor {
            Factor::Scalar(scalar) => {
                self.scale_assign(scalar);
                Ok(())
            }
            Factor::Matrix(other) => self.matmul_assign(other),
        }
    }

    pub fn matmul(&self, other: &Self) -> Result<Self> {
        self.check_size(other)?;
        let _span = trace_span!("matmul", size = self.size()).entered();

        let product = Self {
            root: self.root.matmul(&other.root),
        };
        trace!(
            lhs = self.population(),
            rhs = other.population(),
            product = product.population(),
            "population"
        );
        Ok(product)
    }
    /// replaces `self` with `self * other`
    ///
    /// The product is built as a new tree and then moved into `self`.
    pub fn matmul_assign(&mut self, other: &Self) -> Result<()> {
        *self = self.matmul(other)?;
        Ok(())
    }
}

impl<T: Scalar> MatrixNode<T> {
    fn matmul(&self, other: &Self) -> Self {
        match (self, other) {
            // a 1x1 block product is the scalar product
            (Self::Leaf(lhs), Self::Leaf(rhs)) => Self::Leaf(*lhs * *rhs),
            (Self::Inner(span, a), Self::Inner(_, b)) => {
                let (a_nw, a_ne, a_sw, a_se) =
                    (a.nw.as_deref(), a.ne.as_deref(), a.sw.as_deref(), a.se.as_deref());
                let (b_nw, b_ne, b_sw, b_se) =
                    (b.nw.as_deref(), b.ne.as_deref(), b.sw.as_deref(), b.se.as_deref());
                let product = Quad {
                    nw: block(term(a_nw, b_nw), term(a_ne, b_sw)),
                    ne: block(term(a_nw, b_ne), term(a_ne, b_se)),
                    sw: block(term(a_sw, b_nw), term(a_se, b_sw)),
                    se: block(term(a_sw, b_ne), term(a_se, b_se)),
                };
                Self::Inner(*span, product)
            }
            _ => unreachable!("inconsistent node size"),
        }
    }
}

/// `None` when either factor is absent, so the term is implicitly zero
fn term<T: Scalar>(
    lhs: Option<&MatrixNode<T>>,
    rhs: Option<&MatrixNode<T>>,
) -> Option<MatrixNode<T>> {
    Some(lhs?.matmul(rhs?))
}
fn block<T: Scalar>(
    first: Option<MatrixNode<T>>,
    second: Option<MatrixNode<T>>,
) -> Child<MatrixNode<T>> {
    match (first, second) {
        (None, None) => None,
        (Some(only), None) | (None, Some(only)) => Some(Box::new(only)),
        (Some(mut sum), Some(second)) => {
            sum.add_assign(&second);
            Some(Box::new(sum))
        }
    }
}
