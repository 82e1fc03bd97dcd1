use crate::node::VectorNode;
use crate::{Half, Result, Scalar, SparseVector};

impl<T: Scalar> SparseVector<T> {
    /// inner product `sum(self[i] * conj(other[i]))`
    ///
    /// Only halves stored in both operands are visited, so vectors with
    /// disjoint support cost nothing past the first split.
    pub fn dot(&self, other: &Self) -> Result<T> {
        self.check_size(other)?;
        Ok(self.root.dot(&other.root))
    }
}

impl<T: Scalar> VectorNode<T> {
    fn dot(&self, other: &Self) -> T {
        match (self, other) {
            (Self::Leaf(lhs), Self::Leaf(rhs)) => *lhs * rhs.conj(),
            (Self::Inner(_, lhs), Self::Inner(_, rhs)) => Half::iter_all()
                .filter_map(|h| Some(lhs[h].as_ref()?.dot(rhs[h].as_ref()?)))
                .fold(T::zero(), |sum, part| sum + part),
            _ => unreachable!("inconsistent node size"),
        }
    }
}
