use crate::node::VectorNode;
use crate::{Error, Result, Scalar, Span};

/// A vector over `[0, size)` stored as a binary tree
///
/// Memory is proportional to the number of stored entries rather than to
/// `size`: any half of the range that was never written is simply absent
/// and reads as zero.
///
/// Writing zero stores a zero leaf, and arithmetic that cancels leaves
/// zero leaves behind. [`SparseVector::prune`] reclaims them.
#[derive(Clone, Debug)]
pub struct SparseVector<T> {
    pub(crate) root: VectorNode<T>,
}

impl<T: Scalar> SparseVector<T> {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            root: VectorNode::empty(Span::new(size)?),
        })
    }
    /// applies `entries` with [`SparseVector::set`] in order, so later
    /// entries for the same index win
    pub fn from_entries(size: usize, entries: impl IntoIterator<Item = (usize, T)>) -> Result<Self> {
        let mut vector = Self::new(size)?;
        for (index, value) in entries {
            vector.set(index, value)?;
        }
        Ok(vector)
    }
    pub(crate) fn from_root(root: VectorNode<T>) -> Self {
        Self { root }
    }

    pub fn size(&self) -> usize {
        self.root.span().size()
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        let size = self.size();
        if index < size {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange { index, size })
        }
    }
    pub(crate) fn check_size(&self, other: &Self) -> Result<()> {
        Error::check_sizes(self.size(), other.size())
    }
}

#[cfg(test)]
mod test {
    use crate::{Error, Population, SparseVector};

    #[test]
    fn new() {
        assert_eq!(SparseVector::<f64>::new(0).unwrap_err(), Error::EmptySize);
        let v = SparseVector::<f64>::new(5).unwrap();
        assert_eq!(v.size(), 5);
        assert!(v.is_empty());
    }

    #[test]
    fn single_index_stores_its_leaf() {
        let mut v = SparseVector::<i64>::new(1).unwrap();
        assert_eq!(v.values().collect::<Vec<_>>(), [(0, 0)]);
        v.prune();
        assert_eq!(v.population(), 1);
        assert_eq!(v.get(0), Ok(0));
    }

    #[test]
    fn from_entries_later_wins() {
        let v = SparseVector::from_entries(4, [(1, 2_i64), (3, 4), (1, 7)]).unwrap();
        assert_eq!(v.get(1), Ok(7));
        assert_eq!(v.get(3), Ok(4));
        assert_eq!(v.population(), 2);
    }

    #[test]
    fn from_entries_out_of_range() {
        let err = SparseVector::from_entries(4, [(0, 1_i64), (4, 2)]).unwrap_err();
        assert_eq!(err, Error::IndexOutOfRange { index: 4, size: 4 });
    }

    #[test]
    fn copy_is_deep() {
        let original = SparseVector::from_entries(8, [(2, 1.0), (5, 2.0)]).unwrap();
        let mut copy = original.clone();
        copy.set(2, 10.0).unwrap();
        copy.set(7, 3.0).unwrap();
        assert_eq!(original.get(2), Ok(1.0));
        assert_eq!(original.get(7), Ok(0.0));
        assert_eq!(original.population(), 2);
        assert_eq!(copy.population(), 3);
    }
}
