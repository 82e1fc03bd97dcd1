use crate::node::MatrixNode;
use crate::{Error, Pos, Result, Scalar, Span};

/// A square matrix over `[0, size) x [0, size)` stored as a quad tree
///
/// Each internal node splits its range into NW, NE, SW and SE quadrants
/// and any quadrant that was never written is absent and reads as zero.
///
/// Like [`crate::SparseVector`], zero leaves are only removed by
/// [`SparseMatrix::prune`].
#[derive(Clone, Debug)]
pub struct SparseMatrix<T> {
    pub(crate) root: MatrixNode<T>,
}

impl<T: Scalar> SparseMatrix<T> {
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self {
            root: MatrixNode::empty(Span::new(size)?),
        })
    }
    /// applies `entries` with [`SparseMatrix::set`] in order, so later
    /// entries for the same position win
    pub fn from_entries(
        size: usize,
        entries: impl IntoIterator<Item = ((usize, usize), T)>,
    ) -> Result<Self> {
        let mut matrix = Self::new(size)?;
        for ((row, col), value) in entries {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    pub fn size(&self) -> usize {
        self.root.span().size()
    }

    pub(crate) fn check_pos(&self, row: usize, col: usize) -> Result<Pos> {
        let size = self.size();
        if row < size && col < size {
            Ok(Pos::new(row, col))
        } else {
            Err(Error::PositionOutOfRange { row, col, size })
        }
    }
    pub(crate) fn check_size(&self, other: &Self) -> Result<()> {
        Error::check_sizes(self.size(), other.size())
    }
}
