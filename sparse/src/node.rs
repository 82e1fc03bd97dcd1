//! Tree nodes shared by the public containers
//!
//! A node either is a leaf holding one scalar, or splits its span into
//! children. A `None` child is the canonical form of an all-zero region.

use crate::{Pair, Quad, Scalar, Span};

pub(crate) type Child<N> = Option<Box<N>>;

#[derive(Clone, Debug)]
pub(crate) enum VectorNode<T> {
    Leaf(T),
    Inner(Span, Pair<Child<VectorNode<T>>>),
}

#[derive(Clone, Debug)]
pub(crate) enum MatrixNode<T> {
    Leaf(T),
    Inner(Span, Quad<Child<MatrixNode<T>>>),
}

impl<T: Scalar> VectorNode<T> {
    pub(crate) fn empty(span: Span) -> Self {
        if span.is_leaf() {
            Self::Leaf(T::zero())
        } else {
            Self::Inner(span, Pair::default())
        }
    }
    pub(crate) fn span(&self) -> Span {
        match self {
            Self::Leaf(_) => Span::LEAF,
            Self::Inner(span, _) => *span,
        }
    }
}

impl<T: Scalar> MatrixNode<T> {
    pub(crate) fn empty(span: Span) -> Self {
        if span.is_leaf() {
            Self::Leaf(T::zero())
        } else {
            Self::Inner(span, Quad::default())
        }
    }
    pub(crate) fn span(&self) -> Span {
        match self {
            Self::Leaf(_) => Span::LEAF,
            Self::Inner(span, _) => *span,
        }
    }
}

/// the child in `slot`, allocating an empty one of `span` if it is absent
pub(crate) fn ensure_vector<T: Scalar>(
    slot: &mut Child<VectorNode<T>>,
    span: Span,
) -> &mut VectorNode<T> {
    slot.get_or_insert_with(|| Box::new(VectorNode::empty(span)))
}
/// the child in `slot`, allocating an empty one of `span` if it is absent
pub(crate) fn ensure_matrix<T: Scalar>(
    slot: &mut Child<MatrixNode<T>>,
    span: Span,
) -> &mut MatrixNode<T> {
    slot.get_or_insert_with(|| Box::new(MatrixNode::empty(span)))
}
