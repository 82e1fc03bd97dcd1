use crate::node::{MatrixNode, VectorNode};
use crate::{Pair, Quad, SparseMatrix, SparseVector};

// TODO this is nice as a trait because it is used a decent amount, but annoying to have to bring it into scope
/// number of stored leaves, explicit zeros included
pub trait Population {
    fn population(&self) -> u64;
    fn is_empty(&self) -> bool;
}
impl<'a, T> Population for &'a T
where
    T: Population,
{
    fn population(&self) -> u64 {
        (**self).population()
    }
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}
impl<T> Population for Option<T>
where
    T: Population,
{
    fn population(&self) -> u64 {
        self.as_ref().map_or(0, T::population)
    }
    fn is_empty(&self) -> bool {
        self.as_ref().map_or(true, T::is_empty)
    }
}
impl<T> Population for Box<T>
where
    T: Population,
{
    fn population(&self) -> u64 {
        (**self).population()
    }
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

impl<T> Population for Pair<T>
where
    T: Population,
{
    fn population(&self) -> u64 {
        self.iter().map(T::population).sum()
    }
    fn is_empty(&self) -> bool {
        self.iter().all(T::is_empty)
    }
}
impl<T> Population for Quad<T>
where
    T: Population,
{
    fn population(&self) -> u64 {
        self.iter().map(T::population).sum()
    }
    fn is_empty(&self) -> bool {
        self.iter().all(T::is_empty)
    }
}

impl<T> Population for VectorNode<T> {
    fn population(&self) -> u64 {
        match self {
            Self::Leaf(_) => 1,
            Self::Inner(_, children) => children.population(),
        }
    }
    fn is_empty(&self) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Inner(_, children) => children.is_empty(),
        }
    }
}
impl<T> Population for MatrixNode<T> {
    fn population(&self) -> u64 {
        match self {
            Self::Leaf(_) => 1,
            Self::Inner(_, quad) => quad.population(),
        }
    }
    fn is_empty(&self) -> bool {
        match self {
            Self::Leaf(_) => false,
            Self::Inner(_, quad) => quad.is_empty(),
        }
    }
}

impl<T> Population for SparseVector<T> {
    fn population(&self) -> u64 {
        self.root.population()
    }
    fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
impl<T> Population for SparseMatrix<T> {
    fn population(&self) -> u64 {
        self.root.population()
    }
    fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
