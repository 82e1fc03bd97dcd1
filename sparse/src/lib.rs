// lints
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::items_after_statements,
    clippy::module_name_repetitions,
    clippy::collapsible_else_if,
    clippy::missing_panics_doc,
    clippy::should_implement_trait,
    clippy::into_iter_without_iter,
    clippy::similar_names,
    clippy::missing_errors_doc // TODO remove once the public api settles
)]

mod error;
mod matrix;
mod node;
mod pair;
mod pos;
mod quad;
mod scalar;
mod span;
mod vector;
mod ops {
    mod add;
    mod dot;
    mod eq;
    mod get;
    mod iter;
    mod matmul;
    mod population;
    mod prune;
    mod scale;
    mod slice;
    mod test_format;

    pub use iter::*;
    pub use matmul::*;
    pub use population::*;
}
#[cfg(test)]
mod props;

pub use error::*;
pub use matrix::*;
pub use ops::*;
pub use pair::*;
pub use pos::*;
pub use quad::*;
pub use scalar::*;
pub use span::*;
pub use vector::*;
