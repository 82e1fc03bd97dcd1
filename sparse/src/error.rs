//! Error types for sparse containers

use thiserror::Error;

/// Result type alias using the crate's [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Contract violations reported by sparse containers
///
/// Every check runs before the tree is touched, so a failed call leaves the
/// container exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A container must cover at least one index
    #[error("size must be positive")]
    EmptySize,

    /// Vector index outside `[0, size)`
    #[error("index {index} out of range for size {size}")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Size of the vector
        size: usize,
    },

    /// Matrix position outside `[0, size) x [0, size)`
    #[error("position ({row}, {col}) out of range for size {size}")]
    PositionOutOfRange {
        /// The rejected row
        row: usize,
        /// The rejected column
        col: usize,
        /// Size of the matrix
        size: usize,
    },

    /// Binary operation between containers of different sizes
    #[error("size mismatch: {lhs} vs {rhs}")]
    SizeMismatch {
        /// Size of the left-hand operand
        lhs: usize,
        /// Size of the right-hand operand
        rhs: usize,
    },

    /// Dense text grid that could not be parsed
    #[error("invalid format on line {line}: {reason}")]
    InvalidFormat {
        /// 1-based line of the offending row
        line: usize,
        /// What was wrong with it
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn check_sizes(lhs: usize, rhs: usize) -> Result<()> {
        if lhs == rhs {
            Ok(())
        } else {
            Err(Error::SizeMismatch { lhs, rhs })
        }
    }
}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn messages() {
        assert_eq!(
            Error::IndexOutOfRange { index: 9, size: 8 }.to_string(),
            "index 9 out of range for size 8"
        );
        assert_eq!(
            Error::PositionOutOfRange {
                row: 1,
                col: 4,
                size: 4
            }
            .to_string(),
            "position (1, 4) out of range for size 4"
        );
        assert_eq!(
            Error::SizeMismatch { lhs: 2, rhs: 4 }.to_string(),
            "size mismatch: 2 vs 4"
        );
    }

    #[test]
    fn check_sizes() {
        assert_eq!(Error::check_sizes(4, 4), Ok(()));
        assert_eq!(
            Error::check_sizes(4, 8),
            Err(Error::SizeMismatch { lhs: 4, rhs: 8 })
        );
    }
}
