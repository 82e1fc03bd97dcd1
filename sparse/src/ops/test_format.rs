//! dense text grids for writing fixtures
//!
//! Tokens are separated by whitespace. `.` is an absent entry and anything
//! else is parsed with `FromStr`, so `0` stores an explicit zero leaf.

use std::str::FromStr;

use crate::{Error, Result, Scalar, SparseMatrix, SparseVector};

// macros make formatting nicer

/// every token on every line is one index, in order
#[macro_export]
macro_rules! test_vector {
    {$s:literal} => {
        $crate::SparseVector::from_test_format($s).expect("valid test vector")
    };
}
/// one line per row, must be square
#[macro_export]
macro_rules! test_matrix {
    {$s:literal} => {
        $crate::SparseMatrix::from_test_format($s).expect("valid test matrix")
    };
}

impl<T: Scalar + FromStr> SparseVector<T> {
    pub fn from_test_format(s: &str) -> Result<Self> {
        let tokens: Vec<_> = tokens_by_line(s)
            .flat_map(|(line, tokens)| tokens.map(move |token| (line, token)))
            .collect();
        let mut vector = Self::new(tokens.len()).map_err(|_| Error::InvalidFormat {
            line: 1,
            reason: "no entries",
        })?;
        for (index, (line, token)) in tokens.into_iter().enumerate() {
            if let Some(value) = parse_token(token, line)? {
                vector.set(index, value)?;
            }
        }
        Ok(vector)
    }
}

impl<T: Scalar + FromStr> SparseMatrix<T> {
    pub fn from_test_format(s: &str) -> Result<Self> {
        let rows: Vec<(usize, Vec<&str>)> = tokens_by_line(s)
            .map(|(line, tokens)| (line, tokens.collect()))
            .collect();
        let size = rows.len();
        let mut matrix = Self::new(size).map_err(|_| Error::InvalidFormat {
            line: 1,
            reason: "no rows",
        })?;
        for (row, (line, tokens)) in rows.into_iter().enumerate() {
            if tokens.len() != size {
                return Err(Error::InvalidFormat {
                    line,
                    reason: "row length differs from row count",
                });
            }
            for (col, token) in tokens.into_iter().enumerate() {
                if let Some(value) = parse_token(token, line)? {
                    matrix.set(row, col, value)?;
                }
            }
        }
        Ok(matrix)
    }
}

/// non-blank lines with their 1-based line number
fn tokens_by_line(s: &str) -> impl Iterator<Item = (usize, std::str::SplitWhitespace<'_>)> {
    s.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line.split_whitespace()))
}

fn parse_token<T: FromStr>(token: &str, line: usize) -> Result<Option<T>> {
    if token == "." {
        return Ok(None);
    }
    token.parse().map(Some).map_err(|_| Error::InvalidFormat {
        line,
        reason: "invalid value",
    })
}
