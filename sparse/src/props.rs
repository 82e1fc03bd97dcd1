//! Property-based tests for the algebraic laws of both containers.
//!
//! Values are small integers (or complex numbers with integer parts) so
//! every comparison is exact.

use num_complex::Complex64;
use proptest::prelude::*;

use crate::{Population, SparseMatrix, SparseVector};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// any size, powers of two are not required
fn size() -> impl Strategy<Value = usize> {
    1_usize..=20
}

fn vector_entries(size: usize) -> impl Strategy<Value = Vec<(usize, i64)>> {
    prop::collection::vec((0..size, -20_i64..20), 0..12)
}

fn matrix_entries(size: usize) -> impl Strategy<Value = Vec<((usize, usize), i64)>> {
    prop::collection::vec(((0..size, 0..size), -9_i64..9), 0..12)
}

/// `n` vectors sharing one size
fn vectors(n: usize) -> impl Strategy<Value = Vec<SparseVector<i64>>> {
    size().prop_flat_map(move |size| {
        prop::collection::vec(vector_entries(size), n).prop_map(move |all| {
            all.into_iter()
                .map(|entries| SparseVector::from_entries(size, entries).unwrap())
                .collect()
        })
    })
}

/// `n` matrices sharing one size
fn matrices(n: usize) -> impl Strategy<Value = Vec<SparseMatrix<i64>>> {
    size().prop_flat_map(move |size| {
        prop::collection::vec(matrix_entries(size), n).prop_map(move |all| {
            all.into_iter()
                .map(|entries| SparseMatrix::from_entries(size, entries).unwrap())
                .collect()
        })
    })
}

fn complex_entries(size: usize) -> impl Strategy<Value = Vec<(usize, Complex64)>> {
    let complex = (-5_i32..5, -5_i32..5).prop_map(|(re, im)| Complex64::new(re.into(), im.into()));
    prop::collection::vec((0..size, complex), 0..8)
}

fn complex_vectors() -> impl Strategy<Value = (SparseVector<Complex64>, SparseVector<Complex64>)> {
    size().prop_flat_map(|size| {
        (complex_entries(size), complex_entries(size)).prop_map(move |(a, b)| {
            (
                SparseVector::from_entries(size, a).unwrap(),
                SparseVector::from_entries(size, b).unwrap(),
            )
        })
    })
}

fn dense(m: &SparseMatrix<i64>) -> Vec<Vec<i64>> {
    let n = m.size();
    (0..n)
        .map(|r| (0..n).map(|c| m.get(r, c).unwrap()).collect())
        .collect()
}

// ---------------------------------------------------------------------------
// Vector properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_vector_set_get(
        (n, entries, index) in size().prop_flat_map(|n| (Just(n), vector_entries(n), 0..n)),
        value in -100_i64..100,
    ) {
        let mut v = SparseVector::from_entries(n, entries).unwrap();
        let before: Vec<_> = (0..n).map(|i| v.get(i).unwrap()).collect();
        v.set(index, value).unwrap();
        for i in 0..n {
            let expected = if i == index { value } else { before[i] };
            prop_assert_eq!(v.get(i).unwrap(), expected);
        }
    }

    #[test]
    fn prop_vector_values_match_get(v in vectors(1)) {
        let v = &v[0];
        let values: Vec<_> = v.values().collect();
        prop_assert!(values.windows(2).all(|w| w[0].0 < w[1].0), "not increasing: {values:?}");
        for (index, value) in &values {
            prop_assert_eq!(v.get(*index).unwrap(), *value);
        }
        prop_assert_eq!(values.len() as u64, v.population());
    }

    #[test]
    fn prop_vector_add_commutative_associative(v in vectors(3)) {
        let (a, b, c) = (&v[0], &v[1], &v[2]);
        prop_assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
        prop_assert_eq!(
            a.add(b).unwrap().add(c).unwrap(),
            a.add(&b.add(c).unwrap()).unwrap()
        );
    }

    #[test]
    fn prop_vector_identities(v in vectors(1)) {
        let a = &v[0];
        let zero = SparseVector::new(a.size()).unwrap();
        prop_assert_eq!(&a.add(&zero).unwrap(), a);
        let cancelled = a.sub(a).unwrap();
        for i in 0..a.size() {
            prop_assert_eq!(cancelled.get(i).unwrap(), 0);
        }
        prop_assert_eq!(zero.sub(a).unwrap(), a.mul(-1));
    }

    #[test]
    fn prop_vector_scalar_distributes(v in vectors(2), k in -5_i64..5) {
        let (a, b) = (&v[0], &v[1]);
        prop_assert_eq!(a.add(b).unwrap().mul(k), a.mul(k).add(&b.mul(k)).unwrap());
    }

    #[test]
    fn prop_vector_dot_symmetric(v in vectors(2)) {
        let (a, b) = (&v[0], &v[1]);
        let expected: i64 = (0..a.size()).map(|i| a.get(i).unwrap() * b.get(i).unwrap()).sum();
        prop_assert_eq!(a.dot(b).unwrap(), expected);
        prop_assert_eq!(b.dot(a).unwrap(), expected);
    }

    #[test]
    fn prop_complex_dot_conjugate_symmetric((a, b) in complex_vectors()) {
        prop_assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap().conj());
    }

    #[test]
    fn prop_vector_prune_keeps_values(v in vectors(2)) {
        let mut difference = v[0].sub(&v[1]).unwrap();
        let before = difference.clone();
        difference.prune();
        prop_assert_eq!(&difference, &before);
        // a size 1 vector is a single leaf that is never dropped
        if difference.size() > 1 {
            prop_assert!(difference.values().all(|(_, value)| value != 0));
        }
    }
}

// ---------------------------------------------------------------------------
// Matrix properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn prop_matrix_set_get(
        (n, entries, row, col) in size().prop_flat_map(|n| (Just(n), matrix_entries(n), 0..n, 0..n)),
        value in -100_i64..100,
    ) {
        let mut m = SparseMatrix::from_entries(n, entries).unwrap();
        let before = dense(&m);
        m.set(row, col, value).unwrap();
        let after = dense(&m);
        for r in 0..n {
            for c in 0..n {
                let expected = if (r, c) == (row, col) { value } else { before[r][c] };
                prop_assert_eq!(after[r][c], expected);
            }
        }
    }

    #[test]
    fn prop_matrix_entries_match_get(m in matrices(1)) {
        let m = &m[0];
        let entries: Vec<_> = m.entries().collect();
        for ((row, col), value) in &entries {
            prop_assert_eq!(m.get(*row, *col).unwrap(), *value);
        }
        let mut positions: Vec<_> = entries.iter().map(|(pos, _)| *pos).collect();
        positions.sort_unstable();
        positions.dedup();
        prop_assert_eq!(positions.len(), entries.len());
    }

    #[test]
    fn prop_matrix_add_commutative_associative(m in matrices(3)) {
        let (a, b, c) = (&m[0], &m[1], &m[2]);
        prop_assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
        prop_assert_eq!(
            a.add(b).unwrap().add(c).unwrap(),
            a.add(&b.add(c).unwrap()).unwrap()
        );
    }

    #[test]
    fn prop_matrix_sub_matches_dense(m in matrices(2)) {
        let (a, b) = (&m[0], &m[1]);
        let difference = dense(&a.sub(b).unwrap());
        let (a, b) = (dense(a), dense(b));
        for r in 0..a.len() {
            for c in 0..a.len() {
                prop_assert_eq!(difference[r][c], a[r][c] - b[r][c]);
            }
        }
    }

    #[test]
    fn prop_matrix_scalar_distributes(m in matrices(2), k in -5_i64..5) {
        let (a, b) = (&m[0], &m[1]);
        prop_assert_eq!(a.add(b).unwrap().scale(k), a.scale(k).add(&b.scale(k)).unwrap());
    }

    #[test]
    fn prop_matmul_matches_dense(m in matrices(2)) {
        let (a, b) = (&m[0], &m[1]);
        let product = dense(&a.matmul(b).unwrap());
        let (a, b) = (dense(a), dense(b));
        let n = a.len();
        for r in 0..n {
            for c in 0..n {
                let expected: i64 = (0..n).map(|k| a[r][k] * b[k][c]).sum();
                prop_assert_eq!(product[r][c], expected, "({}, {})", r, c);
            }
        }
    }

    #[test]
    fn prop_row_col_consistent(m in matrices(1)) {
        let m = &m[0];
        for i in 0..m.size() {
            let row = m.row(i).unwrap();
            let col = m.col(i).unwrap();
            for j in 0..m.size() {
                prop_assert_eq!(row.get(j).unwrap(), m.get(i, j).unwrap());
                prop_assert_eq!(col.get(j).unwrap(), m.get(j, i).unwrap());
            }
        }
    }
}

#[test]
fn matmul_power_of_two_sizes() {
    // a handful of entries per operand at sizes 2, 4, 8
    for size in [2, 4, 8] {
        let last = size - 1;
        let a = SparseMatrix::from_entries(size, [((0, 0), 2_i64), ((0, last), 3), ((last, 1), -1)])
            .unwrap();
        let b = SparseMatrix::from_entries(size, [((last, 0), 4_i64), ((1, 1), 5), ((0, last), 7)])
            .unwrap();
        let product = dense(&a.matmul(&b).unwrap());
        let (a, b) = (dense(&a), dense(&b));
        for r in 0..size {
            for c in 0..size {
                let expected: i64 = (0..size).map(|k| a[r][k] * b[k][c]).sum();
                assert_eq!(product[r][c], expected, "size {size} ({r}, {c})");
            }
        }
    }
}
