//! Property-based tests using proptest.
//!
//! Algebraic identities that must hold for any matrices of compatible
//! shape, plus the text round-trip and the zero-elision invariant.

use proptest::prelude::*;

use sparse_arith::{add, multiply, parse_matrix, render, subtract, MatrixError, SparseMatrix};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn matrix_with_shape(
    n_rows: usize,
    n_cols: usize,
    values: std::ops::Range<i64>,
) -> impl Strategy<Value = SparseMatrix> {
    prop::collection::vec((0..n_rows, 0..n_cols, values), 0..24)
        .prop_map(move |triplets| SparseMatrix::from_triplets(n_rows, n_cols, triplets).unwrap())
}

fn any_matrix() -> impl Strategy<Value = SparseMatrix> {
    (1usize..8, 1usize..8).prop_flat_map(|(r, c)| matrix_with_shape(r, c, -1000..1000))
}

fn same_shape_pair() -> impl Strategy<Value = (SparseMatrix, SparseMatrix)> {
    (1usize..8, 1usize..8).prop_flat_map(|(r, c)| {
        (
            matrix_with_shape(r, c, -1000..1000),
            matrix_with_shape(r, c, -1000..1000),
        )
    })
}

fn multipliable_triple() -> impl Strategy<Value = (SparseMatrix, SparseMatrix, SparseMatrix)> {
    (1usize..6, 1usize..6, 1usize..6, 1usize..6).prop_flat_map(|(m, k, n, p)| {
        (
            matrix_with_shape(m, k, -20..20),
            matrix_with_shape(k, n, -20..20),
            matrix_with_shape(n, p, -20..20),
        )
    })
}

fn has_no_zeros(matrix: &SparseMatrix) -> bool {
    matrix.iter().all(|(_, v)| v != 0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_text_roundtrip(m in any_matrix()) {
        let text = render(&m).join("\n");
        let parsed: SparseMatrix = parse_matrix(&text).unwrap();
        prop_assert_eq!(&parsed, &m);
        prop_assert_eq!(render(&parsed), render(&m));
    }

    #[test]
    fn prop_add_zero_is_identity(m in any_matrix()) {
        let zero = SparseMatrix::new(m.n_rows(), m.n_cols()).unwrap();
        prop_assert_eq!(add(&m, &zero).unwrap(), m.clone());
        prop_assert_eq!(add(&zero, &m).unwrap(), m);
    }

    #[test]
    fn prop_subtract_self_is_empty(m in any_matrix()) {
        let d = subtract(&m, &m).unwrap();
        prop_assert_eq!(d.shape(), m.shape());
        prop_assert!(d.is_empty());
    }

    #[test]
    fn prop_add_commutes((a, b) in same_shape_pair()) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
    }

    #[test]
    fn prop_subtract_undoes_add((a, b) in same_shape_pair()) {
        let sum = add(&a, &b).unwrap();
        prop_assert_eq!(subtract(&sum, &b).unwrap(), a);
    }

    #[test]
    fn prop_results_never_store_zero((a, b) in same_shape_pair()) {
        prop_assert!(has_no_zeros(&add(&a, &b).unwrap()));
        prop_assert!(has_no_zeros(&subtract(&a, &b).unwrap()));
    }

    #[test]
    fn prop_multiply_matches_dense((a, b, _c) in multipliable_triple()) {
        let product = multiply(&a, &b).unwrap();
        prop_assert_eq!(product.shape(), (a.n_rows(), b.n_cols()));
        prop_assert_eq!(product.to_dense(), a.to_dense().dot(&b.to_dense()));
        prop_assert!(has_no_zeros(&product));
    }

    #[test]
    fn prop_multiply_is_associative((a, b, c) in multipliable_triple()) {
        let left = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
        let right = multiply(&a, &multiply(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_multiply_rejects_incompatible_shapes(
        (a, b) in (1usize..6, 1usize..6, 1usize..6, 1usize..6)
            .prop_filter("inner dimensions must differ", |(_, k, j, _)| k != j)
            .prop_flat_map(|(m, k, j, n)| {
                (matrix_with_shape(m, k, -5..5), matrix_with_shape(j, n, -5..5))
            })
    ) {
        let is_mismatch = matches!(
            multiply(&a, &b),
            Err(MatrixError::DimensionMismatch { .. })
        );
        prop_assert!(is_mismatch);
    }
}
