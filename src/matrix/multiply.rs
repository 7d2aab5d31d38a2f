//! Sparse matrix multiplication
//!
//! The right operand is indexed by row once, then each non-zero `(i, k)` of
//! the left operand only visits the non-zeros in row `k` of the right one.
//! Work is O(nnz(A) + sum of the matched row lengths of B) instead of the
//! O(nnz(A) * nnz(B)) pairwise scan.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::{Coordinate, Element, SparseMatrix};

impl<T: Element> SparseMatrix<T> {
    /// Returns the matrix product `self × other`
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if `self.n_cols() != other.n_rows()`,
    /// [`MatrixError::Overflow`] if a product or partial sum does not fit in `T`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.n_cols() != other.n_rows() {
            return Err(MatrixError::DimensionMismatch {
                op: "multiplication",
                left: self.shape(),
                right: other.shape(),
            });
        }

        debug!(
            lhs_rows = self.n_rows(),
            inner = self.n_cols(),
            rhs_cols = other.n_cols(),
            lhs_nnz = self.nnz(),
            rhs_nnz = other.nnz(),
            "multiplication"
        );

        let rows_of_b = index_rows(other);
        let overflow = |coord: Coordinate| MatrixError::Overflow {
            op: "multiplication",
            row: coord.row,
            col: coord.col,
        };

        let mut result: SparseMatrix<T> = SparseMatrix::with_shape(self.n_rows(), other.n_cols());

        // For each non-zero in A
        for (a_coord, a_val) in self.iter() {
            let Some(b_row) = rows_of_b.get(&a_coord.col) else {
                continue;
            };

            // For each non-zero in row k of B
            for &(j, b_val) in b_row {
                let target = Coordinate::new(a_coord.row, j);
                let product = a_val.checked_mul(&b_val).ok_or_else(|| overflow(target))?;
                let sum = result
                    .get(target.row, target.col)
                    .checked_add(&product)
                    .ok_or_else(|| overflow(target))?;
                result.store(target, sum);
            }
        }

        Ok(result)
    }
}

/// Groups the non-zeros of `matrix` by row: `row -> [(col, value)]`
fn index_rows<T: Element>(matrix: &SparseMatrix<T>) -> HashMap<usize, Vec<(usize, T)>> {
    let mut rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for (coord, value) in matrix.iter() {
        rows.entry(coord.row).or_default().push((coord.col, value));
    }
    rows
}
