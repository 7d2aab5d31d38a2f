//! Utilities for converting between our matrix format and sprs

use sprs::CsMat;

use crate::matrix::{Coordinate, Element, SparseMatrix};
use crate::utils::exclusive_scan;

/// Converts a sparse matrix to sprs CsMat in CSR format
pub fn to_sprs_csr<T>(matrix: &SparseMatrix<T>) -> CsMat<T>
where
    T: Element + Default,
{
    let mut row_counts = vec![0; matrix.n_rows()];
    let mut col_idx = Vec::with_capacity(matrix.nnz());
    let mut values = Vec::with_capacity(matrix.nnz());

    // Entries come out row-major, which is exactly CSR order
    for (coord, value) in matrix.iter() {
        row_counts[coord.row] += 1;
        col_idx.push(coord.col);
        values.push(value);
    }

    CsMat::new(
        matrix.shape(),
        exclusive_scan(&row_counts),
        col_idx,
        values,
    )
}

/// Converts a sprs CsMat (CSR or CSC) to our sparse matrix
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T>(matrix: &CsMat<T>) -> SparseMatrix<T>
where
    T: Element + Default,
{
    // Ensure matrix is in CSR format
    let converted;
    let csr = if matrix.is_csr() {
        matrix
    } else {
        converted = matrix.to_csr();
        &converted
    };

    let (n_rows, n_cols) = csr.shape();
    let mut result = SparseMatrix::with_shape(n_rows, n_cols);
    for (row, row_vec) in csr.outer_iterator().enumerate() {
        for (col, &value) in row_vec.iter() {
            result.store(Coordinate::new(row, col), value);
        }
    }
    result
}
