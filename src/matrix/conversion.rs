//! Conversion between the sparse representation and dense `ndarray` arrays

use ndarray::Array2;

use crate::matrix::{Coordinate, Element, SparseMatrix};

impl<T: Element> SparseMatrix<T> {
    /// Expands this matrix into a dense `n_rows x n_cols` array
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::from_elem((self.n_rows(), self.n_cols()), T::zero());
        for (coord, value) in self.iter() {
            dense[[coord.row, coord.col]] = value;
        }
        dense
    }

    /// Builds a sparse matrix from a dense array, keeping only non-zeros
    pub fn from_dense(dense: &Array2<T>) -> Self {
        let (n_rows, n_cols) = dense.dim();
        let mut matrix = Self::with_shape(n_rows, n_cols);
        for ((row, col), &value) in dense.indexed_iter() {
            matrix.store(Coordinate::new(row, col), value);
        }
        matrix
    }
}
