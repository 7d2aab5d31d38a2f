//! Dictionary-of-keys sparse matrix
//!
//! Non-zero entries live in an ordered map keyed by [`Coordinate`]. The map
//! never holds a zero value and never holds a coordinate outside the
//! declared shape; every write goes through [`SparseMatrix::set`] (or the
//! crate-internal `store`, which assumes the bounds were checked already).

use std::collections::BTreeMap;
use std::fmt;

use num_traits::One;

use crate::error::{MatrixError, Result};
use crate::matrix::{Coordinate, Element};

/// A sparse integer matrix storing only its non-zero entries
///
/// The shape is fixed when the matrix is created. Entries are kept in
/// row-major order, so [`iter`](Self::iter) always yields them sorted by
/// row and then by column.
#[derive(Clone, PartialEq)]
pub struct SparseMatrix<T = i64> {
    n_rows: usize,
    n_cols: usize,
    elements: BTreeMap<Coordinate, T>,
}

impl<T: Element> SparseMatrix<T> {
    /// Creates an empty matrix with the given dimensions
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidShape`] unless both dimensions are positive.
    pub fn new(n_rows: usize, n_cols: usize) -> Result<Self> {
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrixError::InvalidShape { n_rows, n_cols });
        }
        Ok(Self::with_shape(n_rows, n_cols))
    }

    /// Creates an empty matrix of any shape, including `0 x n` and `n x 0`
    ///
    /// This is the additive identity for a matrix of the same shape, so it
    /// also covers degenerate matrices read from a file, which
    /// [`new`](Self::new) rejects.
    pub fn zeros(n_rows: usize, n_cols: usize) -> Self {
        Self::with_shape(n_rows, n_cols)
    }

    pub(crate) fn with_shape(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            elements: BTreeMap::new(),
        }
    }

    /// Builds a matrix from `(row, col, value)` triplets
    ///
    /// Triplets are applied in order through [`set`](Self::set): zeros are
    /// dropped and a repeated coordinate keeps the last value.
    pub fn from_triplets<I>(n_rows: usize, n_cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::with_shape(n_rows, n_cols);
        for (row, col, value) in triplets {
            matrix.set(row, col, value)?;
        }
        Ok(matrix)
    }

    /// Creates an `n x n` identity matrix
    pub fn identity(n: usize) -> Self
    where
        T: One,
    {
        let mut matrix = Self::with_shape(n, n);
        for i in 0..n {
            matrix.store(Coordinate::new(i, i), T::one());
        }
        matrix
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Returns `(n_rows, n_cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    /// Returns the number of non-zero elements in the matrix
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// True if no element is stored
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Value at `(row, col)`, zero when absent
    ///
    /// Reads outside the shape are not an error: such a cell can never be
    /// stored, so it reads as zero.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.elements
            .get(&Coordinate::new(row, col))
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// Writes `value` at `(row, col)`; writing zero removes the entry
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if the coordinate is outside
    /// the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let coord = Coordinate::new(row, col);
        if !coord.within(self.n_rows, self.n_cols) {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                n_rows: self.n_rows,
                n_cols: self.n_cols,
            });
        }
        self.store(coord, value);
        Ok(())
    }

    /// Zero-eliding upsert for coordinates already known to be in range
    pub(crate) fn store(&mut self, coord: Coordinate, value: T) {
        debug_assert!(coord.within(self.n_rows, self.n_cols));
        if value.is_zero() {
            self.elements.remove(&coord);
        } else {
            self.elements.insert(coord, value);
        }
    }

    /// Iterates over the non-zero entries in ascending (row, col) order
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, T)> + '_ {
        self.elements.iter().map(|(&coord, &value)| (coord, value))
    }

    /// Returns an iterator over the non-zero elements in row `row`
    ///
    /// Each item is a tuple (col, value), in ascending column order.
    pub fn row_iter(&self, row: usize) -> impl Iterator<Item = (usize, T)> + '_ {
        self.elements
            .range(Coordinate::new(row, 0)..=Coordinate::new(row, usize::MAX))
            .map(|(coord, &value)| (coord.col, value))
    }

    /// Set of stored coordinates, in ascending order
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.elements.keys().copied()
    }
}

impl<T: Element> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.n_rows, self.n_cols)?;
        writeln!(f, "  nnz: {}", self.nnz())?;

        let max_elements = 10.min(self.nnz());
        if max_elements > 0 {
            writeln!(f, "  content sample:")?;
            for (coord, value) in self.iter().take(max_elements) {
                writeln!(f, "    {} = {:?}", coord, value)?;
            }
            if self.nnz() > max_elements {
                writeln!(f, "    ... ({} more)", self.nnz() - max_elements)?;
            }
        }

        write!(f, "}}")
    }
}
