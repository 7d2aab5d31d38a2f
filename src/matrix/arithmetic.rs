//! Element-wise addition and subtraction
//!
//! Both walk the union of the operands' stored coordinates, so the cost is
//! proportional to the number of non-zeros and never to `n_rows * n_cols`.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::{Coordinate, Element, SparseMatrix};

impl<T: Element> SparseMatrix<T> {
    /// Returns `self + other`
    ///
    /// # Errors
    ///
    /// [`MatrixError::DimensionMismatch`] if the shapes differ,
    /// [`MatrixError::Overflow`] if a sum does not fit in `T`.
    pub fn add(&self, other: &Self) -> Result<Self> {
        elementwise(self, other, "addition", |a, b| a.checked_add(&b))
    }

    /// Returns `self - other`
    ///
    /// # Errors
    ///
    /// Same as [`add`](Self::add).
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        elementwise(self, other, "subtraction", |a, b| a.checked_sub(&b))
    }
}

fn elementwise<T, F>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    op: &'static str,
    combine: F,
) -> Result<SparseMatrix<T>>
where
    T: Element,
    F: Fn(T, T) -> Option<T>,
{
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            op,
            left: a.shape(),
            right: b.shape(),
        });
    }

    debug!(
        op,
        rows = a.n_rows(),
        cols = a.n_cols(),
        lhs_nnz = a.nnz(),
        rhs_nnz = b.nnz(),
        "element-wise operation"
    );

    let positions: BTreeSet<Coordinate> = a.coordinates().chain(b.coordinates()).collect();

    let mut result = SparseMatrix::with_shape(a.n_rows(), a.n_cols());
    for coord in positions {
        let value = combine(a.get(coord.row, coord.col), b.get(coord.row, coord.col)).ok_or(
            MatrixError::Overflow {
                op,
                row: coord.row,
                col: coord.col,
            },
        )?;
        result.store(coord, value);
    }

    Ok(result)
}
