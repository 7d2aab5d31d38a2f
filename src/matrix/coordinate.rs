//! Cell coordinates

use std::fmt;

/// A (row, column) position in a matrix.
///
/// Ordering is row-major: rows compare first, then columns. The sparse
/// storage relies on this to iterate entries in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if the coordinate lies inside an `n_rows x n_cols` matrix
    pub fn within(&self, n_rows: usize, n_cols: usize) -> bool {
        self.row < n_rows && self.col < n_cols
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
