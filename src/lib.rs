//! # sparse-arith: sparse integer matrix arithmetic
//!
//! Reads sparse integer matrices from a small text format, adds, subtracts
//! or multiplies them, and writes the result back in the same format.
//!
//! ## Overview
//!
//! - [`SparseMatrix`] stores only non-zero entries, keyed by [`Coordinate`]
//!   in row-major order. A zero is never stored and a coordinate outside the
//!   declared shape is never accepted.
//! - [`add`] and [`subtract`] touch only the union of stored coordinates.
//! - [`multiply`] indexes the right operand by row so each non-zero of the
//!   left operand only meets the entries it actually multiplies with.
//! - All arithmetic is checked: an overflow is an error, not a wrapped value.
//!
//! ## File format
//!
//! ```text
//! rows=2
//! cols=2
//! (0, 0, 1)
//! (1, 1, 4)
//! ```
//!
//! ## Usage
//!
//! ```
//! use sparse_arith::{add, render, SparseMatrix};
//!
//! let a: SparseMatrix = "rows=2\ncols=2\n(0, 0, 1)\n(0, 1, 2)\n(1, 0, 3)\n(1, 1, 4)"
//!     .parse()
//!     .unwrap();
//! let b: SparseMatrix = "rows=2\ncols=2\n(0, 0, 5)".parse().unwrap();
//!
//! let c = add(&a, &b).unwrap();
//! assert_eq!(
//!     render(&c),
//!     vec!["rows=2", "cols=2", "(0, 0, 6)", "(0, 1, 2)", "(1, 0, 3)", "(1, 1, 4)"]
//! );
//! ```

pub mod codec;
pub mod error;
pub mod matrix;
pub mod utils;

use std::path::Path;

// Re-export primary components
pub use codec::{parse_matrix, render, write_matrix};
pub use error::{MatrixError, Result};
pub use matrix::{Coordinate, Element, Operation, SparseMatrix};
pub use utils::{from_sprs, to_sprs_csr};

/// Reads an `i64` matrix from a file
///
/// Use [`SparseMatrix::load`] for other element types.
pub fn load<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    codec::load(path)
}

/// Creates an empty `rows x cols` matrix; both dimensions must be positive
pub fn create(rows: usize, cols: usize) -> Result<SparseMatrix> {
    SparseMatrix::new(rows, cols)
}

/// Returns `a + b`
pub fn add<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    a.add(b)
}

/// Returns `a - b`
pub fn subtract<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    a.subtract(b)
}

/// Returns the matrix product `a × b`
pub fn multiply<T: Element>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    a.multiply(b)
}

/// Writes `matrix` to `path` in the text format
pub fn save<T: Element, P: AsRef<Path>>(matrix: &SparseMatrix<T>, path: P) -> Result<()> {
    codec::save(matrix, path)
}

/// Version information for the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
