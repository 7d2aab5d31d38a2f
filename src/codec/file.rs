//! Reading and writing matrix files

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::codec::text::{decode_lines, write_matrix};
use crate::error::{MatrixError, Result};
use crate::matrix::{Element, SparseMatrix};

/// Reads a matrix file
///
/// # Errors
///
/// [`MatrixError::NotFound`] if `path` does not exist,
/// [`MatrixError::Format`] on the first line that breaks the format
/// (including a line that is not valid UTF-8),
/// [`MatrixError::Io`] for any other read failure.
pub fn load<T: Element, P: AsRef<Path>>(path: P) -> Result<SparseMatrix<T>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| MatrixError::from_io(path, e))?;
    let reader = BufReader::new(file);

    let matrix = decode_lines(reader.lines().enumerate().map(|(idx, line)| {
        line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => MatrixError::format(idx + 1, "invalid UTF-8"),
            _ => MatrixError::from_io(path, e),
        })
    }))?;

    debug!(
        path = %path.display(),
        rows = matrix.n_rows(),
        cols = matrix.n_cols(),
        nnz = matrix.nnz(),
        "loaded matrix"
    );
    Ok(matrix)
}

/// Writes a matrix file, replacing any existing file at `path`
pub fn save<T: Element, P: AsRef<Path>>(matrix: &SparseMatrix<T>, path: P) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| MatrixError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    write_matrix(matrix, &mut writer).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    debug!(
        path = %path.display(),
        nnz = matrix.nnz(),
        "saved matrix"
    );
    Ok(())
}

impl<T: Element> SparseMatrix<T> {
    /// Reads a matrix file, see [`load`]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load(path)
    }

    /// Writes this matrix to a file, see [`save`]
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save(self, path)
    }
}
