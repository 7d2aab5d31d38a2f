//! Line format of matrix files
//!
//! ```text
//! rows=<n>
//! cols=<n>
//! (<row>, <col>, <value>)
//! ...
//! ```
//!
//! The two header lines are mandatory and come first. Entry lines may appear
//! in any order; blank lines between them are skipped. Any other line aborts
//! the parse with [`MatrixError::Format`] carrying the 1-based line number.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use tracing::trace;

use crate::error::{MatrixError, Result};
use crate::matrix::{Coordinate, Element, SparseMatrix};

const ROWS_KEY: &str = "rows=";
const COLS_KEY: &str = "cols=";

/// Decodes a matrix from a sequence of lines
///
/// Items are `Result`s so that a reader can surface I/O failures in the
/// middle of the stream; the first error of any kind stops decoding.
pub fn decode_lines<T, I, S>(lines: I) -> Result<SparseMatrix<T>>
where
    T: Element,
    I: IntoIterator<Item = Result<S>>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();

    let n_rows = parse_header(&mut lines, 1, ROWS_KEY)?;
    let n_cols = parse_header(&mut lines, 2, COLS_KEY)?;
    let mut matrix = SparseMatrix::with_shape(n_rows, n_cols);

    for (idx, line) in lines.enumerate() {
        let line_no = idx + 3;
        let line = line?;
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        let (coord, value) = parse_entry::<T>(line, line_no, n_rows, n_cols)?;
        trace!(line = line_no, row = coord.row, col = coord.col, "entry");
        matrix.store(coord, value);
    }

    Ok(matrix)
}

/// Parses a matrix held in memory
pub fn parse_matrix<T: Element>(text: &str) -> Result<SparseMatrix<T>> {
    decode_lines(text.lines().map(Ok))
}

fn parse_header<I, S>(lines: &mut I, line_no: usize, key: &str) -> Result<usize>
where
    I: Iterator<Item = Result<S>>,
    S: AsRef<str>,
{
    let name = &key[..key.len() - 1];
    let line = match lines.next() {
        Some(line) => line?,
        None => {
            return Err(MatrixError::format(
                line_no,
                format!("missing `{}` header", key),
            ))
        }
    };

    let value = line.as_ref().trim().strip_prefix(key).ok_or_else(|| {
        MatrixError::format(line_no, format!("expected `{}<n>` header", key))
    })?;

    value
        .trim()
        .parse::<usize>()
        .map_err(|_| MatrixError::format(line_no, format!("invalid {} count `{}`", name, value.trim())))
}

/// Parses one `(<row>, <col>, <value>)` line and checks it against the shape
fn parse_entry<T: Element>(
    line: &str,
    line_no: usize,
    n_rows: usize,
    n_cols: usize,
) -> Result<(Coordinate, T)> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| MatrixError::format(line_no, "entry must be enclosed in parentheses"))?;

    let tokens: Vec<&str> = inner.split(',').map(str::trim).collect();
    if tokens.len() != 3 {
        return Err(MatrixError::format(
            line_no,
            format!("expected 3 values, found {}", tokens.len()),
        ));
    }

    let row = parse_index(tokens[0], "row", line_no)?;
    let col = parse_index(tokens[1], "column", line_no)?;
    let value = tokens[2]
        .parse::<T>()
        .map_err(|_| MatrixError::format(line_no, format!("invalid value `{}`", tokens[2])))?;

    let coord = Coordinate::new(row, col);
    if !coord.within(n_rows, n_cols) {
        return Err(MatrixError::format(
            line_no,
            format!(
                "index {} out of bounds for {}x{} matrix",
                coord, n_rows, n_cols
            ),
        ));
    }

    Ok((coord, value))
}

fn parse_index(token: &str, what: &str, line_no: usize) -> Result<usize> {
    let index = token
        .parse::<i64>()
        .map_err(|_| MatrixError::format(line_no, format!("invalid {} index `{}`", what, token)))?;

    usize::try_from(index)
        .map_err(|_| MatrixError::format(line_no, format!("negative {} index {}", what, index)))
}

/// Lines of the file representation, header first, entries in row-major order
pub fn render<T: Element>(matrix: &SparseMatrix<T>) -> Vec<String> {
    let mut lines = Vec::with_capacity(matrix.nnz() + 2);
    lines.push(format!("{}{}", ROWS_KEY, matrix.n_rows()));
    lines.push(format!("{}{}", COLS_KEY, matrix.n_cols()));
    lines.extend(
        matrix
            .iter()
            .map(|(coord, value)| format!("({}, {}, {})", coord.row, coord.col, value)),
    );
    lines
}

/// Writes the file representation to any sink, one `\n`-terminated line each
pub fn write_matrix<T: Element, W: Write>(matrix: &SparseMatrix<T>, mut out: W) -> io::Result<()> {
    writeln!(out, "{}{}", ROWS_KEY, matrix.n_rows())?;
    writeln!(out, "{}{}", COLS_KEY, matrix.n_cols())?;
    for (coord, value) in matrix.iter() {
        writeln!(out, "({}, {}, {})", coord.row, coord.col, value)?;
    }
    Ok(())
}

impl<T: Element> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in render(self) {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl<T: Element> FromStr for SparseMatrix<T> {
    type Err = MatrixError;

    fn from_str(s: &str) -> Result<Self> {
        parse_matrix(s)
    }
}
