//! Error types for matrix construction, parsing and arithmetic

use std::io;
use std::path::PathBuf;

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Everything that can go wrong while building, reading, combining or
/// writing a sparse matrix.
#[derive(Debug, thiserror::Error)]
pub enum MatrixError {
    #[error("matrix file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("wrong matrix format at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("dimension mismatch in {op}: {}x{} vs {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("index ({row}, {col}) out of bounds for {n_rows}x{n_cols} matrix")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        n_rows: usize,
        n_cols: usize,
    },

    #[error("invalid matrix shape {n_rows}x{n_cols}: both dimensions must be positive")]
    InvalidShape { n_rows: usize, n_cols: usize },

    #[error("integer overflow in {op} at ({row}, {col})")]
    Overflow {
        op: &'static str,
        row: usize,
        col: usize,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MatrixError {
    pub(crate) fn format(line: usize, reason: impl Into<String>) -> Self {
        MatrixError::Format {
            line,
            reason: reason.into(),
        }
    }

    /// Maps an I/O failure on `path`, keeping "file not found" distinct.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            MatrixError::NotFound { path }
        } else {
            MatrixError::Io { path, source }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinct_from_io() {
        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert!(matches!(
            MatrixError::from_io("a.txt", missing),
            MatrixError::NotFound { .. }
        ));

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(
            MatrixError::from_io("a.txt", denied),
            MatrixError::Io { .. }
        ));
    }

    #[test]
    fn test_messages() {
        let err = MatrixError::DimensionMismatch {
            op: "addition",
            left: (2, 3),
            right: (3, 2),
        };
        assert_eq!(err.to_string(), "dimension mismatch in addition: 2x3 vs 3x2");

        let err = MatrixError::format(4, "expected 3 values, found 2");
        assert_eq!(
            err.to_string(),
            "wrong matrix format at line 4: expected 3 values, found 2"
        );
    }
}
