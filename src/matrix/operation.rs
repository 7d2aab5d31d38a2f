//! Binary operation selector

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::matrix::{Element, SparseMatrix};

/// One of the three binary operations on sparse matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Applies the operation to `a` and `b`
    pub fn apply<T: Element>(&self, a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Add => a.add(b),
            Operation::Subtract => a.subtract(b),
            Operation::Multiply => a.multiply(b),
        }
    }

    /// Noun used in messages and output file names ("Addition", ...)
    pub fn noun(&self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "add" | "addition" => Ok(Operation::Add),
            "2" | "sub" | "subtract" | "subtraction" => Ok(Operation::Subtract),
            "3" | "mul" | "multiply" | "multiplication" => Ok(Operation::Multiply),
            other => Err(format!("unknown operation: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixError;

    #[test]
    fn test_parse_operation() {
        assert_eq!("add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("2".parse::<Operation>().unwrap(), Operation::Subtract);
        assert_eq!(" Multiply ".parse::<Operation>().unwrap(), Operation::Multiply);
        assert!("divide".parse::<Operation>().is_err());
    }

    #[test]
    fn test_apply_dispatches() {
        let a = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 2i64), (1, 1, 3)]).unwrap();
        let b = SparseMatrix::from_triplets(2, 2, vec![(0, 0, 1i64), (0, 1, 4)]).unwrap();

        assert_eq!(Operation::Add.apply(&a, &b).unwrap(), a.add(&b).unwrap());
        assert_eq!(Operation::Subtract.apply(&a, &b).unwrap(), a.subtract(&b).unwrap());
        assert_eq!(Operation::Multiply.apply(&a, &b).unwrap(), a.multiply(&b).unwrap());
    }

    #[test]
    fn test_apply_propagates_errors() {
        let a = SparseMatrix::<i64>::new(2, 3).unwrap();
        let b = SparseMatrix::<i64>::new(2, 3).unwrap();

        assert!(matches!(
            Operation::Multiply.apply(&a, &b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
        assert!(Operation::Add.apply(&a, &b).is_ok());
    }
}
