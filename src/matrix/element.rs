//! Element type bounds

use std::fmt;
use std::str::FromStr;

use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Signed, Zero};

/// Integer type that can be stored in a [`SparseMatrix`](crate::SparseMatrix).
///
/// Arithmetic on elements is always checked; an overflowing sum or product
/// is reported as [`MatrixError::Overflow`](crate::MatrixError::Overflow)
/// rather than wrapping. Any primitive signed integer qualifies, `i64` is
/// the default.
pub trait Element:
    Copy
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Zero
    + Signed
    + CheckedAdd
    + CheckedSub
    + CheckedMul
{
}

impl<T> Element for T where
    T: Copy
        + PartialEq
        + fmt::Debug
        + fmt::Display
        + FromStr
        + Zero
        + Signed
        + CheckedAdd
        + CheckedSub
        + CheckedMul
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_as<T: Element>(token: &str) -> Option<T> {
        token.parse().ok()
    }

    #[test]
    fn test_signed_widths_are_elements() {
        assert_eq!(parse_as::<i32>("-7"), Some(-7));
        assert_eq!(parse_as::<i64>("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_as::<i128>("170141183460469231731687303715884105727"), Some(i128::MAX));
        assert_eq!(parse_as::<i8>("128"), None);
    }
}
