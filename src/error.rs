//! # Error reporting for container operations
//!
//! All failures are violations of a container's contract by the caller: a size that can't be
//! allocated, an index outside of the stored range or operands that don't have the same shape.
//! None of them are recoverable inside this crate, they are returned to the caller as is.
use std::error;
use std::fmt;
use std::ops::Range;

/// An `Error` is created when an operation on a `Vector` or `Matrix` can't be carried out.
///
/// Whenever one of these is returned, none of the operands were modified.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// A container was requested with a size of zero, or larger than its capacity.
    InvalidSize {
        /// Requested size.
        size: usize,
        /// Largest size allowed for this container type.
        max: usize,
    },
    /// An index was used that is not in the range of logical indices of the container.
    IndexOutOfRange {
        /// Requested logical index.
        index: usize,
        /// Logical indices that are valid for this container.
        range: Range<usize>,
    },
    /// A binary operation was attempted on two containers of different sizes.
    SizeMismatch {
        /// Size of the left operand.
        left: usize,
        /// Size of the right operand.
        right: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidSize { size, max } => write!(
                f, "InvalidSize: size {} is not in the range 1..={}", size, max,
            ),
            Error::IndexOutOfRange { index, range } => write!(
                f, "IndexOutOfRange: index {} is not in the range {}..{}", index, range.start, range.end,
            ),
            Error::SizeMismatch { left, right } => write!(
                f, "SizeMismatch: operands have sizes {} and {}", left, right,
            ),
        }
    }
}

impl error::Error for Error {}
