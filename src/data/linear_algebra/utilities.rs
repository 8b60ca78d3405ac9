//! Helper algorithms for the `linear_algebra` module.
use std::ops::Range;

use crate::error::Error;

/// Check that a container of a given size may be created.
///
/// # Arguments
///
/// * `size`: Requested number of elements or rows.
/// * `max`: Capacity of the container type.
///
/// # Return value
///
/// The size, if it is in the range `1..=max`.
pub(super) fn validate_size(size: usize, max: usize) -> Result<usize, Error> {
    if size == 0 || size > max {
        Err(Error::InvalidSize { size, max })
    } else {
        Ok(size)
    }
}

/// Translate a logical index into a position in the underlying storage.
///
/// # Arguments
///
/// * `index`: Logical index, as used by the caller.
/// * `range`: Logical indices that are stored, in order.
///
/// # Return value
///
/// The offset of the index from the start of the range.
pub(super) fn position(index: usize, range: Range<usize>) -> Result<usize, Error> {
    if range.contains(&index) {
        Ok(index - range.start)
    } else {
        Err(Error::IndexOutOfRange { index, range })
    }
}

/// Check that two operands of a binary operation have the same size.
pub(super) fn check_same_size(left: usize, right: usize) -> Result<(), Error> {
    if left == right {
        Ok(())
    } else {
        Err(Error::SizeMismatch { left, right })
    }
}
