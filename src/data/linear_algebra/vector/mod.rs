//! # Bounds-checked vector
//!
//! Wrapping a `Vec` such that it has a fixed, validated size and all access is checked against
//! the logical indices that are stored.
//!
//! A vector usually stores the logical indices `0..len`. Rows of a triangular matrix store only
//! the entries on and right of the diagonal; row `i` stores logical indices `i..n`. The first
//! stored index is the "start index" of a vector.
use std::fmt;
use std::iter::repeat_n;
use std::ops::{Index, IndexMut, Range};
use std::slice::Iter;

use itertools::Itertools;

use crate::data::linear_algebra::MAX_VECTOR_SIZE;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::utilities::{check_same_size, position, validate_size};
use crate::error::Error;

mod ops;

/// Uses a `Vec` as underlying data structure. Length is fixed at creation.
///
/// The capacity `MAX` bounds the length that a vector can be created with.
#[derive(Debug, Clone)]
pub struct Vector<T, const MAX: usize = MAX_VECTOR_SIZE> {
    data: Vec<T>,
    start_index: usize,
}

impl<T: Element, const MAX: usize> Vector<T, MAX> {
    /// Create a vector of zeros.
    ///
    /// # Arguments
    ///
    /// * `len`: Number of elements, at least `1` and at most `MAX`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the length is zero or exceeds the capacity.
    pub fn new(len: usize) -> Result<Self, Error> {
        Self::shifted(len, 0)
    }

    /// Create a vector of zeros storing the logical indices `start_index..start_index + len`.
    pub(in crate::data::linear_algebra) fn shifted(len: usize, start_index: usize) -> Result<Self, Error> {
        let len = validate_size(len, MAX)?;

        Ok(Self {
            data: repeat_n(T::zero(), len).collect(),
            start_index,
        })
    }
}

impl<T, const MAX: usize> Vector<T, MAX> {
    /// Create a vector holding the provided values.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if there are no values, or more than the capacity.
    pub fn from_values(values: Vec<T>) -> Result<Self, Error> {
        validate_size(values.len(), MAX)?;

        Ok(Self { data: values, start_index: 0 })
    }

    /// Number of elements stored in this vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is empty. A vector that was created successfully never is.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Logical index of the first element.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Logical indices that can be used to access this vector.
    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.start_index + self.len()
    }

    /// Retrieve the value at a logical index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the index is not in `self.indices()`.
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        let i = position(index, self.indices())?;

        Ok(&self.data[i])
    }

    /// Retrieve a mutable reference to the value at a logical index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the index is not in `self.indices()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        let i = position(index, self.indices())?;

        Ok(&mut self.data[i])
    }

    /// Set the value at a logical index.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if the index is not in `self.indices()`, the vector is not changed.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), Error> {
        *self.get_mut(index)? = value;

        Ok(())
    }

    /// Iterate over the stored values, in order of their index.
    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    /// Overwrite all values with those of another vector of the same length.
    ///
    /// The start index of this vector is kept.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the lengths differ, the vector is not changed.
    pub(in crate::data::linear_algebra) fn copy_values_from<const M: usize>(
        &mut self,
        other: &Vector<T, M>,
    ) -> Result<(), Error>
    where
        T: Clone,
    {
        check_same_size(self.len(), other.len())?;

        self.data.clone_from_slice(&other.data);

        Ok(())
    }
}

impl<T: PartialEq, const M: usize, const N: usize> PartialEq<Vector<T, N>> for Vector<T, M> {
    /// Vectors are equal when they store the same values in the same order.
    fn eq(&self, other: &Vector<T, N>) -> bool {
        self.data == other.data
    }
}

impl<T: Eq, const MAX: usize> Eq for Vector<T, MAX> {
}

impl<T, const MAX: usize> Index<usize> for Vector<T, MAX> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T, const MAX: usize> IndexMut<usize> for Vector<T, MAX> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<'a, T, const MAX: usize> IntoIterator for &'a Vector<T, MAX> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display, const MAX: usize> fmt::Display for Vector<T, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data.iter().join(" "))
    }
}
