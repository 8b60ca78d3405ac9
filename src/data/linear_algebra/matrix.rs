//! # Upper triangular matrix
//!
//! A square matrix of which only the entries on and above the diagonal are stored. Row `i` is a
//! `Vector` of length `n - i` holding the logical columns `i..n`, so that entry `(i, j)` is stored
//! at position `j - i` of its row.
//!
//! Entries below the diagonal are not represented. Accessing them is an error, they are printed as
//! zero.
use std::fmt;
use std::iter::repeat_n;
use std::ops::{Index, IndexMut};
use std::slice::Iter;

use itertools::Itertools;
use log::trace;

use crate::data::linear_algebra::MAX_MATRIX_SIZE;
use crate::data::linear_algebra::traits::{Element, ElementRef};
use crate::data::linear_algebra::utilities::{check_same_size, position, validate_size};
use crate::data::linear_algebra::vector::Vector;
use crate::error::Error;

/// Upper triangular matrix, stored as a `Vec` of rows of decreasing length.
///
/// The capacity `MAX` bounds the number of rows (and columns) that a matrix can be created with.
#[derive(Debug, Eq, PartialEq)]
pub struct Matrix<T, const MAX: usize = MAX_MATRIX_SIZE> {
    rows: Vec<Vector<T>>,
}

impl<T: Element, const MAX: usize> Matrix<T, MAX> {
    /// Create a matrix of zeros.
    ///
    /// # Arguments
    ///
    /// * `size`: Number of rows and columns, at least `1` and at most `MAX`.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the size is zero or exceeds the capacity.
    pub fn new(size: usize) -> Result<Self, Error> {
        let size = validate_size(size, MAX)?;

        let rows = (0..size)
            .map(|i| Vector::shifted(size - i, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }
}

impl<T, const MAX: usize> Matrix<T, MAX> {
    /// Number of rows, which equals the number of columns.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Get row `i`.
    ///
    /// The row holds the columns `i..self.size()` and is indexed with those column indices.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if there is no such row.
    pub fn row(&self, i: usize) -> Result<&Vector<T>, Error> {
        let i = position(i, 0..self.size())?;

        Ok(&self.rows[i])
    }

    /// Iterate over the rows, from top to bottom.
    pub fn rows(&self) -> Iter<'_, Vector<T>> {
        self.rows.iter()
    }

    /// Replace the values of row `i` with those of a vector.
    ///
    /// The vector holds the values for columns `i..self.size()` in order, so it should have
    /// `self.size() - i` elements.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if there is no such row, `SizeMismatch` if the vector has the wrong length.
    /// In both cases, the matrix is not changed.
    pub fn set_row<const M: usize>(&mut self, i: usize, values: &Vector<T, M>) -> Result<(), Error>
    where
        T: Clone,
    {
        let i = position(i, 0..self.size())?;

        self.rows[i].copy_values_from(values)?;
        trace!("Replaced row {} of a matrix of size {}", i, self.size());

        Ok(())
    }

    /// Retrieve the value at row `i` and column `j`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i` is not a row, or if `j` is not in `i..self.size()`.
    pub fn get(&self, i: usize, j: usize) -> Result<&T, Error> {
        self.row(i)?.get(j)
    }

    /// Retrieve a mutable reference to the value at row `i` and column `j`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i` is not a row, or if `j` is not in `i..self.size()`.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T, Error> {
        let i = position(i, 0..self.size())?;

        self.rows[i].get_mut(j)
    }

    /// Set the value at row `i` and column `j`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if `i` is not a row, or if `j` is not in `i..self.size()`. The matrix is
    /// not changed.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<(), Error> {
        *self.get_mut(i, j)? = value;

        Ok(())
    }
}

impl<T: Element, const MAX: usize> Matrix<T, MAX>
where
    for<'r> &'r T: ElementRef<T>,
{
    /// Add another matrix, row by row.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the matrices have different sizes.
    #[allow(clippy::should_implement_trait)]
    pub fn add<const M: usize>(&self, other: &Matrix<T, M>) -> Result<Self, Error> {
        self.zip_rows_with(other, |row, other_row| row.add(other_row))
    }

    /// Subtract another matrix, row by row.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the matrices have different sizes.
    pub fn subtract<const M: usize>(&self, other: &Matrix<T, M>) -> Result<Self, Error> {
        self.zip_rows_with(other, |row, other_row| row.subtract(other_row))
    }

    fn zip_rows_with<const M: usize>(
        &self,
        other: &Matrix<T, M>,
        f: impl Fn(&Vector<T>, &Vector<T>) -> Result<Vector<T>, Error>,
    ) -> Result<Self, Error> {
        check_same_size(self.size(), other.size())?;

        // Rows of matrices with the same size have the same lengths
        let rows = self.rows.iter().zip(other.rows.iter())
            .map(|(row, other_row)| f(row, other_row))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rows })
    }
}

impl<T: Clone, const MAX: usize> Clone for Matrix<T, MAX> {
    fn clone(&self) -> Self {
        Self { rows: self.rows.clone() }
    }

    /// Replace this matrix by a copy of `source`, adopting its size.
    ///
    /// The copy is complete before the current rows are dropped.
    fn clone_from(&mut self, source: &Self) {
        let copy = source.clone();
        if self.size() != copy.size() {
            trace!("Assignment resizes a matrix from size {} to {}", self.size(), copy.size());
        }

        *self = copy;
    }
}

impl<T, const MAX: usize> Index<(usize, usize)> for Matrix<T, MAX> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        match self.get(i, j) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T, const MAX: usize> IndexMut<(usize, usize)> for Matrix<T, MAX> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        match self.get_mut(i, j) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T: Element, const MAX: usize> fmt::Display for Matrix<T, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            let zeros = repeat_n(T::zero(), i);
            writeln!(f, "{}", zeros.chain(row.iter().cloned()).join(" "))?;
        }

        Ok(())
    }
}
