//! # Vector arithmetic
//!
//! Binary operations between vectors require both operands to have the same length, which is
//! checked before a result is allocated. Operations with a scalar can't fail.
//!
//! Operands are never modified, the result is a new vector with the start index of the left
//! operand.
use std::ops::Mul;

use crate::data::linear_algebra::traits::{Element, ElementRef};
use crate::data::linear_algebra::utilities::check_same_size;
use crate::data::linear_algebra::vector::Vector;
use crate::error::Error;

impl<T: Element, const MAX: usize> Vector<T, MAX>
where
    for<'r> &'r T: ElementRef<T>,
{
    /// Add another vector element-wise.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the vectors have different lengths.
    #[allow(clippy::should_implement_trait)]
    pub fn add<const M: usize>(&self, other: &Vector<T, M>) -> Result<Self, Error> {
        self.zip_with(other, |x, y| x + y)
    }

    /// Subtract another vector element-wise.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the vectors have different lengths.
    pub fn subtract<const M: usize>(&self, other: &Vector<T, M>) -> Result<Self, Error> {
        self.zip_with(other, |x, y| x - y)
    }

    /// Compute the inner product with another vector.
    ///
    /// # Errors
    ///
    /// `SizeMismatch` if the vectors have different lengths.
    pub fn inner_product<const M: usize>(&self, other: &Vector<T, M>) -> Result<T, Error> {
        check_same_size(self.len(), other.len())?;

        Ok(self.iter().zip(other.iter())
            .map(|(x, y)| x * y)
            .fold(T::zero(), |total, product| total + product))
    }

    /// Multiply each element with a scalar.
    pub fn scale(&self, factor: &T) -> Self {
        self.map(|x| x * factor)
    }

    /// Add a scalar to each element.
    pub fn add_scalar(&self, value: &T) -> Self {
        self.map(|x| x + value)
    }

    /// Subtract a scalar from each element.
    pub fn subtract_scalar(&self, value: &T) -> Self {
        self.map(|x| x - value)
    }

    fn map(&self, f: impl Fn(&T) -> T) -> Self {
        Self {
            data: self.data.iter().map(f).collect(),
            start_index: self.start_index,
        }
    }

    fn zip_with<const M: usize>(
        &self,
        other: &Vector<T, M>,
        f: impl Fn(&T, &T) -> T,
    ) -> Result<Self, Error> {
        check_same_size(self.len(), other.len())?;

        Ok(Self {
            data: self.data.iter().zip(other.data.iter()).map(|(x, y)| f(x, y)).collect(),
            start_index: self.start_index,
        })
    }
}

impl<T: Element, const MAX: usize> Mul<&T> for &Vector<T, MAX>
where
    for<'r> &'r T: ElementRef<T>,
{
    type Output = Vector<T, MAX>;

    fn mul(self, factor: &T) -> Self::Output {
        self.scale(factor)
    }
}

impl<T: Element, const MAX: usize> Mul<T> for Vector<T, MAX>
where
    for<'r> &'r T: ElementRef<T>,
{
    type Output = Vector<T, MAX>;

    fn mul(self, factor: T) -> Self::Output {
        self.scale(&factor)
    }
}
