//! # Traits for elements of vectors and matrices
//!
//! The containers in this crate are generic over the number type they store. Two traits describe
//! what is needed of that type:
//!
//! * `Element` is needed to create, compare and print a container. New containers are filled with
//! the additive identity.
//! * `ElementRef` is needed for arithmetic. It is implemented by references to the element type,
//! such that operations can be done without cloning the operands first. Exact number types (like
//! rationals) are expensive to clone.
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Sub};

use num_traits::Zero;

/// Element of a `Vector` or `Matrix`.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Element: Zero + Clone + PartialEq + Display + Debug {
}
impl<T: Zero + Clone + PartialEq + Display + Debug> Element for T {
}

/// A reference to an `Element` that supports the ring operations.
///
/// Automatically implemented for all types satisfying the trait's bounds. Used as
/// `for<'r> &'r T: ElementRef<T>`.
pub trait ElementRef<Deref>:
    Add<Output=Deref> +
    Sub<Output=Deref> +
    Mul<Output=Deref> +
    Sized
{
}
impl<Deref, R> ElementRef<Deref> for R
where
    R: Add<Output=Deref> + Sub<Output=Deref> + Mul<Output=Deref>,
{
}
