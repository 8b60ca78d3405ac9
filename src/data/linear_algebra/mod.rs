//! # Linear algebra primitives
//!
//! A bounds-checked dense vector and an upper triangular matrix that stores one such vector per
//! row.
//!
//! Both types carry their capacity as a const generic parameter, such that the size of a container
//! is validated against the bound of its type at construction.

pub mod matrix;
pub mod traits;
pub mod vector;
mod utilities;

/// Largest number of elements a `Vector` can be created with, unless another capacity is chosen.
pub const MAX_VECTOR_SIZE: usize = 100_000_000;
/// Largest number of rows a `Matrix` can be created with, unless another capacity is chosen.
///
/// Rows are stored as `Vector`s of the default capacity, so this value may not exceed
/// `MAX_VECTOR_SIZE`.
pub const MAX_MATRIX_SIZE: usize = 10_000;

const _: () = assert!(MAX_MATRIX_SIZE <= MAX_VECTOR_SIZE);
