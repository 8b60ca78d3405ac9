//! # Bounds-checked vectors and upper triangular matrices
//!
//! A `Vector` is a fixed size, bounds-checked sequence of numbers. A `Matrix` is a square, upper
//! triangular matrix that stores only the entries on or above its diagonal, one `Vector` per row.
//!
//! Both are value types: copies are deep, and all operations that can fail check their arguments
//! before anything is written.
#![warn(missing_docs)]


pub mod data;
pub mod error;
