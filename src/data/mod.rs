//! # Storing of numbers in memory
//!
//! This module provides the data structures used to represent vectors and triangular matrices.

pub mod linear_algebra;
