//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.

/// Shorthand for creating an arbitrary precision rational number in tests.
macro_rules! RB {
    ($value:expr) => {
        num::BigRational::from_integer(num::BigInt::from($value))
    };
}

mod scenarios;
