//! # Scenarios
//!
//! Small, fixed examples of how the containers are used together.
use num::BigRational;

use utmatrix::data::linear_algebra::matrix::Matrix;
use utmatrix::data::linear_algebra::vector::Vector;
use utmatrix::data::linear_algebra::{MAX_MATRIX_SIZE, MAX_VECTOR_SIZE};
use utmatrix::error::Error;

#[test]
fn can_create_with_positive_size() {
    let m = Matrix::<i32>::new(5).unwrap();
    assert_eq!(m.size(), 5);

    let v = Vector::<i32>::new(5).unwrap();
    assert_eq!(v.len(), 5);
}

#[test]
fn cant_create_too_large() {
    assert_eq!(
        Matrix::<i32>::new(MAX_MATRIX_SIZE + 1),
        Err(Error::InvalidSize { size: MAX_MATRIX_SIZE + 1, max: MAX_MATRIX_SIZE }),
    );
    assert_eq!(
        Vector::<i32>::new(MAX_VECTOR_SIZE + 1).unwrap_err(),
        Error::InvalidSize { size: MAX_VECTOR_SIZE + 1, max: MAX_VECTOR_SIZE },
    );
}

#[test]
fn can_set_and_get_row() {
    let mut m = Matrix::<i32>::new(2).unwrap();
    let mut v = Vector::<i32>::new(2).unwrap();
    v[1] = 2;

    m.set_row(0, &v).unwrap();

    assert_eq!(m.row(0).unwrap(), &v);
}

#[test]
fn cant_set_row_out_of_range() {
    let size = 100;
    let mut m = Matrix::<i32>::new(size).unwrap();
    let mut v = Vector::<i32>::new(size).unwrap();
    v[1] = 3;

    assert!(matches!(m.set_row(size + 1, &v), Err(Error::IndexOutOfRange { .. })));
}

#[test]
fn vector_index_out_of_range() {
    let v = Vector::<i32>::new(2).unwrap();

    assert_eq!(v.get(3), Err(Error::IndexOutOfRange { index: 3, range: 0..2 }));
    assert!(v.get(usize::MAX).is_err());
}

#[test]
fn can_add_matrices_with_equal_size() {
    let mut a = Matrix::<i32>::new(2).unwrap();
    a.set(0, 0, 1).unwrap();
    a.set(0, 1, 3).unwrap();
    a.set(1, 1, 2).unwrap();
    let mut b = Matrix::<i32>::new(2).unwrap();
    b.set(0, 0, 1).unwrap();
    b.set(0, 1, 3).unwrap();
    b.set(1, 1, 5).unwrap();

    let sum = a.add(&b).unwrap();

    assert_eq!(sum[(0, 0)], 2);
    assert_eq!(sum[(0, 1)], 6);
    assert_eq!(sum[(1, 1)], 7);
}

#[test]
fn cant_add_matrices_with_different_size() {
    let a = Matrix::<i32>::new(2).unwrap();
    let b = Matrix::<i32>::new(3).unwrap();

    assert_eq!(a.add(&b), Err(Error::SizeMismatch { left: 2, right: 3 }));
    assert_eq!(a.subtract(&b), Err(Error::SizeMismatch { left: 2, right: 3 }));
}

#[test]
fn assignment_adopts_size() {
    let mut m1 = Matrix::<BigRational>::new(2).unwrap();
    m1[(1, 1)] = RB!(2);
    let mut m2 = Matrix::<BigRational>::new(3).unwrap();

    m2.clone_from(&m1);

    assert_eq!(m2.size(), 2);
    assert_eq!(m2, m1);
}

#[test]
fn render() {
    let mut a = Matrix::<i32>::new(2).unwrap();
    a[(0, 1)] = 3;
    a[(1, 1)] = 2;

    assert_eq!(a.to_string(), "0 3\n0 2\n");
    assert_eq!(a.row(0).unwrap().to_string(), "0 3");
    assert_eq!(a.row(1).unwrap().to_string(), "2");
}
