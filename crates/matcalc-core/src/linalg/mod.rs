//! Linear algebra on [`Matrix`].
//!
//! | Operation | Method | Complexity |
//! |-----------|--------|------------|
//! | product | [`Matrix::matmul`] / [`naive_matmul`] | O(n^3) |
//! | fast product | [`strassen`] | O(n^2.807) |
//! | power | [`Matrix::pow`], [`Matrix::pow_unsigned`] | O(log k) products |
//! | determinant | [`Matrix::determinant`] | O(n!) |
//! | adjugate / inverse | [`Matrix::adjugate`], [`Matrix::inverse`] | O(n^2 * n!) |
//!
//! [`Matrix::matmul`] dispatches to [`strassen`] on its own when both
//! operands are square of the same power-of-two order.

mod cofactor;
mod power;
pub mod product;
pub mod strassen;

pub use product::{naive_matmul, uses_strassen};
pub use strassen::strassen;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::{Float, Scalar};

/// Determinant of a square matrix by cofactor expansion.
///
/// ```
/// # use matcalc_core::{linalg, Matrix};
/// let a = Matrix::from_rows(&[[2.0, 1.0], [1.0, 4.0]]).unwrap();
/// assert_eq!(linalg::det(&a).unwrap(), 7.0);
/// ```
pub fn det<T: Scalar>(a: &Matrix<T>) -> Result<T> {
    a.determinant()
}

/// Inverse of a square, regular matrix.
///
/// Returns [`CoreError::Singular`](crate::CoreError::Singular) if the
/// determinant is exactly zero.
pub fn inv<T: Float>(a: &Matrix<T>) -> Result<Matrix<T>> {
    a.inverse()
}
