//! Integer matrix powers by repeated squaring.

use log::debug;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::{Float, Scalar};

impl<T: Scalar> Matrix<T> {
    /// `self^k` for a square matrix and `k >= 0`, using `O(log k)`
    /// products. `k == 0` yields the identity of matching order.
    ///
    /// ```
    /// # use matcalc_core::Matrix;
    /// let fib = Matrix::from_rows(&[[1_i64, 1], [1, 0]]).unwrap();
    /// assert_eq!(fib.pow_unsigned(10).unwrap()[(0, 1)], 55);
    /// ```
    pub fn pow_unsigned(&self, k: u32) -> Result<Matrix<T>> {
        self.require_square()?;
        if k == 0 {
            return Ok(Matrix::eye(self.rows()));
        }
        debug!("raising {}x{} matrix to power {k}", self.rows(), self.cols());
        power_by_squaring(self, k)
    }
}

impl<T: Float> Matrix<T> {
    /// `self^k` for any integer `k`.
    ///
    /// Negative exponents raise the inverse to `|k|`, so `pow(-1)` is
    /// [`inverse`](Self::inverse) and a singular base fails with
    /// [`CoreError::Singular`](crate::CoreError::Singular).
    pub fn pow(&self, k: i32) -> Result<Matrix<T>> {
        if k < 0 {
            self.require_square()?;
            self.inverse()?.pow_unsigned(k.unsigned_abs())
        } else {
            self.pow_unsigned(k.unsigned_abs())
        }
    }
}

/// `base^k` for `k >= 1`: `(base^(k/2))^2`, times `base` once more when
/// `k` is odd.
fn power_by_squaring<T: Scalar>(base: &Matrix<T>, k: u32) -> Result<Matrix<T>> {
    if k == 1 {
        return Ok(base.clone());
    }
    let half = power_by_squaring(base, k / 2)?;
    let squared = half.matmul(&half)?;
    if k % 2 == 0 {
        Ok(squared)
    } else {
        squared.matmul(base)
    }
}
