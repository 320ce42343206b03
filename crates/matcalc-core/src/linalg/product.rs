//! Matrix-matrix product and the choice between the classical triple loop
//! and the Strassen multiplier.

use log::debug;

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

use super::strassen::strassen;

/// Whether `a * b` is eligible for Strassen multiplication: both square,
/// of equal order, and that order a power of two no smaller than 2.
pub fn uses_strassen<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> bool {
    let n = a.rows();
    a.is_square() && b.shape() == (n, n) && n >= 2 && n.is_power_of_two()
}

/// Classical `O(m * k * n)` product, accumulating into a zeroed output.
///
/// ```
/// # use matcalc_core::Matrix;
/// # use matcalc_core::linalg::naive_matmul;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// let c = naive_matmul(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn naive_matmul<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    check_product(a, b)?;
    let (m, k) = a.shape();
    let n = b.cols();

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let mut c = Matrix::filled(m, n, T::zero());
    let c_data = c.as_mut_slice();

    // ikj order keeps the inner loop contiguous in both B and C
    for i in 0..m {
        for p in 0..k {
            let aip = a_data[i * k + p];
            for j in 0..n {
                c_data[i * n + j] += aip * b_data[p * n + j];
            }
        }
    }
    Ok(c)
}

fn check_product<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<()> {
    if a.cols() != b.rows() {
        return Err(CoreError::IncompatibleShape {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(())
}

impl<T: Scalar> Matrix<T> {
    /// Matrix product `self * other`, shaped `self.rows() x other.cols()`.
    ///
    /// Square operands of equal power-of-two order go through
    /// [`strassen`]; everything else uses [`naive_matmul`].
    ///
    /// ```
    /// # use matcalc_core::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
    /// let b = Matrix::from_rows(&[[1.0], [1.0], [1.0]]).unwrap();
    /// assert_eq!(a.matmul(&b).unwrap().as_slice(), &[6.0]);
    /// assert!(b.matmul(&b).is_err());
    /// ```
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        check_product(self, other)?;
        if uses_strassen(self, other) {
            debug!("multiplying {}x{} operands with strassen", self.rows(), self.rows());
            strassen(self, other)
        } else {
            naive_matmul(self, other)
        }
    }
}
