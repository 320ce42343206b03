//! Determinant, adjugate and inverse by cofactor (Laplace) expansion.
//!
//! The determinant expands along the first row, recursing on minors, so it
//! runs in `O(n!)`. Singularity is an exact comparison against zero; no
//! tolerance is applied.

use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::{Float, Scalar};

impl<T: Scalar> Matrix<T> {
    /// Determinant of a square matrix.
    ///
    /// ```
    /// # use matcalc_core::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(a.determinant().unwrap(), -2.0);
    /// ```
    pub fn determinant(&self) -> Result<T> {
        self.require_square()?;
        self.cofactor_expansion()
    }

    fn cofactor_expansion(&self) -> Result<T> {
        let a = self.as_slice();
        match self.rows() {
            1 => Ok(a[0]),
            2 => Ok(a[0] * a[3] - a[1] * a[2]),
            n => {
                let mut det = T::zero();
                for j in 0..n {
                    let term = a[j] * self.submatrix(0, j)?.cofactor_expansion()?;
                    det += if j % 2 == 0 { term } else { -term };
                }
                Ok(det)
            }
        }
    }

    /// Whether the determinant is non-zero (exact comparison).
    pub fn is_regular(&self) -> Result<bool> {
        Ok(self.determinant()? != T::zero())
    }

    /// Transposed cofactor matrix: `adj[j][i] = (-1)^(i+j) * det(minor(i, j))`.
    ///
    /// The adjugate of a 1x1 matrix is `[1]`.
    pub fn adjugate(&self) -> Result<Matrix<T>> {
        self.require_square()?;
        let n = self.rows();
        if n == 1 {
            return Ok(Matrix::eye(1));
        }
        let mut adj = Matrix::filled(n, n, T::zero());
        for i in 0..n {
            for j in 0..n {
                let minor = self.submatrix(i, j)?.cofactor_expansion()?;
                // `0 - x` rather than `-x` so zero cofactors never print as -0
                adj[(j, i)] = if (i + j) % 2 == 0 { minor } else { T::zero() - minor };
            }
        }
        Ok(adj)
    }

    pub(crate) fn require_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(CoreError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(())
    }
}

impl<T: Float> Matrix<T> {
    /// Inverse computed as `adjugate / determinant`.
    ///
    /// Fails with [`CoreError::NotSquare`] or, when the determinant is
    /// exactly zero, [`CoreError::Singular`].
    ///
    /// ```
    /// # use matcalc_core::Matrix;
    /// let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
    /// let inv = a.inverse().unwrap();
    /// let eye = a.matmul(&inv).unwrap();
    /// assert!(eye.approx_eq(&Matrix::identity(2).unwrap(), 1e-12));
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T>> {
        let det = self.determinant()?;
        if det == T::zero() {
            return Err(CoreError::Singular);
        }
        let factor = det.recip();
        // `+ 0` turns the -0 left by a negative determinant into +0
        Ok(self.adjugate()?.map(|x| x * factor + T::zero()))
    }
}
