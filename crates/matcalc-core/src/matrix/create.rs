//! Matrix constructors: zero, identity, constant-filled and the 3x3 default.

use crate::Scalar;
use crate::error::Result;

use super::{Matrix, check_dims};

impl<T: Scalar> Matrix<T> {
    /// Create a `rows x cols` matrix filled with zeros.
    ///
    /// ```
    /// # use matcalc_core::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Self::full(rows, cols, T::zero())
    }

    /// Create a `rows x cols` matrix filled with a constant value.
    pub fn full(rows: usize, cols: usize, value: T) -> Result<Self> {
        check_dims::<T>(rows, cols)?;
        Ok(Self::filled(rows, cols, value))
    }

    /// Create the `n x n` identity matrix.
    ///
    /// ```
    /// # use matcalc_core::Matrix;
    /// let eye = Matrix::<f64>::identity(3).unwrap();
    /// assert_eq!(eye[(0, 0)], 1.0);
    /// assert_eq!(eye[(0, 1)], 0.0);
    /// assert!(Matrix::<f64>::identity(0).is_err());
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        check_dims::<T>(n, n)?;
        Ok(Self::eye(n))
    }

    /// Constant-filled matrix for shapes already known to be non-empty.
    pub(crate) fn filled(rows: usize, cols: usize, value: T) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            data: vec![value; rows * cols],
            rows,
            cols,
        }
    }

    /// Identity for an order already known to be non-zero.
    pub(crate) fn eye(n: usize) -> Self {
        let mut m = Self::filled(n, n, T::zero());
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }
}

impl<T: Scalar> Default for Matrix<T> {
    /// The 3x3 zero matrix.
    fn default() -> Self {
        Self::filled(3, 3, T::zero())
    }
}
