//! Structural operations: transpose, minors and quadrant splitting.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::{Matrix, check_dims};

impl<T: Scalar> Matrix<T> {
    /// Return the `cols x rows` transpose.
    ///
    /// ```
    /// # use matcalc_core::Matrix;
    /// let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = self.shape();
        let mut data = Vec::with_capacity(self.numel());
        for j in 0..cols {
            for i in 0..rows {
                data.push(self.data[i * cols + j]);
            }
        }
        Matrix {
            data,
            rows: cols,
            cols: rows,
        }
    }

    /// The `(rows-1) x (cols-1)` matrix left after deleting row `row` and
    /// column `col`.
    ///
    /// Fails with [`CoreError::IndexOutOfRange`] for an index outside the
    /// matrix and [`CoreError::InvalidDimension`] when nothing would remain.
    pub fn submatrix(&self, row: usize, col: usize) -> Result<Matrix<T>> {
        if row >= self.rows || col >= self.cols {
            return Err(CoreError::IndexOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        check_dims::<T>(self.rows - 1, self.cols - 1)?;
        let data = self
            .row_iter()
            .enumerate()
            .filter(|&(i, _)| i != row)
            .flat_map(|(_, r)| {
                r.iter()
                    .enumerate()
                    .filter(move |&(j, _)| j != col)
                    .map(|(_, &v)| v)
            })
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        })
    }

    /// Split a square matrix of even order `n` into its four `n/2 x n/2`
    /// quadrants `[top-left, top-right, bottom-left, bottom-right]`.
    pub fn quadrants(&self) -> Result<[Matrix<T>; 4]> {
        if !self.is_square() {
            return Err(CoreError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;
        if n % 2 != 0 {
            return Err(CoreError::InvalidDimension { rows: n, cols: n });
        }
        let h = n / 2;
        let block = |r0: usize, c0: usize| {
            let mut data = Vec::with_capacity(h * h);
            for i in r0..r0 + h {
                data.extend_from_slice(&self.data[i * n + c0..i * n + c0 + h]);
            }
            Matrix {
                data,
                rows: h,
                cols: h,
            }
        };
        Ok([block(0, 0), block(0, h), block(h, 0), block(h, h)])
    }

    /// Join four equally sized square quadrants into one matrix of twice
    /// the order. Inverse of [`quadrants`](Self::quadrants).
    pub fn from_quadrants(quadrants: [Matrix<T>; 4]) -> Result<Matrix<T>> {
        let [c11, c12, c21, c22] = quadrants;
        let h = c11.rows;
        for q in [&c11, &c12, &c21, &c22] {
            if q.shape() != (h, h) {
                return Err(CoreError::ShapeMismatch {
                    left: (h, h),
                    right: q.shape(),
                });
            }
        }
        let n = 2 * h;
        let mut data = Vec::with_capacity(n * n);
        for (left, right) in [(&c11, &c12), (&c21, &c22)] {
            for i in 0..h {
                data.extend_from_slice(&left.data[i * h..(i + 1) * h]);
                data.extend_from_slice(&right.data[i * h..(i + 1) * h]);
            }
        }
        Ok(Matrix {
            data,
            rows: n,
            cols: n,
        })
    }
}
