//! Element-wise and scalar arithmetic for [`Matrix`].
//!
//! The `Result`-returning methods ([`add_checked`](Matrix::add_checked),
//! [`sub_checked`](Matrix::sub_checked), [`scale`](Matrix::scale)) are the
//! primary API. Operator impls are provided for convenience:
//! - `Matrix + Matrix`, `Matrix - Matrix` (same shape, panics on mismatch)
//! - `Matrix * Matrix` (matrix product, panics on incompatible shapes)
//! - `Matrix * T` and `T * Matrix` for the built-in element types
//! - `-Matrix`

use core::ops::{Add, Mul, Neg, Sub};

use crate::Scalar;
use crate::error::Result;

use super::Matrix;

// ======================================================================
// Fallible arithmetic
// ======================================================================

impl<T: Scalar> Matrix<T> {
    /// Element-wise sum, failing with
    /// [`CoreError::ShapeMismatch`](crate::CoreError::ShapeMismatch) on
    /// different shapes.
    pub fn add_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise difference, failing with
    /// [`CoreError::ShapeMismatch`](crate::CoreError::ShapeMismatch) on
    /// different shapes.
    pub fn sub_checked(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Multiply every element by `s`, returning a new matrix.
    ///
    /// ```
    /// # use matcalc_core::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// let b = a.scale(2.0);
    /// assert_eq!(b.as_slice(), &[2.0, 4.0, 6.0, 8.0]);
    /// assert_eq!(a.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn scale(&self, s: T) -> Matrix<T> {
        self.map(|x| x * s)
    }
}

// ======================================================================
// Matrix op Matrix
// ======================================================================

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<T: Scalar> $trait for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                (&self).$method(&rhs)
            }
        }

        impl<T: Scalar> $trait for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                match self.$checked(rhs) {
                    Ok(m) => m,
                    Err(e) => panic!("{} failed: {e}", stringify!($method)),
                }
            }
        }
    };
}

impl_matrix_binop!(Add, add, add_checked);
impl_matrix_binop!(Sub, sub, sub_checked);
impl_matrix_binop!(Mul, mul, matmul);

// ======================================================================
// Matrix * scalar, scalar * Matrix
// ======================================================================

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(mut self, rhs: T) -> Matrix<T> {
        self.apply(|x| x * rhs);
        self
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.scale(rhs)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($ty:ty),*) => {
        $(
            impl Mul<Matrix<$ty>> for $ty {
                type Output = Matrix<$ty>;

                fn mul(self, rhs: Matrix<$ty>) -> Matrix<$ty> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$ty>> for $ty {
                type Output = Matrix<$ty>;

                fn mul(self, rhs: &Matrix<$ty>) -> Matrix<$ty> {
                    rhs.scale(self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64, i32, i64);

// ======================================================================
// Negation
// ======================================================================

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        self.apply(|x| -x);
        self
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn m(rows: &[&[f64]]) -> Matrix<f64> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_add() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let b = m(&[&[1.0, 0.0], &[0.0, 1.0]]);
        assert_eq!((&a + &b).as_slice(), &[2.0, 2.0, 3.0, 5.0]);
    }

    #[test]
    fn test_add_commutative_and_associative() {
        let a = m(&[&[1.5, -2.0, 3.25]]);
        let b = m(&[&[0.1, 0.2, 0.3]]);
        let c = m(&[&[-7.0, 8.0, 9.5]]);
        assert_eq!(&a + &b, &b + &a);
        let left = &(&a + &b) + &c;
        let right = &a + &(&b + &c);
        assert!(left.approx_eq(&right, 1e-12));
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = m(&[&[1.0, 2.0]]);
        let b = m(&[&[1.0], &[2.0]]);
        assert_eq!(
            a.add_checked(&b),
            Err(CoreError::ShapeMismatch {
                left: (1, 2),
                right: (2, 1)
            })
        );
        assert!(a.sub_checked(&b).is_err());
    }

    #[test]
    fn test_sub() {
        let a = m(&[&[10.0, 20.0], &[30.0, 40.0]]);
        let b = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!((a - b).as_slice(), &[9.0, 18.0, 27.0, 36.0]);
    }

    #[test]
    fn test_add_negated_is_zero() {
        let a = m(&[&[1.0, -2.5, 3.0], &[4.0, 0.0, -6.0]]);
        let z = &a + &(&a * -1.0);
        assert_eq!(z, Matrix::zeros(2, 3).unwrap());
    }

    #[test]
    fn test_scale_leaves_operand_unmodified() {
        let a = m(&[&[1.0, 2.0]]);
        let b = a.scale(3.0);
        assert_eq!(a.as_slice(), &[1.0, 2.0]);
        assert_eq!(b.as_slice(), &[3.0, 6.0]);
    }

    #[test]
    fn test_scalar_mul_commutes() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(2.0 * &a, &a * 2.0);
        let ints = Matrix::from_rows(&[[1_i32, 2]]).unwrap();
        assert_eq!((3 * ints).as_slice(), &[3, 6]);
    }

    #[test]
    fn test_neg() {
        let a = m(&[&[1.0, -2.0, 3.0]]);
        assert_eq!((-&a).as_slice(), &[-1.0, 2.0, -3.0]);
        assert_eq!((-a).as_slice(), &[-1.0, 2.0, -3.0]);
    }

    #[test]
    #[should_panic(expected = "add failed")]
    fn test_add_operator_panics_on_mismatch() {
        let a = m(&[&[1.0, 2.0]]);
        let b = m(&[&[1.0, 2.0, 3.0]]);
        let _ = a + b;
    }
}
