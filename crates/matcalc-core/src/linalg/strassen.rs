//! Strassen divide-and-conquer multiplication for square matrices whose
//! order is a power of two.
//!
//! With quadrants `a, b, c, d` of the left operand and `e, f, g, h` of the
//! right operand, seven half-size products replace the classical eight:
//!
//! ```text
//! p1 = a(f - h)        p2 = (a + b)h        p3 = (c + d)e        p4 = d(g - e)
//! p5 = (a + d)(e + h)  p6 = (b - d)(g + h)  p7 = (a - c)(e + f)
//!
//! c11 = p5 + p4 - p2 + p6    c12 = p1 + p2
//! c21 = p3 + p4              c22 = p1 + p5 - p3 - p7
//! ```
//!
//! Complexity is `O(n^log2(7))`, roughly `O(n^2.807)`.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Multiply two `n x n` matrices with Strassen's algorithm.
///
/// Both operands must be square, of the same order, and that order must
/// be a power of two. Fails with [`CoreError::NotSquare`],
/// [`CoreError::IncompatibleShape`] or [`CoreError::InvalidDimension`]
/// otherwise.
///
/// ```
/// # use matcalc_core::Matrix;
/// # use matcalc_core::linalg::strassen;
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap();
/// let c = strassen(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn strassen<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>> {
    if !a.is_square() {
        return Err(CoreError::NotSquare {
            rows: a.rows(),
            cols: a.cols(),
        });
    }
    if b.shape() != a.shape() {
        return Err(CoreError::IncompatibleShape {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let n = a.rows();
    if !n.is_power_of_two() {
        return Err(CoreError::InvalidDimension { rows: n, cols: n });
    }
    multiply(a, b)
}

#[allow(clippy::many_single_char_names)]
fn multiply<T: Scalar>(left: &Matrix<T>, right: &Matrix<T>) -> Result<Matrix<T>> {
    match left.rows() {
        1 => Ok(left.scale(right[(0, 0)])),
        2 => Ok(multiply_2x2(left, right)),
        _ => {
            let [a, b, c, d] = left.quadrants()?;
            let [e, f, g, h] = right.quadrants()?;

            let p1 = multiply(&a, &f.sub_checked(&h)?)?;
            let p2 = multiply(&a.add_checked(&b)?, &h)?;
            let p3 = multiply(&c.add_checked(&d)?, &e)?;
            let p4 = multiply(&d, &g.sub_checked(&e)?)?;
            let p5 = multiply(&a.add_checked(&d)?, &e.add_checked(&h)?)?;
            let p6 = multiply(&b.sub_checked(&d)?, &g.add_checked(&h)?)?;
            let p7 = multiply(&a.sub_checked(&c)?, &e.add_checked(&f)?)?;

            let c11 = p5.add_checked(&p4)?.sub_checked(&p2)?.add_checked(&p6)?;
            let c12 = p1.add_checked(&p2)?;
            let c21 = p3.add_checked(&p4)?;
            let c22 = p1.add_checked(&p5)?.sub_checked(&p3)?.sub_checked(&p7)?;

            Matrix::from_quadrants([c11, c12, c21, c22])
        }
    }
}

/// Base case: the seven scalar products on 2x2 operands.
#[allow(clippy::many_single_char_names)]
fn multiply_2x2<T: Scalar>(left: &Matrix<T>, right: &Matrix<T>) -> Matrix<T> {
    let (a, b, c, d) = (left[(0, 0)], left[(0, 1)], left[(1, 0)], left[(1, 1)]);
    let (e, f, g, h) = (right[(0, 0)], right[(0, 1)], right[(1, 0)], right[(1, 1)]);

    let p1 = a * (f - h);
    let p2 = (a + b) * h;
    let p3 = (c + d) * e;
    let p4 = d * (g - e);
    let p5 = (a + d) * (e + h);
    let p6 = (b - d) * (g + h);
    let p7 = (a - c) * (e + f);

    let mut out = Matrix::filled(2, 2, T::zero());
    out[(0, 0)] = p5 + p4 - p2 + p6;
    out[(0, 1)] = p1 + p2;
    out[(1, 0)] = p3 + p4;
    out[(1, 1)] = p1 + p5 - p3 - p7;
    out
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::linalg::naive_matmul;

    /// Deterministic non-integer fill so truncation bugs would show.
    fn patterned(n: usize, seed: f64) -> Matrix<f64> {
        let data = (0..n * n)
            .map(|i| ((i as f64) * 0.37 + seed).sin() * 3.5)
            .collect();
        Matrix::from_vec(n, n, data).unwrap()
    }

    #[test]
    fn test_2x2_fractional() {
        let a = Matrix::from_rows(&[[0.5, 1.5], [2.25, -0.75]]).unwrap();
        let b = Matrix::from_rows(&[[1.1, 0.0], [0.3, 2.0]]).unwrap();
        let expected = naive_matmul(&a, &b).unwrap();
        assert!(strassen(&a, &b).unwrap().approx_eq(&expected, 1e-12));
    }

    #[test]
    fn test_matches_naive_up_to_16() {
        for n in [1, 2, 4, 8, 16] {
            let a = patterned(n, 0.1);
            let b = patterned(n, 1.7);
            let fast = strassen(&a, &b).unwrap();
            let slow = naive_matmul(&a, &b).unwrap();
            assert!(fast.approx_eq(&slow, 1e-9), "order {n} diverged");
        }
    }

    #[test]
    fn test_integer_exact() {
        let a = Matrix::from_vec(4, 4, (0..16_i64).collect()).unwrap();
        let b = Matrix::from_vec(4, 4, (0..16_i64).rev().collect()).unwrap();
        assert_eq!(strassen(&a, &b).unwrap(), naive_matmul(&a, &b).unwrap());
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        let a = Matrix::<f64>::identity(3).unwrap();
        assert!(matches!(
            strassen(&a, &a),
            Err(CoreError::InvalidDimension { rows: 3, .. })
        ));
    }

    #[test]
    fn test_rejects_mismatched_orders() {
        let a = Matrix::<f64>::identity(2).unwrap();
        let b = Matrix::<f64>::identity(4).unwrap();
        assert!(matches!(
            strassen(&a, &b),
            Err(CoreError::IncompatibleShape { .. })
        ));
        let rect = Matrix::<f64>::zeros(2, 4).unwrap();
        assert!(matches!(
            strassen(&rect, &rect),
            Err(CoreError::NotSquare { .. })
        ));
    }
}
