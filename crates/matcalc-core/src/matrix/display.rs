//! `Display` formatting for [`Matrix`].
//!
//! One row per line, entries separated by a single space, fixed-point with
//! five decimals. A precision given in the format spec (`{:.2}`) overrides
//! the default.

use core::fmt;

use crate::Float;

use super::Matrix;

/// Digits after the decimal point when no precision is requested.
pub const DEFAULT_PRECISION: usize = 5;

impl<T: Float> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        for (r, row) in self.row_iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v:.precision$}")?;
            }
        }
        Ok(())
    }
}
