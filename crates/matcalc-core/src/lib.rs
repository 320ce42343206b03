//! `matcalc-core`: dense matrices and a matrix expression evaluator.
//!
//! Provides a row-major [`Matrix`] type, cofactor-based determinant,
//! adjugate and inverse, integer powers, Strassen multiplication and a
//! single-pass reader for expressions such as `([1 2;3 4] + E2)^-1 * 2`.
//!
//! # Design
//!
//! - Generic over numeric types via the [`Scalar`] / [`Float`] traits;
//!   expressions are always evaluated in `f64`.
//! - Fallible operations return [`Result`]; the operator impls (`+`, `-`,
//!   `*`) are thin sugar over the `*_checked` methods and panic on shape
//!   errors.
//! - No `unsafe` anywhere.

pub mod dtype;
pub mod error;
pub mod expr;
pub mod linalg;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Scalar};
pub use error::{CoreError, ExprError, Result};
pub use expr::{ExpressionReader, evaluate};
pub use matrix::Matrix;

/// Items intended for glob-import: `use matcalc_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, ExprError, Result};
    pub use crate::expr::{ExpressionReader, evaluate};
    pub use crate::linalg::{det, inv, strassen};
    pub use crate::matrix::Matrix;
}
