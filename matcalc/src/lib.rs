//! # Matcalc
//!
//! Dense matrix algebra and a small expression language on top of it.
//!
//! One `use matcalc::prelude::*;` gives you the [`Matrix`](core::Matrix)
//! type, determinant, inverse, integer powers, Strassen multiplication and
//! the expression evaluator.
//!
//! ```
//! use matcalc::prelude::*;
//!
//! let m = evaluate("[1 2;3 4]^-1 * [1 2;3 4]").unwrap();
//! assert!(m.approx_eq(&Matrix::identity(2).unwrap(), 1e-12));
//! ```

pub use matcalc_core as core;

/// Glob-import convenience: `use matcalc::prelude::*;`
pub mod prelude {
    pub use matcalc_core::prelude::*;
}
