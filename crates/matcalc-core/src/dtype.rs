//! Numeric element types storable in a [`Matrix`](crate::Matrix).
//!
//! The trait hierarchy is:
//! ```text
//! Scalar   (f32, f64, i32, i64)
//!   └── Float  (f32, f64)
//! ```
//!
//! Structural operations and products are generic over [`Scalar`];
//! anything that divides (determinant, inverse, negative powers) needs
//! [`Float`].

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Base trait for every matrix element type.
///
/// Integer matrices are supported for everything that does not need a
/// reciprocal, so products and powers of integer matrices stay exact.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Sum
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;
}

// ---------------------------------------------------------------------------
// Float
// ---------------------------------------------------------------------------

/// Trait for floating-point element types (`f32`, `f64`).
pub trait Float: Scalar {
    fn abs(self) -> Self;

    /// `1 / self`.
    fn recip(self) -> Self;
}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
        }

        impl Float for $ty {
            #[inline]
            fn abs(self) -> Self {
                <$ty>::abs(self)
            }
            #[inline]
            fn recip(self) -> Self {
                <$ty>::recip(self)
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
        }
    };
}

impl_scalar_int!(i32);
impl_scalar_int!(i64);
