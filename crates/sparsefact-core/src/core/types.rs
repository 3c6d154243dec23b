//! Element types and numeric kinds.
//!
//! This module provides the arithmetic capability set shared by the sparse
//! store and the elimination kernels, along with the numeric-kind tag used to
//! pick a multiplication strategy once, at construction time.

use nalgebra::{Dyn, OMatrix, Scalar as NalgebraScalar};
use num_traits::Zero;
use std::fmt::{self, Display};
use std::ops::{Mul, Neg, Sub};

pub use bigdecimal::BigDecimal;
pub use num_complex::{Complex, Complex64};

/// Arithmetic family an element type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// Native floating point (`f32`, `f64`).
    Real,
    /// Complex numbers over native floating point.
    Complex,
    /// Arbitrary-precision decimal.
    Decimal,
    /// Any other element type. No multiplication strategy exists for it.
    Other,
}

impl Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericKind::Real => "real",
            NumericKind::Complex => "complex",
            NumericKind::Decimal => "decimal",
            NumericKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// Trait for element types stored in a sparse store or a dense panel.
///
/// Only the operations the store and the kernels actually need are required:
/// zero and zero-testing, addition, subtraction, multiplication, negation and
/// conjugation. Conjugation is the identity for every non-complex kind.
pub trait Element:
    NalgebraScalar
    + Zero
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
{
    /// Arithmetic family of this element type.
    const KIND: NumericKind;

    /// Complex conjugate (identity for real and decimal kinds).
    fn conjugate(&self) -> Self;
}

impl Element for f64 {
    const KIND: NumericKind = NumericKind::Real;

    #[inline]
    fn conjugate(&self) -> Self {
        *self
    }
}

impl Element for f32 {
    const KIND: NumericKind = NumericKind::Real;

    #[inline]
    fn conjugate(&self) -> Self {
        *self
    }
}

impl Element for Complex<f64> {
    const KIND: NumericKind = NumericKind::Complex;

    #[inline]
    fn conjugate(&self) -> Self {
        self.conj()
    }
}

impl Element for Complex<f32> {
    const KIND: NumericKind = NumericKind::Complex;

    #[inline]
    fn conjugate(&self) -> Self {
        self.conj()
    }
}

impl Element for BigDecimal {
    const KIND: NumericKind = NumericKind::Decimal;

    #[inline]
    fn conjugate(&self) -> Self {
        self.clone()
    }
}

/// Type alias for a dynamically-sized dense matrix (column-major).
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_numeric_kinds() {
        assert_eq!(<f64 as Element>::KIND, NumericKind::Real);
        assert_eq!(<f32 as Element>::KIND, NumericKind::Real);
        assert_eq!(<Complex64 as Element>::KIND, NumericKind::Complex);
        assert_eq!(<BigDecimal as Element>::KIND, NumericKind::Decimal);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NumericKind::Real.to_string(), "real");
        assert_eq!(NumericKind::Complex.to_string(), "complex");
        assert_eq!(NumericKind::Decimal.to_string(), "decimal");
        assert_eq!(NumericKind::Other.to_string(), "other");
    }

    #[test]
    fn test_conjugate() {
        assert_eq!(2.5_f64.conjugate(), 2.5);

        let z = Complex64::new(1.0, -2.0);
        assert_eq!(z.conjugate(), Complex64::new(1.0, 2.0));

        let d = BigDecimal::from_str("1.25").unwrap();
        assert_eq!(d.conjugate(), d);
    }

    #[test]
    fn test_zero() {
        assert!(<f64 as Zero>::zero().is_zero());
        assert!(Complex64::zero().is_zero());
        assert!(BigDecimal::zero().is_zero());
        assert!(!BigDecimal::from_str("0.001").unwrap().is_zero());
    }
}
