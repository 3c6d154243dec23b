//! Error types for sparse storage and elimination.
//!
//! The numeric core has no recoverable error class: every variant here
//! describes a caller contract violation. Hot-path operations panic with the
//! `Display` text of the matching variant, while the checked `try_*`
//! operations and `multiply` return it.

use crate::core::types::NumericKind;
use thiserror::Error;

/// Errors raised by sparse store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Row or column index outside the store's shape.
    #[error("{operation}: index ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Name of the operation that was called
        operation: &'static str,
        /// Offending row index
        row: usize,
        /// Offending column index
        col: usize,
        /// Number of rows of the store
        rows: usize,
        /// Number of columns of the store
        cols: usize,
    },

    /// Dimension mismatch between operands.
    ///
    /// This error occurs when a multiplication involves matrices with
    /// incompatible shapes.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// No multiplication strategy exists for the element kind.
    #[error("{operation} is not supported for {kind} elements")]
    UnsupportedKind {
        /// Name of the operation that was called
        operation: &'static str,
        /// Numeric kind of the store's elements
        kind: NumericKind,
    },
}

impl StoreError {
    /// Create an IndexOutOfBounds error.
    pub fn index_out_of_bounds(
        operation: &'static str,
        (row, col): (usize, usize),
        (rows, cols): (usize, usize),
    ) -> Self {
        Self::IndexOutOfBounds {
            operation,
            row,
            col,
            rows,
            cols,
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an UnsupportedKind error.
    pub fn unsupported_kind(operation: &'static str, kind: NumericKind) -> Self {
        Self::UnsupportedKind { operation, kind }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
