//! Sparse matrix storage and elimination kernels for triangular factorizations.
//!
//! This crate provides the numeric core a Cholesky or LDL factorization driver
//! builds on: a sparse two-dimensional store with per-row range acceleration,
//! sparse-times-dense multiplication, and the rank-1 panel updates applied at
//! every elimination step. Everything is generic over the element type, with
//! real, complex and arbitrary-precision decimal elements supported out of the
//! box.
//!
//! # Key Concepts
//!
//! - **Element store**: a sparse container keyed by a linear index
//! - **Sparse store**: 2-D coordinates over an element store, plus a per-row
//!   `[first, limit)` bound on occupied columns
//! - **Region views**: row/column/offset/limit/transpose remappings of a store
//! - **Elimination kernels**: trailing-panel rank-1 updates on dense
//!   column-major buffers
//!
//! # Modules
//!
//! - [`core`]: Error types, element trait and numeric kinds
//! - [`store`]: Element store, sparse store, access traits and region views
//! - [`compute`]: Multiplication strategies, elimination kernels, blocked driver
//! - [`config`]: Kernel thresholds

pub mod compute;
pub mod config;
pub mod core;
pub mod store;

// Re-export commonly used items at the crate root
pub use crate::core::error::{Result, StoreError};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use sparsefact_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compute::{
        ApplyCholesky, ApplyLdl, BlockedElimination, LdlPivot, MultiplyStrategy, PanelKernel,
    };
    pub use crate::config::{KernelThresholds, KernelThresholdsBuilder};
    pub use crate::core::{
        BigDecimal, Complex, Complex64, DMatrix, Element, NumericKind, Result, StoreError,
    };
    pub use crate::store::{
        ComplexSparseStore, DecimalSparseStore, ElementStore, MatrixSource, MatrixTarget,
        RealSparseStore, RegionView, Shape, SparseArray, SparseStore,
    };
}
