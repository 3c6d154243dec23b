//! Elimination kernels for triangular factorizations.
//!
//! Both kernels perform the trailing-panel rank-1 update of one elimination
//! step on a dense column-major buffer. Given the multiplier vector `l` of the
//! current pivot, every column `j` in `[first_column, column_limit)` receives
//! `buffer[j*structure + i] += scale(j) * l[i]` for the not yet eliminated rows
//! `i` in `j..structure`:
//!
//! - [`ApplyCholesky`]: `scale(j) = -conj(l[j])`
//! - [`ApplyLdl`]: `scale(j) = -(d * conj(l[j]))`, with `d` the pivot read
//!   from the diagonal at the iteration point
//!
//! The kernels are sequential and never split work. Splitting a column range
//! across tasks is the job of
//! [`BlockedElimination`](crate::compute::blocking::BlockedElimination), which
//! is also the only consumer of the kernel thresholds.

pub mod axpy;
pub mod cholesky;
pub mod ldl;

pub use axpy::axpy;
pub use cholesky::ApplyCholesky;
pub use ldl::{ApplyLdl, LdlPivot};

use crate::{config::thresholds::KernelThresholds, core::types::Element};

/// Per-column update shared by the elimination kernels.
pub trait PanelKernel<T: Element>: Sync {
    /// Column count above which a driver may split the update across tasks.
    fn threshold(&self, thresholds: &KernelThresholds) -> usize;

    /// Updates `column` (column `j` of the panel, `structure` entries long).
    fn update_column(&self, column: &mut [T], j: usize, multipliers: &[T]);
}

/// Runs `kernel` over columns `[first_column, column_limit)` of `data`.
pub(crate) fn update_columns<T, K>(
    kernel: &K,
    data: &mut [T],
    structure: usize,
    first_column: usize,
    column_limit: usize,
    multipliers: &[T],
) where
    T: Element,
    K: PanelKernel<T> + ?Sized,
{
    for j in first_column..column_limit {
        let start = j * structure;
        kernel.update_column(&mut data[start..start + structure], j, multipliers);
    }
}
