//! LDL-style panel update.

use super::{axpy, update_columns, PanelKernel};
use crate::{config::thresholds::KernelThresholds, core::types::Element};

/// Rank-1 trailing update of an LDL factorization step.
///
/// The multipliers are unit-lower-triangular coefficients, so the update is
/// scaled by the pivot `d` on the diagonal at the iteration point: column `j`
/// is reduced by `d * conj(l[j]) * l` over rows `j..structure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApplyLdl;

impl ApplyLdl {
    /// Default column threshold for splitting across tasks.
    pub const DEFAULT_THRESHOLD: usize = 256;

    /// Updates columns `[first_column, column_limit)` of `data` in place.
    ///
    /// The pivot is read once, from
    /// `data[iteration_point + iteration_point * structure]`, before any
    /// column is touched.
    ///
    /// # Panics
    ///
    /// Panics if the pivot or a column lies outside `data`, or `multipliers`
    /// is shorter than `structure`.
    pub fn invoke<T: Element>(
        data: &mut [T],
        structure: usize,
        first_column: usize,
        column_limit: usize,
        multipliers: &[T],
        iteration_point: usize,
    ) {
        let kernel = Self::pivot_at(data, structure, iteration_point);
        update_columns(&kernel, data, structure, first_column, column_limit, multipliers);
    }

    /// Kernel bound to the pivot on the diagonal at `iteration_point`.
    pub fn pivot_at<T: Element>(data: &[T], structure: usize, iteration_point: usize) -> LdlPivot<T> {
        LdlPivot {
            pivot: data[iteration_point + iteration_point * structure].clone(),
        }
    }
}

/// LDL update bound to a pivot value.
#[derive(Debug, Clone, PartialEq)]
pub struct LdlPivot<T: Element> {
    pivot: T,
}

impl<T: Element> LdlPivot<T> {
    /// Kernel for an explicit pivot value.
    pub fn new(pivot: T) -> Self {
        Self { pivot }
    }

    /// The pivot this kernel scales by.
    pub fn pivot(&self) -> &T {
        &self.pivot
    }
}

impl<T: Element> PanelKernel<T> for LdlPivot<T> {
    fn threshold(&self, thresholds: &KernelThresholds) -> usize {
        thresholds.ldl
    }

    #[inline]
    fn update_column(&self, column: &mut [T], j: usize, multipliers: &[T]) {
        let scale = -(self.pivot.clone() * multipliers[j].conjugate());
        let structure = column.len();
        axpy(column, &scale, multipliers, j, structure);
    }
}
