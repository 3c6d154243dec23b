//! Blocked driver for the elimination kernels.
//!
//! [`BlockedElimination`] applies a kernel to a column range, splitting it
//! into disjoint column blocks of at most `threshold` columns once the range
//! is wider than the kernel's threshold. Blocks run on the rayon pool when the
//! `parallel` feature and [`KernelThresholds::parallel`] are both enabled.
//!
//! Every column update reads only the multiplier vector (and, for LDL, a
//! pivot captured before any column is written), so the blocked result is
//! identical to a single sequential [`ApplyCholesky::invoke`] or
//! [`ApplyLdl::invoke`].

use crate::{
    compute::elimination::{update_columns, ApplyCholesky, ApplyLdl, PanelKernel},
    config::thresholds::KernelThresholds,
    core::types::Element,
};
use log::debug;

/// Elimination driver that splits wide column ranges into blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockedElimination {
    thresholds: KernelThresholds,
}

impl BlockedElimination {
    /// Create a driver with the given thresholds.
    pub fn new(thresholds: KernelThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use.
    pub fn thresholds(&self) -> &KernelThresholds {
        &self.thresholds
    }

    /// Cholesky update of columns `[first_column, column_limit)`.
    ///
    /// Same contract as [`ApplyCholesky::invoke`].
    pub fn cholesky<T: Element>(
        &self,
        data: &mut [T],
        structure: usize,
        first_column: usize,
        column_limit: usize,
        multipliers: &[T],
    ) {
        self.run(&ApplyCholesky, data, structure, first_column, column_limit, multipliers);
    }

    /// LDL update of columns `[first_column, column_limit)`.
    ///
    /// Same contract as [`ApplyLdl::invoke`].
    pub fn ldl<T: Element>(
        &self,
        data: &mut [T],
        structure: usize,
        first_column: usize,
        column_limit: usize,
        multipliers: &[T],
        iteration_point: usize,
    ) {
        let kernel = ApplyLdl::pivot_at(data, structure, iteration_point);
        self.run(&kernel, data, structure, first_column, column_limit, multipliers);
    }

    /// Applies any panel kernel with this driver's blocking policy.
    pub fn run<T, K>(
        &self,
        kernel: &K,
        data: &mut [T],
        structure: usize,
        first_column: usize,
        column_limit: usize,
        multipliers: &[T],
    ) where
        T: Element,
        K: PanelKernel<T>,
    {
        let width = column_limit.saturating_sub(first_column);
        let block = kernel.threshold(&self.thresholds).max(1);

        if width <= block || structure == 0 {
            update_columns(kernel, data, structure, first_column, column_limit, multipliers);
            return;
        }

        debug!(
            "splitting {} columns into blocks of {} (parallel: {})",
            width,
            block,
            self.thresholds.parallel
        );

        let panel = &mut data[first_column * structure..column_limit * structure];
        if self.thresholds.parallel {
            run_blocks_parallel(kernel, panel, structure, first_column, block, multipliers);
        } else {
            run_blocks(kernel, panel, structure, first_column, block, multipliers);
        }
    }
}

fn run_blocks<T, K>(
    kernel: &K,
    panel: &mut [T],
    structure: usize,
    first_column: usize,
    block: usize,
    multipliers: &[T],
) where
    T: Element,
    K: PanelKernel<T>,
{
    for (index, columns) in panel.chunks_mut(block * structure).enumerate() {
        update_block(kernel, columns, structure, first_column + index * block, multipliers);
    }
}

#[cfg(feature = "parallel")]
fn run_blocks_parallel<T, K>(
    kernel: &K,
    panel: &mut [T],
    structure: usize,
    first_column: usize,
    block: usize,
    multipliers: &[T],
) where
    T: Element,
    K: PanelKernel<T>,
{
    use rayon::prelude::*;

    panel
        .par_chunks_mut(block * structure)
        .enumerate()
        .for_each(|(index, columns)| {
            update_block(kernel, columns, structure, first_column + index * block, multipliers);
        });
}

#[cfg(not(feature = "parallel"))]
fn run_blocks_parallel<T, K>(
    kernel: &K,
    panel: &mut [T],
    structure: usize,
    first_column: usize,
    block: usize,
    multipliers: &[T],
) where
    T: Element,
    K: PanelKernel<T>,
{
    run_blocks(kernel, panel, structure, first_column, block, multipliers);
}

#[inline]
fn update_block<T, K>(
    kernel: &K,
    columns: &mut [T],
    structure: usize,
    offset: usize,
    multipliers: &[T],
) where
    T: Element,
    K: PanelKernel<T>,
{
    for (k, column) in columns.chunks_mut(structure).enumerate() {
        kernel.update_column(column, offset + k, multipliers);
    }
}
