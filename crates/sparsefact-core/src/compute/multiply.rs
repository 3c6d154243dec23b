//! Matrix multiplication strategies.
//!
//! A store picks its strategy once, from the numeric kind of its elements.
//! Real elements get the row-scaling algorithm, where each stored nonzero
//! `(row, col, v)` of the left operand adds `v` times row `col` of the right
//! operand into row `row` of the target. Its cost is proportional to
//! `nnz(left)` times the average occupied width of the right operand's rows,
//! independent of the left operand's full size. Complex and decimal elements
//! use a plain dense triple loop.

use crate::{
    core::{
        error::{Result, StoreError},
        types::{Element, NumericKind},
    },
    store::access::{MatrixSource, MatrixTarget},
};
use log::trace;

/// Algorithm used to compute `left × right` into a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplyStrategy {
    /// Sparse-times-dense row scaling driven by the left operand's nonzeros.
    RowScaling,
    /// Dense triple loop over every cell.
    Dense,
}

impl MultiplyStrategy {
    /// Strategy for a numeric kind, or `None` when the kind has none.
    pub fn for_kind(kind: NumericKind) -> Option<Self> {
        match kind {
            NumericKind::Real => Some(MultiplyStrategy::RowScaling),
            NumericKind::Complex | NumericKind::Decimal => Some(MultiplyStrategy::Dense),
            NumericKind::Other => None,
        }
    }

    /// Computes `left × right` into `target`, overwriting its contents.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` when `right.rows() != left.cols()` or the
    /// target is not `left.rows() × right.cols()`.
    pub fn invoke<T, L, R, G>(self, left: &L, right: &R, target: &mut G) -> Result<()>
    where
        T: Element,
        L: MatrixSource<T> + ?Sized,
        R: MatrixSource<T> + ?Sized,
        G: MatrixTarget<T> + ?Sized,
    {
        check_shapes(left, right, target)?;
        trace!(
            "{:?} multiply: {}x{} by {}x{}",
            self,
            left.rows(),
            left.cols(),
            right.rows(),
            right.cols()
        );

        target.reset();
        match self {
            MultiplyStrategy::RowScaling => multiply_row_scaling(left, right, target),
            MultiplyStrategy::Dense => multiply_dense(left, right, target),
        }
        Ok(())
    }
}

fn check_shapes<T, L, R, G>(left: &L, right: &R, target: &G) -> Result<()>
where
    T: Element,
    L: MatrixSource<T> + ?Sized,
    R: MatrixSource<T> + ?Sized,
    G: MatrixTarget<T> + ?Sized,
{
    if right.rows() != left.cols() {
        return Err(StoreError::dimension_mismatch(
            format!("right operand with {} rows", left.cols()),
            format!("right operand with {} rows", right.rows()),
        ));
    }

    if target.rows() != left.rows() || target.cols() != right.cols() {
        return Err(StoreError::dimension_mismatch(
            format!("target of shape ({}, {})", left.rows(), right.cols()),
            format!("target of shape ({}, {})", target.rows(), target.cols()),
        ));
    }

    Ok(())
}

fn multiply_row_scaling<T, L, R, G>(left: &L, right: &R, target: &mut G)
where
    T: Element,
    L: MatrixSource<T> + ?Sized,
    R: MatrixSource<T> + ?Sized,
    G: MatrixTarget<T> + ?Sized,
{
    for (row, col, value) in left.nonzero_entries() {
        for j in right.row_range(col) {
            target.accumulate(row, j, value.clone() * right.value(col, j));
        }
    }
}

fn multiply_dense<T, L, R, G>(left: &L, right: &R, target: &mut G)
where
    T: Element,
    L: MatrixSource<T> + ?Sized,
    R: MatrixSource<T> + ?Sized,
    G: MatrixTarget<T> + ?Sized,
{
    let inner = left.cols();
    for j in 0..right.cols() {
        for i in 0..left.rows() {
            let mut sum = T::zero();
            for k in 0..inner {
                sum = sum + left.value(i, k) * right.value(k, j);
            }
            target.accumulate(i, j, sum);
        }
    }
}
