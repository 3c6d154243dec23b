//! Two-dimensional read and accumulate contracts.
//!
//! Multiplication is written against these traits rather than concrete types,
//! so that sparse stores, region views and dense `nalgebra` matrices can be
//! mixed freely as left operand, right operand and target.

use crate::core::types::{DMatrix, Element};
use std::ops::Range;

/// Iterator over `(row, col, value)` triples.
pub type Entries<'a, T> = Box<dyn Iterator<Item = (usize, usize, T)> + 'a>;

/// Shape of a two-dimensional structure.
pub trait Shape {
    /// Number of rows.
    fn rows(&self) -> usize;

    /// Number of columns.
    fn cols(&self) -> usize;
}

/// Read access to a matrix.
pub trait MatrixSource<T: Element>: Shape {
    /// Value at `(row, col)`.
    fn value(&self, row: usize, col: usize) -> T;

    /// Columns of `row` that may hold nonzeros.
    ///
    /// Structures without a row-range accelerator report the full width.
    fn row_range(&self, _row: usize) -> Range<usize> {
        0..self.cols()
    }

    /// Nonzero cells in column-major order.
    fn nonzero_entries(&self) -> Entries<'_, T> {
        let (rows, cols) = (self.rows(), self.cols());
        Box::new(
            (0..cols)
                .flat_map(move |col| (0..rows).map(move |row| (row, col, self.value(row, col))))
                .filter(|(_, _, value)| !value.is_zero()),
        )
    }
}

/// Accumulating write access to a matrix.
pub trait MatrixTarget<T: Element>: Shape {
    /// Sets every cell to zero.
    ///
    /// Sparse targets clear their storage, dense targets fill with zero.
    fn reset(&mut self);

    /// Adds `delta` to the cell at `(row, col)`.
    fn accumulate(&mut self, row: usize, col: usize, delta: T);
}

impl<T: Element> Shape for DMatrix<T> {
    #[inline]
    fn rows(&self) -> usize {
        self.nrows()
    }

    #[inline]
    fn cols(&self) -> usize {
        self.ncols()
    }
}

impl<T: Element> MatrixSource<T> for DMatrix<T> {
    #[inline]
    fn value(&self, row: usize, col: usize) -> T {
        self[(row, col)].clone()
    }
}

impl<T: Element> MatrixTarget<T> for DMatrix<T> {
    fn reset(&mut self) {
        self.fill(T::zero());
    }

    #[inline]
    fn accumulate(&mut self, row: usize, col: usize, delta: T) {
        let cell = &mut self[(row, col)];
        *cell = cell.clone() + delta;
    }
}
