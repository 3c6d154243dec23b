//! Region views over a sparse store.
//!
//! A [`RegionView`] forwards reads and writes to the store it borrows through
//! an [`IndexMap`] that turns view coordinates into store coordinates. Views
//! share the store's multiplication strategy but keep no range cache of their
//! own.

use crate::{
    core::{
        error::{Result, StoreError},
        types::Element,
    },
    store::{
        access::{MatrixSource, MatrixTarget, Shape},
        element_store::ElementStore,
        sparse_store::SparseStore,
    },
};

/// Coordinate remapping from a view onto its underlying store.
pub trait IndexMap {
    /// Shape of the view over a store of shape `(rows, cols)`.
    fn shape(&self, rows: usize, cols: usize) -> (usize, usize);

    /// Store coordinates of view cell `(row, col)`.
    fn map(&self, row: usize, col: usize) -> (usize, usize);
}

/// Selected subset of rows, in the given order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSelection(Vec<usize>);

impl IndexMap for RowSelection {
    fn shape(&self, _rows: usize, cols: usize) -> (usize, usize) {
        (self.0.len(), cols)
    }

    #[inline]
    fn map(&self, row: usize, col: usize) -> (usize, usize) {
        (self.0[row], col)
    }
}

/// Selected subset of columns, in the given order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection(Vec<usize>);

impl IndexMap for ColumnSelection {
    fn shape(&self, rows: usize, _cols: usize) -> (usize, usize) {
        (rows, self.0.len())
    }

    #[inline]
    fn map(&self, row: usize, col: usize) -> (usize, usize) {
        (row, self.0[col])
    }
}

/// Origin moved to `(row_offset, col_offset)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offsets {
    row_offset: usize,
    col_offset: usize,
}

impl IndexMap for Offsets {
    fn shape(&self, rows: usize, cols: usize) -> (usize, usize) {
        (
            rows.saturating_sub(self.row_offset),
            cols.saturating_sub(self.col_offset),
        )
    }

    #[inline]
    fn map(&self, row: usize, col: usize) -> (usize, usize) {
        (row + self.row_offset, col + self.col_offset)
    }
}

/// Extent truncated to `row_limit × col_limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    row_limit: usize,
    col_limit: usize,
}

impl IndexMap for Limits {
    fn shape(&self, rows: usize, cols: usize) -> (usize, usize) {
        (self.row_limit.min(rows), self.col_limit.min(cols))
    }

    #[inline]
    fn map(&self, row: usize, col: usize) -> (usize, usize) {
        (row, col)
    }
}

/// Rows and columns swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transposition;

impl IndexMap for Transposition {
    fn shape(&self, rows: usize, cols: usize) -> (usize, usize) {
        (cols, rows)
    }

    #[inline]
    fn map(&self, row: usize, col: usize) -> (usize, usize) {
        (col, row)
    }
}

/// Read/write view of a sparse store through an index remapping.
#[derive(Debug)]
pub struct RegionView<'a, T: Element, S: ElementStore<T>, M: IndexMap> {
    base: &'a mut SparseStore<T, S>,
    map: M,
    rows: usize,
    cols: usize,
}

impl<'a, T: Element, S: ElementStore<T>, M: IndexMap> RegionView<'a, T, S, M> {
    fn new(base: &'a mut SparseStore<T, S>, map: M) -> Self {
        let (rows, cols) = map.shape(base.rows(), base.cols());
        Self {
            base,
            map,
            rows,
            cols,
        }
    }

    /// Number of rows of the view.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns of the view.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The index remapping of this view.
    pub fn index_map(&self) -> &M {
        &self.map
    }

    /// Value at view cell `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the index is outside the view's shape.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        let (r, c) = self.locate("get", row, col);
        self.base.get(r, c)
    }

    /// Overwrites view cell `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let (r, c) = self.locate("set", row, col);
        self.base.set(r, c, value);
    }

    /// Adds `delta` to view cell `(row, col)`.
    #[inline]
    pub fn add(&mut self, row: usize, col: usize, delta: T) {
        let (r, c) = self.locate("add", row, col);
        self.base.add(r, c, delta);
    }

    /// Computes `self × right` into `target` with the store's strategy.
    pub fn multiply<R, G>(&self, right: &R, target: &mut G) -> Result<()>
    where
        R: MatrixSource<T> + ?Sized,
        G: MatrixTarget<T> + ?Sized,
    {
        let strategy = self
            .base
            .multiplier()
            .ok_or_else(|| StoreError::unsupported_kind("multiply", T::KIND))?;
        strategy.invoke(self, right, target)
    }

    #[inline]
    fn locate(&self, operation: &'static str, row: usize, col: usize) -> (usize, usize) {
        if row >= self.rows || col >= self.cols {
            panic!(
                "{}",
                StoreError::index_out_of_bounds(operation, (row, col), (self.rows, self.cols))
            );
        }
        self.map.map(row, col)
    }
}

impl<T: Element, S: ElementStore<T>, M: IndexMap> Shape for RegionView<'_, T, S, M> {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }
}

impl<T: Element, S: ElementStore<T>, M: IndexMap> MatrixSource<T> for RegionView<'_, T, S, M> {
    #[inline]
    fn value(&self, row: usize, col: usize) -> T {
        self.get(row, col)
    }
}

impl<T: Element, S: ElementStore<T>, M: IndexMap> MatrixTarget<T> for RegionView<'_, T, S, M> {
    fn reset(&mut self) {
        for col in 0..self.cols {
            for row in 0..self.rows {
                let (r, c) = self.map.map(row, col);
                if !self.base.get(r, c).is_zero() {
                    self.base.set(r, c, T::zero());
                }
            }
        }
    }

    #[inline]
    fn accumulate(&mut self, row: usize, col: usize, delta: T) {
        self.add(row, col, delta);
    }
}

impl<T: Element, S: ElementStore<T>> SparseStore<T, S> {
    /// View of the selected rows, in the given order.
    ///
    /// # Panics
    ///
    /// Panics if a selected row is outside the store.
    pub fn by_rows(&mut self, rows: &[usize]) -> RegionView<'_, T, S, RowSelection> {
        if let Some(&row) = rows.iter().find(|&&row| row >= self.rows()) {
            panic!(
                "{}",
                StoreError::index_out_of_bounds("by_rows", (row, 0), (self.rows(), self.cols()))
            );
        }
        RegionView::new(self, RowSelection(rows.to_vec()))
    }

    /// View of the selected columns, in the given order.
    ///
    /// # Panics
    ///
    /// Panics if a selected column is outside the store.
    pub fn by_columns(&mut self, columns: &[usize]) -> RegionView<'_, T, S, ColumnSelection> {
        if let Some(&col) = columns.iter().find(|&&col| col >= self.cols()) {
            panic!(
                "{}",
                StoreError::index_out_of_bounds("by_columns", (0, col), (self.rows(), self.cols()))
            );
        }
        RegionView::new(self, ColumnSelection(columns.to_vec()))
    }

    /// View whose origin is store cell `(row_offset, col_offset)`.
    pub fn by_offsets(
        &mut self,
        row_offset: usize,
        col_offset: usize,
    ) -> RegionView<'_, T, S, Offsets> {
        RegionView::new(
            self,
            Offsets {
                row_offset,
                col_offset,
            },
        )
    }

    /// View truncated to the first `row_limit` rows and `col_limit` columns.
    pub fn by_limits(&mut self, row_limit: usize, col_limit: usize) -> RegionView<'_, T, S, Limits> {
        RegionView::new(
            self,
            Limits {
                row_limit,
                col_limit,
            },
        )
    }

    /// Transposed view.
    pub fn by_transposition(&mut self) -> RegionView<'_, T, S, Transposition> {
        RegionView::new(self, Transposition)
    }
}
