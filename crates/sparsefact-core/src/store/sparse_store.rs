//! Sparse matrix store with per-row range acceleration.
//!
//! A [`SparseStore`] maps `(row, col)` onto the linear index
//! `row + col * rows` of an [`ElementStore`] and keeps, for every row, the
//! smallest and one-past-largest column ever written. That range is an outer
//! bound: it widens on every write and is only reset by [`SparseStore::clear`],
//! so row-scoped scans can skip columns that were never touched without the
//! cost of re-tightening the bound when a cell goes back to zero.
//!
//! Columns have no cache. Column ranges are answered by a range query on the
//! element store over the column's contiguous index block.
//!
//! # Example
//!
//! ```
//! use sparsefact_core::prelude::*;
//!
//! let mut a = SparseStore::<f64>::new(3, 4);
//! a.set(1, 2, 5.0);
//! a.add(1, 0, 1.0);
//!
//! assert_eq!(a.first_in_row(1), 0);
//! assert_eq!(a.limit_of_row(1), 3);
//! assert_eq!(a.get(1, 2), 5.0);
//! assert_eq!(a.nnz(), 2);
//! ```

use crate::{
    compute::multiply::MultiplyStrategy,
    core::{
        error::{Result, StoreError},
        types::{BigDecimal, Complex64, DMatrix, Element},
    },
    store::{
        access::{Entries, MatrixSource, MatrixTarget, Shape},
        element_store::{ElementStore, SparseArray},
    },
};
use log::trace;
use std::marker::PhantomData;
use std::ops::Range;

/// Sparse store over real elements.
pub type RealSparseStore = SparseStore<f64>;

/// Sparse store over complex elements.
pub type ComplexSparseStore = SparseStore<Complex64>;

/// Sparse store over arbitrary-precision decimal elements.
pub type DecimalSparseStore = SparseStore<BigDecimal>;

/// Sparse two-dimensional matrix over an element store.
#[derive(Debug, Clone)]
pub struct SparseStore<T: Element, S = SparseArray<T>> {
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
    /// Stored elements, keyed by `row + col * rows`
    elements: S,
    /// Smallest column written per row (`cols` when the row is empty)
    row_first: Vec<usize>,
    /// One past the largest column written per row (`0` when the row is empty)
    row_limit: Vec<usize>,
    /// Multiplication strategy for the element kind
    multiplier: Option<MultiplyStrategy>,
    _element: PhantomData<T>,
}

impl<T: Element> SparseStore<T> {
    /// Creates an empty `rows × cols` store.
    ///
    /// The element store is pre-sized for `rows + cols` nonzeros.
    pub fn new(rows: usize, cols: usize) -> Self {
        let count = linear_count(rows, cols);
        Self::with_elements(rows, cols, SparseArray::with_capacity(count, rows + cols))
    }

    /// Builds a store from `(row, col, value)` triplets.
    ///
    /// Duplicate coordinates are summed.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` for the first triplet outside the shape.
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut store = Self::new(rows, cols);
        for (row, col, value) in triplets {
            store.try_add(row, col, value)?;
        }
        Ok(store)
    }
}

impl<T: Element, S: ElementStore<T>> SparseStore<T, S> {
    /// Creates a store over an existing element store.
    ///
    /// The row ranges are rebuilt from whatever `elements` already holds.
    pub fn with_elements(rows: usize, cols: usize, elements: S) -> Self {
        let multiplier = MultiplyStrategy::for_kind(T::KIND);
        trace!(
            "sparse store {}x{} of {} elements, multiply strategy {:?}",
            rows,
            cols,
            T::KIND,
            multiplier
        );

        let mut store = Self {
            rows,
            cols,
            elements,
            row_first: vec![cols; rows],
            row_limit: vec![0; rows],
            multiplier,
            _element: PhantomData,
        };
        store.rebuild_ranges();
        store
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.elements.len()
    }

    /// The underlying element store.
    #[inline]
    pub fn elements(&self) -> &S {
        &self.elements
    }

    /// Multiplication strategy selected for the element kind.
    #[inline]
    pub fn multiplier(&self) -> Option<MultiplyStrategy> {
        self.multiplier
    }

    /// Value at `(row, col)`, zero when nothing is stored.
    ///
    /// # Panics
    ///
    /// Panics if the index is outside the store's shape.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        let index = self.index("get", row, col);
        self.elements.get(index)
    }

    /// Overwrites the cell at `(row, col)`.
    ///
    /// The row range widens to include `col` even when `value` is zero.
    ///
    /// # Panics
    ///
    /// Panics if the index is outside the store's shape.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let index = self.index("set", row, col);
        self.elements.set(index, value);
        self.update_range(row, col);
    }

    /// Adds `delta` to the cell at `(row, col)`.
    ///
    /// A zero `delta` leaves both the elements and the row range untouched.
    ///
    /// # Panics
    ///
    /// Panics if the index is outside the store's shape.
    #[inline]
    pub fn add(&mut self, row: usize, col: usize, delta: T) {
        let index = self.index("add", row, col);
        if delta.is_zero() {
            return;
        }
        self.elements.add(index, delta);
        self.update_range(row, col);
    }

    /// Same as [`set`](Self::set).
    #[inline]
    pub fn fill_one(&mut self, row: usize, col: usize, value: T) {
        self.set(row, col, value);
    }

    /// Replaces the cell at `(row, col)` with `modifier` applied to it.
    pub fn modify_one<F>(&mut self, row: usize, col: usize, modifier: F)
    where
        F: FnOnce(&T) -> T,
    {
        let current = self.get(row, col);
        self.set(row, col, modifier(&current));
    }

    /// Applies `modifier` to every cell, zero cells included.
    ///
    /// Cells that are zero before and after are not written.
    pub fn modify_all<F>(&mut self, mut modifier: F)
    where
        F: FnMut(&T) -> T,
    {
        for col in 0..self.cols {
            for row in 0..self.rows {
                let current = self.get(row, col);
                let modified = modifier(&current);
                if !(current.is_zero() && modified.is_zero()) {
                    self.set(row, col, modified);
                }
            }
        }
    }

    /// Combines each cell with the matching cell of `left` as `function(left, self)`.
    ///
    /// Cells are paired by linear index in column-major order, over the
    /// smaller of the two element counts. Cells that are zero before and after
    /// are not written.
    pub fn modify_matching_left<L, F>(&mut self, left: &L, mut function: F)
    where
        L: MatrixSource<T> + ?Sized,
        F: FnMut(&T, &T) -> T,
    {
        self.modify_matching(left, |mine, other| function(other, mine));
    }

    /// Combines each cell with the matching cell of `right` as `function(self, right)`.
    ///
    /// Same pairing as [`modify_matching_left`](Self::modify_matching_left).
    pub fn modify_matching_right<R, F>(&mut self, right: &R, mut function: F)
    where
        R: MatrixSource<T> + ?Sized,
        F: FnMut(&T, &T) -> T,
    {
        self.modify_matching(right, |mine, other| function(mine, other));
    }

    /// Overwrites the store with `left × right`, using this store's strategy.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedKind` when the element kind has no multiplication
    /// strategy, and `DimensionMismatch` unless the store is
    /// `left.rows() × right.cols()` and `right.rows() == left.cols()`.
    pub fn fill_by_multiplying<L, R>(&mut self, left: &L, right: &R) -> Result<()>
    where
        L: MatrixSource<T> + ?Sized,
        R: MatrixSource<T> + ?Sized,
    {
        let strategy = self
            .multiplier
            .ok_or_else(|| StoreError::unsupported_kind("fill_by_multiplying", T::KIND))?;
        strategy.invoke(left, right, self)
    }

    /// Removes every entry and resets all row ranges to empty.
    pub fn clear(&mut self) {
        self.elements.reset();
        self.row_first.fill(self.cols);
        self.row_limit.fill(0);
    }

    /// Smallest column that may hold a nonzero in `row` (`cols` if none).
    #[inline]
    pub fn first_in_row(&self, row: usize) -> usize {
        self.row_first[self.row_index("first_in_row", row)]
    }

    /// One past the largest column that may hold a nonzero in `row` (`0` if none).
    #[inline]
    pub fn limit_of_row(&self, row: usize) -> usize {
        self.row_limit[self.row_index("limit_of_row", row)]
    }

    /// First row holding an entry in `col` (`rows` if the column is empty).
    pub fn first_in_column(&self, col: usize) -> usize {
        let (first, limit) = self.column_block("first_in_column", col);
        let found = self.elements.first_in_range(first, limit);
        if found == limit {
            self.rows
        } else {
            found % self.rows
        }
    }

    /// One past the last row holding an entry in `col` (`0` if the column is empty).
    pub fn limit_of_column(&self, col: usize) -> usize {
        let (first, limit) = self.column_block("limit_of_column", col);
        let found = self.elements.limit_of_range(first, limit);
        if found == first {
            0
        } else if found == limit {
            self.rows
        } else {
            found % self.rows
        }
    }

    /// Stored entries as `(row, col, value)`, in column-major order.
    ///
    /// Each call starts a fresh scan over the live contents. The iterator
    /// borrows the store, so it cannot be mutated while a scan is in flight.
    pub fn nonzeros(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let rows = self.rows;
        self.elements
            .nonzeros_in(0, linear_count(self.rows, self.cols))
            .map(move |(index, value)| (index % rows, index / rows, value))
    }

    /// Computes `self × right` into `target`, overwriting its contents.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedKind` when the element kind has no multiplication
    /// strategy, and `DimensionMismatch` for incompatible shapes.
    pub fn multiply<R, G>(&self, right: &R, target: &mut G) -> Result<()>
    where
        R: MatrixSource<T> + ?Sized,
        G: MatrixTarget<T> + ?Sized,
    {
        let strategy = self
            .multiplier
            .ok_or_else(|| StoreError::unsupported_kind("multiply", T::KIND))?;
        strategy.invoke(self, right, target)
    }

    /// Copies the store into a dense matrix.
    pub fn to_dense(&self) -> DMatrix<T> {
        let mut dense = DMatrix::from_element(self.rows, self.cols, T::zero());
        for (row, col, value) in self.nonzeros() {
            dense[(row, col)] = value.clone();
        }
        dense
    }

    /// Checked [`get`](Self::get).
    pub fn try_get(&self, row: usize, col: usize) -> Result<T> {
        self.check("get", row, col)?;
        Ok(self.get(row, col))
    }

    /// Checked [`set`](Self::set).
    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        self.check("set", row, col)?;
        self.set(row, col, value);
        Ok(())
    }

    /// Checked [`add`](Self::add).
    pub fn try_add(&mut self, row: usize, col: usize, delta: T) -> Result<()> {
        self.check("add", row, col)?;
        self.add(row, col, delta);
        Ok(())
    }

    #[inline]
    fn check(&self, operation: &'static str, row: usize, col: usize) -> Result<()> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(StoreError::index_out_of_bounds(
                operation,
                (row, col),
                (self.rows, self.cols),
            ))
        }
    }

    #[inline]
    fn index(&self, operation: &'static str, row: usize, col: usize) -> usize {
        if let Err(err) = self.check(operation, row, col) {
            panic!("{}", err);
        }
        row + col * self.rows
    }

    #[inline]
    fn row_index(&self, operation: &'static str, row: usize) -> usize {
        if row >= self.rows {
            panic!(
                "{}",
                StoreError::index_out_of_bounds(operation, (row, 0), (self.rows, self.cols))
            );
        }
        row
    }

    /// Pairs every cell with the same linear index of `other`.
    fn modify_matching<O, F>(&mut self, other: &O, mut combine: F)
    where
        O: MatrixSource<T> + ?Sized,
        F: FnMut(&T, &T) -> T,
    {
        let other_rows = other.rows();
        let limit = linear_count(self.rows, self.cols)
            .min(linear_count(other_rows, other.cols()));
        for index in 0..limit {
            let (row, col) = (index % self.rows, index / self.rows);
            let current = self.get(row, col);
            let paired = other.value(index % other_rows, index / other_rows);
            let combined = combine(&current, &paired);
            if !(current.is_zero() && combined.is_zero()) {
                self.set(row, col, combined);
            }
        }
    }

    fn column_block(&self, operation: &'static str, col: usize) -> (usize, usize) {
        if col >= self.cols {
            panic!(
                "{}",
                StoreError::index_out_of_bounds(operation, (0, col), (self.rows, self.cols))
            );
        }
        let first = col * self.rows;
        (first, first + self.rows)
    }

    #[inline]
    fn update_range(&mut self, row: usize, col: usize) {
        self.row_first[row] = self.row_first[row].min(col);
        self.row_limit[row] = self.row_limit[row].max(col + 1);
    }

    fn rebuild_ranges(&mut self) {
        if self.elements.is_empty() {
            return;
        }
        let rows = self.rows;
        let occupied: Vec<(usize, usize)> = self
            .elements
            .nonzeros_in(0, linear_count(self.rows, self.cols))
            .map(|(index, _)| (index % rows, index / rows))
            .collect();
        for (row, col) in occupied {
            self.update_range(row, col);
        }
    }
}

impl<T: Element, S: ElementStore<T>> Shape for SparseStore<T, S> {
    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn cols(&self) -> usize {
        self.cols
    }
}

impl<T: Element, S: ElementStore<T>> MatrixSource<T> for SparseStore<T, S> {
    #[inline]
    fn value(&self, row: usize, col: usize) -> T {
        self.get(row, col)
    }

    #[inline]
    fn row_range(&self, row: usize) -> Range<usize> {
        self.first_in_row(row)..self.limit_of_row(row)
    }

    fn nonzero_entries(&self) -> Entries<'_, T> {
        Box::new(
            self.nonzeros()
                .map(|(row, col, value)| (row, col, value.clone())),
        )
    }
}

impl<T: Element, S: ElementStore<T>> MatrixTarget<T> for SparseStore<T, S> {
    #[inline]
    fn reset(&mut self) {
        self.clear();
    }

    #[inline]
    fn accumulate(&mut self, row: usize, col: usize, delta: T) {
        self.add(row, col, delta);
    }
}

fn linear_count(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(count) => count,
        None => panic!("sparse store shape {}x{} overflows the index space", rows, cols),
    }
}
