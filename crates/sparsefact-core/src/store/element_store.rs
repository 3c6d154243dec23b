//! Linear-index element storage.
//!
//! [`ElementStore`] is the only capability the sparse matrix store builds on:
//! a sparse container keyed by a single linear index. [`SparseArray`] is the
//! implementation used by default, keeping sorted index and value vectors side
//! by side so that range queries are binary searches and nonzero scans are
//! slice walks.

use crate::core::types::Element;

/// Iterator over `(linear_index, value)` pairs of stored entries.
pub type Nonzeros<'a, T> = Box<dyn Iterator<Item = (usize, &'a T)> + 'a>;

/// Sparse container keyed by a linear index.
///
/// Absent entries read as zero. Writing zero deletes the entry.
pub trait ElementStore<T: Element> {
    /// Value at `index`, or zero when nothing is stored there.
    fn get(&self, index: usize) -> T;

    /// Overwrites the entry at `index`.
    fn set(&mut self, index: usize, value: T);

    /// Adds `addend` to the entry at `index` in place.
    fn add(&mut self, index: usize, addend: T);

    /// Removes every stored entry.
    fn reset(&mut self);

    /// Number of stored entries.
    fn len(&self) -> usize;

    /// Returns `true` when nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First stored index in `[first, limit)`, or `limit` when the range is empty.
    fn first_in_range(&self, first: usize, limit: usize) -> usize;

    /// One past the last stored index in `[first, limit)`, or `first` when the
    /// range is empty.
    fn limit_of_range(&self, first: usize, limit: usize) -> usize;

    /// Stored entries in `[first, limit)`, in increasing index order.
    fn nonzeros_in(&self, first: usize, limit: usize) -> Nonzeros<'_, T>;
}

/// Sorted-vector sparse array.
#[derive(Debug, Clone)]
pub struct SparseArray<T: Element> {
    /// Logical length (number of addressable indices)
    count: usize,
    /// Stored indices, strictly increasing
    indices: Vec<usize>,
    /// Values aligned with `indices`
    values: Vec<T>,
}

impl<T: Element> SparseArray<T> {
    /// Creates an empty array addressing `count` indices.
    pub fn new(count: usize) -> Self {
        Self::with_capacity(count, 0)
    }

    /// Creates an empty array with room for `initial` entries before reallocating.
    pub fn with_capacity(count: usize, initial: usize) -> Self {
        Self {
            count,
            indices: Vec::with_capacity(initial),
            values: Vec::with_capacity(initial),
        }
    }

    /// Logical length of the array.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of entries that fit without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.indices.capacity()
    }

    #[inline]
    fn position(&self, index: usize) -> Result<usize, usize> {
        assert!(
            index < self.count,
            "sparse array index {} out of bounds for length {}",
            index,
            self.count
        );
        self.indices.binary_search(&index)
    }

    #[inline]
    fn remove_at(&mut self, position: usize) {
        self.indices.remove(position);
        self.values.remove(position);
    }

    #[inline]
    fn insert_at(&mut self, position: usize, index: usize, value: T) {
        self.indices.insert(position, index);
        self.values.insert(position, value);
    }
}

impl<T: Element> ElementStore<T> for SparseArray<T> {
    fn get(&self, index: usize) -> T {
        match self.position(index) {
            Ok(position) => self.values[position].clone(),
            Err(_) => T::zero(),
        }
    }

    fn set(&mut self, index: usize, value: T) {
        match self.position(index) {
            Ok(position) if value.is_zero() => self.remove_at(position),
            Ok(position) => self.values[position] = value,
            Err(_) if value.is_zero() => {}
            Err(position) => self.insert_at(position, index, value),
        }
    }

    fn add(&mut self, index: usize, addend: T) {
        if addend.is_zero() {
            return;
        }
        match self.position(index) {
            Ok(position) => {
                let sum = self.values[position].clone() + addend;
                if sum.is_zero() {
                    self.remove_at(position);
                } else {
                    self.values[position] = sum;
                }
            }
            Err(position) => self.insert_at(position, index, addend),
        }
    }

    fn reset(&mut self) {
        self.indices.clear();
        self.values.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        self.indices.len()
    }

    fn first_in_range(&self, first: usize, limit: usize) -> usize {
        let position = self.indices.partition_point(|&i| i < first);
        match self.indices.get(position) {
            Some(&index) if index < limit => index,
            _ => limit,
        }
    }

    fn limit_of_range(&self, first: usize, limit: usize) -> usize {
        let position = self.indices.partition_point(|&i| i < limit);
        match position.checked_sub(1).map(|p| self.indices[p]) {
            Some(index) if index >= first => index + 1,
            _ => first,
        }
    }

    fn nonzeros_in(&self, first: usize, limit: usize) -> Nonzeros<'_, T> {
        let lo = self.indices.partition_point(|&i| i < first);
        let hi = self.indices.partition_point(|&i| i < limit).max(lo);
        Box::new(
            self.indices[lo..hi]
                .iter()
                .copied()
                .zip(self.values[lo..hi].iter()),
        )
    }
}
