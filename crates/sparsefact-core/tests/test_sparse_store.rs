//! Integration tests for the sparse store.
//!
//! This test module checks the store's observable behavior across clear,
//! no-op additions and the three element kinds.

use pretty_assertions::assert_eq;
use sparsefact_core::prelude::*;
use std::str::FromStr;

/// Snapshot of everything observable about a store.
fn snapshot<T: Element>(store: &SparseStore<T>) -> (Vec<(usize, usize, T)>, Vec<(usize, usize)>) {
    let entries = store
        .nonzeros()
        .map(|(row, col, value)| (row, col, value.clone()))
        .collect();
    let ranges = (0..store.rows())
        .map(|row| (store.first_in_row(row), store.limit_of_row(row)))
        .collect();
    (entries, ranges)
}

#[test]
fn test_clear_matches_fresh_store() {
    let mut store = RealSparseStore::new(4, 5);
    store.set(0, 4, 1.0);
    store.add(3, 0, 2.0);
    store.set(2, 2, -1.0);
    store.clear();

    let fresh = RealSparseStore::new(4, 5);
    assert_eq!(snapshot(&store), snapshot(&fresh));
    for row in 0..4 {
        for col in 0..5 {
            assert_eq!(store.get(row, col), fresh.get(row, col));
        }
    }
    for col in 0..5 {
        assert_eq!(store.first_in_column(col), fresh.first_in_column(col));
        assert_eq!(store.limit_of_column(col), fresh.limit_of_column(col));
    }
}

#[test]
fn test_store_reusable_after_clear() {
    let mut store = RealSparseStore::new(2, 2);
    store.set(0, 0, 1.0);
    store.clear();
    store.set(1, 1, 2.0);

    assert_eq!(store.nnz(), 1);
    assert_eq!(store.first_in_row(0), 2);
    assert_eq!((store.first_in_row(1), store.limit_of_row(1)), (1, 2));
}

#[test]
fn test_additive_identity_is_noop() {
    let mut store = RealSparseStore::new(3, 3);
    store.set(1, 1, 4.0);
    let before = snapshot(&store);

    store.add(0, 2, 0.0);
    store.add(1, 1, 0.0);
    store.add(2, 0, -0.0);

    assert_eq!(snapshot(&store), before);
}

#[test]
fn test_additive_identity_is_noop_for_every_kind() {
    let mut complex = ComplexSparseStore::new(2, 2);
    complex.add(1, 0, Complex64::new(0.0, 0.0));
    assert_eq!(complex.nnz(), 0);
    assert_eq!(complex.limit_of_row(1), 0);

    let mut decimal = DecimalSparseStore::new(2, 2);
    decimal.add(0, 1, BigDecimal::from_str("0.000").unwrap());
    assert_eq!(decimal.nnz(), 0);
    assert_eq!(decimal.first_in_row(0), 2);
}

#[test]
fn test_cache_is_an_outer_bound_after_zeroing() {
    let mut store = RealSparseStore::new(1, 8);
    store.set(0, 1, 1.0);
    store.set(0, 6, 1.0);
    store.set(0, 6, 0.0);
    store.set(0, 1, 0.0);

    // Nothing is stored any more, but the bound never tightens
    assert_eq!(store.nnz(), 0);
    assert_eq!((store.first_in_row(0), store.limit_of_row(0)), (1, 7));
}

#[test]
fn test_cancelling_add_removes_entry() {
    let mut store = RealSparseStore::new(2, 2);
    store.add(0, 1, 2.5);
    store.add(0, 1, -2.5);

    assert_eq!(store.nnz(), 0);
    assert_eq!(store.get(0, 1), 0.0);
    assert_eq!(store.limit_of_row(0), 2);
}

#[test]
fn test_column_queries_follow_live_contents() {
    let mut store = RealSparseStore::new(5, 2);
    store.set(4, 1, 1.0);
    store.set(0, 1, 1.0);
    assert_eq!((store.first_in_column(1), store.limit_of_column(1)), (0, 5));

    store.set(0, 1, 0.0);
    store.set(4, 1, 0.0);
    store.set(2, 1, 1.0);
    assert_eq!((store.first_in_column(1), store.limit_of_column(1)), (2, 3));
}

#[test]
fn test_to_dense_round_trip() {
    let dense = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 0.0, 2.0, 3.0, 0.0]);
    let triplets = dense
        .iter()
        .enumerate()
        .filter(|(_, v)| **v != 0.0)
        .map(|(index, v)| (index % 3, index / 3, *v));

    let store = RealSparseStore::from_triplets(3, 2, triplets).unwrap();
    assert_eq!(store.to_dense(), dense);
}

#[test]
fn test_index_errors_carry_context() {
    let mut store = RealSparseStore::new(2, 3);
    let err = store.try_set(2, 3, 1.0).unwrap_err();
    assert_eq!(
        err,
        StoreError::IndexOutOfBounds {
            operation: "set",
            row: 2,
            col: 3,
            rows: 2,
            cols: 3,
        }
    );
    assert_eq!(store.nnz(), 0);
}

#[test]
#[should_panic(expected = "get: index (0, 3) out of bounds for 2x3 matrix")]
fn test_get_out_of_bounds_panics() {
    let store = RealSparseStore::new(2, 3);
    store.get(0, 3);
}

#[test]
#[should_panic(expected = "add: index (5, 0)")]
fn test_add_out_of_bounds_panics_even_for_zero() {
    let mut store = RealSparseStore::new(2, 3);
    store.add(5, 0, 0.0);
}
