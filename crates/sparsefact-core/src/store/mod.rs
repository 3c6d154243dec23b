//! Sparse storage: the element store, the matrix store and its region views.

pub mod access;
pub mod element_store;
pub mod region;
pub mod sparse_store;

// Re-export storage types
pub use access::{MatrixSource, MatrixTarget, Shape};
pub use element_store::{ElementStore, SparseArray};
pub use region::{
    ColumnSelection, IndexMap, Limits, Offsets, RegionView, RowSelection, Transposition,
};
pub use sparse_store::{ComplexSparseStore, DecimalSparseStore, RealSparseStore, SparseStore};
