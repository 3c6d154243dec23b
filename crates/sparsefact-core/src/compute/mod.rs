//! Multiplication strategies, elimination kernels and the blocked driver.

pub mod blocking;
pub mod elimination;
pub mod multiply;

// Re-export key types
pub use blocking::BlockedElimination;
pub use elimination::{ApplyCholesky, ApplyLdl, LdlPivot, PanelKernel};
pub use multiply::MultiplyStrategy;
