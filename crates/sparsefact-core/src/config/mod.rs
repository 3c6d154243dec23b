//! Configuration for the elimination drivers.

pub mod thresholds;

// Re-export key items
pub use thresholds::{KernelThresholds, KernelThresholdsBuilder};
