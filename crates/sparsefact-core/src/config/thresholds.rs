//! Column thresholds for blocked elimination.
//!
//! Thresholds are plain configuration values handed to the blocking driver.
//! The kernels themselves never read them, so changing a threshold can change
//! how work is split but never what is computed.

use crate::compute::elimination::{ApplyCholesky, ApplyLdl};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Thresholds consulted when deciding whether to split a column range.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KernelThresholds {
    /// Column count above which Cholesky updates are split
    pub cholesky: usize,

    /// Column count above which LDL updates are split
    pub ldl: usize,

    /// Whether split blocks may run on the rayon pool
    pub parallel: bool,
}

impl Default for KernelThresholds {
    fn default() -> Self {
        Self {
            cholesky: ApplyCholesky::DEFAULT_THRESHOLD,
            ldl: ApplyLdl::DEFAULT_THRESHOLD,
            parallel: true,
        }
    }
}

impl KernelThresholds {
    /// Create a new builder with default values
    pub fn builder() -> KernelThresholdsBuilder {
        KernelThresholdsBuilder::new()
    }

    /// Default thresholds with every block run on the calling thread.
    ///
    /// Wide ranges are still split into blocks, so results match the
    /// parallel configuration exactly.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

/// Builder for customizing kernel thresholds
#[derive(Debug, Clone, Default)]
pub struct KernelThresholdsBuilder {
    config: KernelThresholds,
}

impl KernelThresholdsBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Cholesky threshold (at least one column)
    pub fn cholesky(mut self, threshold: usize) -> Self {
        self.config.cholesky = threshold.max(1);
        self
    }

    /// Set the LDL threshold (at least one column)
    pub fn ldl(mut self, threshold: usize) -> Self {
        self.config.ldl = threshold.max(1);
        self
    }

    /// Enable or disable parallel blocks
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the configuration
    pub fn build(self) -> KernelThresholds {
        self.config
    }
}
