//! Benchmark setup error type.

use crate::source::SyntheticError;
use sentiero_core::GraphError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic scenario generation failed.
    #[error("synthetic scenario generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Graph construction, propagation or planning failed.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
