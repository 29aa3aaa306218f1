//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of
//! calling `.expect()`.

use arbor_core::GraphError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A graph operation failed while preparing inputs.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
