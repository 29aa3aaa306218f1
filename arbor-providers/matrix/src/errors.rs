use arbor_core::GraphError;
use thiserror::Error;

/// Failures raised while reading an adjacency-matrix file.
///
/// Row numbers are zero-based and count matrix rows only; the header line
/// is not row 0.
#[derive(Debug, Error)]
pub enum MatrixProviderError {
    #[error("input is empty")]
    EmptyInput,
    #[error("header line declares no vertex labels")]
    EmptyHeader,
    #[error("row {row} has {actual} entries but {expected} were expected")]
    InvalidRowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("row {row}, column {column}: `{token}` is not an integer weight")]
    InvalidValue {
        row: usize,
        column: usize,
        token: String,
    },
    #[error("expected {expected} matrix rows but found {actual}")]
    MissingRows { expected: usize, actual: usize },
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
