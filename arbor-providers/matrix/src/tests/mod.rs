pub(crate) use super::{AdjacencyMatrix, MatrixProviderError};
