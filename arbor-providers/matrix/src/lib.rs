//! Adjacency-matrix text provider.
//!
//! Reads a whitespace-separated header of vertex labels followed by one row
//! of integer weights per label, and turns it into an [`arbor_core::Graph`].

mod errors;
mod parse;
mod provider;

pub use errors::MatrixProviderError;
pub use provider::AdjacencyMatrix;

#[cfg(test)]
mod tests;
