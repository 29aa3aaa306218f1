//! Benchmark parameter types.

use std::fmt;

/// Parameters for a synthetic graph benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Edges added on top of the spanning tree, per vertex.
    pub extra_degree: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},extra={}", self.vertex_count, self.extra_degree)
    }
}
