//! Type definitions for MST property-based tests.
//!
//! Provides the fixture and weight distribution types used by the graph
//! generation strategies and property functions.

use crate::graph::{Graph, Weight};

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight.
    Unique,
    /// Large groups of edges share identical weights, stressing tie order.
    ManyIdentical,
    /// Mixed-sign weights including zero.
    Signed,
    /// Dense graph approaching a complete graph.
    Dense,
    /// Multiple components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
///
/// Captures the vertex count, the generated edges in insertion order, and
/// the weight distribution used during generation, providing full context
/// for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices, labelled `v0..v{n-1}`.
    pub vertex_count: usize,
    /// Generated `(vertex1, vertex2, weight)` triples in insertion order.
    pub edges: Vec<(usize, usize, Weight)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds a [`Graph`] registering every vertex before any edge so
    /// indices match the fixture numbering.
    pub(super) fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();
        for vertex in 0..self.vertex_count {
            graph.add_vertex(&format!("v{vertex}"));
        }
        for &(left, right, weight) in &self.edges {
            graph
                .add_edge_between(left, right, weight)
                .expect("fixture edges reference registered vertices");
        }
        graph
    }

    /// Formats the fixture context appended to failure messages.
    pub(super) fn context(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}
